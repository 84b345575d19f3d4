use glam::DVec2;

use crate::{
    renderer::{Shader, software::Software},
    world::Camera,
};

/// World-space floor samples for one pair of mirrored screen rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneRow {
    /// Row below the horizon.
    pub floor_row: usize,
    /// Its mirror above the horizon (`height - floor_row - 1`).
    pub ceiling_row: usize,
    /// Floor point under the leftmost column.
    pub start: DVec2,
    /// Increment per screen column.
    pub step: DVec2,
}

impl PlaneRow {
    /// Project floor row `y` (`y >= height / 2`).
    ///
    /// Floor and ceiling are treated as symmetric planes at the same
    /// distance from the eye, so the ceiling row reuses the floor samples.
    pub fn new(camera: &Camera, y: usize, width: usize, height: usize) -> Self {
        let (left, right) = camera.frustum_edges();
        let camera_height = 0.5 * height as f64;

        // the horizon row itself would be infinitely far away
        let p = y.saturating_sub(height / 2).max(1) as f64;
        let horiz_distance = camera_height / p;

        Self {
            floor_row: y,
            ceiling_row: height - y - 1,
            start: camera.pos() + horiz_distance * left,
            step: horiz_distance * (right - left) / width as f64,
        }
    }
}

/// Texel index for the fractional part of a world coordinate.
#[inline(always)]
fn texel(coord: f64, size: usize) -> usize {
    ((size as f64 * (coord - coord.floor())) as usize) & (size - 1)
}

impl Software {
    pub(super) fn fill_planes<S: Shader>(&mut self, camera: &Camera, shader: &S) {
        let (w, h) = (self.width, self.height);
        let (tex_w, tex_h) = shader.texel_size();

        for y in h / 2..h {
            let row = PlaneRow::new(camera, y, w, h);
            let floor_fill = shader.backdrop(row.floor_row, h);
            let ceil_fill = shader.backdrop(row.ceiling_row, h);

            let floor_base = row.floor_row * w;
            let ceil_base = row.ceiling_row * w;

            if let (Some(f), Some(c)) = (floor_fill, ceil_fill) {
                self.scratch[ceil_base..ceil_base + w].fill(c);
                self.scratch[floor_base..floor_base + w].fill(f);
                continue;
            }

            let mut world = row.start;
            for x in 0..w {
                let tx = texel(world.x, tex_w);
                let ty = texel(world.y, tex_h);
                world += row.step;

                self.scratch[ceil_base + x] =
                    ceil_fill.unwrap_or_else(|| shader.ceiling_color(tx, ty));
                self.scratch[floor_base + x] =
                    floor_fill.unwrap_or_else(|| shader.floor_color(tx, ty));
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
