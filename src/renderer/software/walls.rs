use crate::{
    renderer::{
        Shader,
        software::{
            Software,
            raycast::{RayHit, SliceSpan, cast_column, slice_height, texture_column},
        },
    },
    world::{Camera, GridMap},
};

impl Software {
    /// One ray per column; columns whose ray leaves the map keep whatever
    /// the plane pass wrote.
    pub(super) fn cast_walls<S: Shader>(&mut self, grid: &GridMap, camera: &Camera, shader: &S) {
        let projection = camera.projection_distance(self.width);

        for col in 0..self.width {
            let hit = cast_column(grid, camera, col, self.width);
            if let Some(hit) = &hit {
                self.draw_wall_column(col, hit, projection, shader);
            }
            self.hits[col] = hit;
        }
    }

    /// Draw a single vertical slice (one screen column).
    fn draw_wall_column<S: Shader>(&mut self, col: usize, hit: &RayHit, projection: f64, shader: &S) {
        let span = SliceSpan::new(slice_height(projection, hit.perp_distance), self.height);
        if span.begin >= span.end {
            return;
        }

        let (tex_w, tex_h) = shader.texel_size();
        let u = texture_column(hit, tex_w);
        let (mut v_pos, v_step) = span.texture_walk(self.height, tex_h);

        for row in span.begin..span.end {
            // power-of-two wrap, same as `% tex_h`
            let v = (v_pos as usize) & (tex_h - 1);
            v_pos += v_step;
            self.scratch[row * self.width + col] = shader.wall_color(hit.tile, hit.side, u, v);
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
