//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Pass order per frame: floor / ceiling rows, wall columns, minimap.
//! * The buffer is rewritten completely every frame and never read back.
//! ---------------------------------------------------------------------------

use crate::{
    renderer::{Renderer, Rgba, Shader},
    world::{Camera, GridMap},
};

mod minimap;
mod planes;
mod raycast;
mod walls;

pub use minimap::{MINIMAP_EMPTY, MINIMAP_PLAYER, MINIMAP_WALL};
pub use planes::PlaneRow;
pub use raycast::{
    RayHit, Side, SliceSpan, cast_column, cast_ray, slice_height, texture_column,
};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

/// Wolfenstein-style column renderer.
#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    /// Ray result per column of the last frame.
    hits: Vec<Option<RayHit>>,
    width: usize,
    height: usize,
}

impl Software {
    /// Ray results of the most recent `draw_walls`, one per column.
    pub fn column_hits(&self) -> &[Option<RayHit>] {
        &self.hits
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
            self.hits.resize(w, None);
        }
        self.scratch.fill(0);
        self.hits.fill(None);
    }

    fn draw_planes<S: Shader>(&mut self, camera: &Camera, shader: &S) {
        self.fill_planes(camera, shader);
    }

    fn draw_walls<S: Shader>(&mut self, grid: &GridMap, camera: &Camera, shader: &S) {
        self.cast_walls(grid, camera, shader);
    }

    fn draw_minimap(&mut self, grid: &GridMap, camera: &Camera) {
        self.overlay_minimap(grid, camera);
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
