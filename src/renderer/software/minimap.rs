use crate::{
    renderer::{Rgba, software::Software},
    world::{Camera, EMPTY, GridMap},
};

pub const MINIMAP_WALL: Rgba = 0x00_FFFFFF;
pub const MINIMAP_EMPTY: Rgba = 0x00_000000;
pub const MINIMAP_PLAYER: Rgba = 0x00_FF0000;

impl Software {
    /// Grid at 1 tile = 1 pixel in the top-left corner, player cell marked.
    ///
    /// Overwrites whatever the earlier passes drew there. Cells past the
    /// framebuffer edge are skipped.
    pub(super) fn overlay_minimap(&mut self, grid: &GridMap, camera: &Camera) {
        let w = grid.width().min(self.width);
        let h = grid.height().min(self.height);

        for (y, row) in grid.rows().take(h).enumerate() {
            let dst = &mut self.scratch[y * self.width..y * self.width + w];
            for (px, &tile) in dst.iter_mut().zip(row) {
                *px = if tile == EMPTY { MINIMAP_EMPTY } else { MINIMAP_WALL };
            }
        }

        let pos = camera.pos();
        if pos.x >= 0.0 && pos.y >= 0.0 {
            let (px, py) = (pos.x as usize, pos.y as usize);
            if px < w && py < h {
                self.scratch[py * self.width + px] = MINIMAP_PLAYER;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Renderer;
    use glam::dvec2;

    #[test]
    fn grid_and_player_are_drawn_one_to_one() {
        let g = GridMap::new(3, 3, vec![1, 1, 1, 1, 0, 1, 1, 1, 1]).unwrap();
        let cam = Camera::new(dvec2(1.5, 1.5), 0.0, 1.0);
        let mut sw = Software::default();
        sw.begin_frame(5, 4);
        sw.overlay_minimap(&g, &cam);

        let mut out = Vec::new();
        sw.end_frame(|fb, _, _| out.extend_from_slice(fb));
        assert_eq!(out[0], MINIMAP_WALL);
        assert_eq!(out[5 + 1], MINIMAP_PLAYER);
        assert_eq!(out[2 * 5 + 2], MINIMAP_WALL);
        // untouched outside the map area
        assert_eq!(out[3], 0);
        assert_eq!(out[3 * 5], 0);
    }

    #[test]
    fn empty_cells_are_black_and_big_maps_do_not_panic() {
        let g = GridMap::new(6, 6, vec![0; 36]).unwrap();
        let cam = Camera::new(dvec2(5.5, 0.5), 0.0, 1.0);
        let mut sw = Software::default();
        sw.begin_frame(4, 3);
        sw.scratch.fill(0x123456);
        sw.overlay_minimap(&g, &cam);
        // player is outside the 4×3 buffer: no marker anywhere
        assert!(sw.scratch.iter().all(|&px| px == MINIMAP_EMPTY));
    }
}
