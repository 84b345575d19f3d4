//! Rendering abstraction layer.
//!
//! *The frame loop never touches a pixel buffer directly.*
//! It hands the map, the camera and a [`Shader`] to a type that implements
//! [`Renderer`] and receives the finished frame through a closure.
//!
//! * One DDA / projection pipeline serves both looks; flat colours and
//!   textures only differ in the [`Shader`] plugged in.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use crate::world::{Camera, GridMap};

pub mod present;
mod shading;
pub mod software;

pub use shading::{FlatShading, Shader, Shading, TexturedShading};
pub use software::Software;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Brightness (percent) for Y-side walls and textured floors / ceilings.
pub const HALF_BRIGHTNESS: u32 = 50;

/// Brightness (percent) for Y-side walls in the flat look.
pub const FLAT_SIDE_BRIGHTNESS: u32 = 70;

/// Pack three 8-bit channels.
#[inline(always)]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Scale every channel to `percent` of its value (integer maths, rounds down).
#[inline(always)]
pub fn scale(color: Rgba, percent: u32) -> Rgba {
    let percent = percent.min(100);
    let ch = |shift: u32| (((color >> shift) & 0xFF) * percent / 100) as u8;
    rgb(ch(16), ch(8), ch(0))
}

/// Per-frame knobs that do not belong to the camera or the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Virtual framebuffer size.
    pub width: usize,
    pub height: usize,
    /// Overlay the tile grid in the top-left corner.
    pub minimap: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 320,
            height: 200,
            minimap: true,
        }
    }
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// The buffer is write-only for the passes; nothing is read back for logic.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Fill every row with floor / ceiling (or the shader's backdrop).
    fn draw_planes<S: Shader>(&mut self, camera: &Camera, shader: &S);

    /// Cast one ray per column and draw the wall slices.
    fn draw_walls<S: Shader>(&mut self, grid: &GridMap, camera: &Camera, shader: &S);

    /// Overlay the tile grid and the player marker.
    fn draw_minimap(&mut self, grid: &GridMap, camera: &Camera);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    /// Planes first, walls over them, minimap composited last.
    fn draw_frame<S, F>(
        &mut self,
        settings: &RenderSettings,
        grid: &GridMap,
        camera: &Camera,
        shader: &S,
        submit: F,
    ) where
        S: Shader,
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(settings.width, settings.height);
        self.draw_planes(camera, shader);
        self.draw_walls(grid, camera, shader);
        if settings.minimap {
            self.draw_minimap(grid, camera);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_channels() {
        assert_eq!(rgb(0x12, 0x34, 0x56), 0x00_123456);
    }

    #[test]
    fn half_brightness_matches_shift_mask() {
        // same visible result as the classic `(c >> 1) & 0x7F7F7F`
        for c in [0x00_FFFFFF, 0x00_123456, 0x00_FE0000, 0x00_010101, 0] {
            assert_eq!(scale(c, HALF_BRIGHTNESS), (c >> 1) & 0x7F7F7F);
        }
    }

    #[test]
    fn flat_side_darkening() {
        assert_eq!(scale(rgb(150, 0, 0), FLAT_SIDE_BRIGHTNESS), rgb(105, 0, 0));
        assert_eq!(scale(rgb(255, 255, 255), FLAT_SIDE_BRIGHTNESS), rgb(178, 178, 178));
    }
}
