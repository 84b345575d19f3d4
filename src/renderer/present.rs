//! Blit the virtual framebuffer onto a window surface of any size.
//!
//! Uniform scale that fits, centred, black bars on the spare axis,
//! nearest-neighbour sampling (no filtering, pixels stay sharp).

use crate::renderer::Rgba;

/// Where the scaled image lands inside the destination surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    /// Largest uniform fit of `src_w`×`src_h` inside `dst_w`×`dst_h`.
    pub fn fit(src_w: usize, src_h: usize, dst_w: usize, dst_h: usize) -> Self {
        let (src_w, src_h) = (src_w.max(1), src_h.max(1));
        // integer cross-multiplication keeps exact ratios exact
        let (width, height) = if dst_w * src_h <= dst_h * src_w {
            (dst_w, src_h * dst_w / src_w)
        } else {
            (src_w * dst_h / src_h, dst_h)
        };
        Self {
            x: (dst_w - width) / 2,
            y: (dst_h - height) / 2,
            width,
            height,
        }
    }
}

/// Scale `src` into `dst`, letterboxed. `dst` is overwritten completely.
pub fn letterbox(src: &[Rgba], src_w: usize, src_h: usize, dst: &mut [Rgba], dst_w: usize, dst_h: usize) {
    debug_assert_eq!(src.len(), src_w * src_h);
    debug_assert_eq!(dst.len(), dst_w * dst_h);

    dst.fill(0);
    let vp = Viewport::fit(src_w, src_h, dst_w, dst_h);
    if vp.width == 0 || vp.height == 0 || src_w == 0 || src_h == 0 {
        return;
    }

    // source column for every destination column, computed once
    let cols: Vec<usize> = (0..vp.width)
        .map(|x| (x * src_w / vp.width).min(src_w - 1))
        .collect();

    for y in 0..vp.height {
        let sy = (y * src_h / vp.height).min(src_h - 1);
        let src_row = &src[sy * src_w..(sy + 1) * src_w];
        let start = (vp.y + y) * dst_w + vp.x;
        let dst_row = &mut dst[start..start + vp.width];
        for (px, &sx) in dst_row.iter_mut().zip(&cols) {
            *px = src_row[sx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_letterboxes_wide_windows() {
        // 320×200 into 1280×720: height-bound, scale 3.6
        let vp = Viewport::fit(320, 200, 1280, 720);
        assert_eq!((vp.width, vp.height), (1152, 720));
        assert_eq!((vp.x, vp.y), (64, 0));
    }

    #[test]
    fn integer_upscale_repeats_pixels() {
        let src = [1, 2, 3, 4];
        let mut dst = [9; 16];
        letterbox(&src, 2, 2, &mut dst, 4, 4);
        assert_eq!(dst, [1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]);
    }

    #[test]
    fn bars_are_black() {
        let src = [7; 4];
        let mut dst = [9; 6 * 2];
        letterbox(&src, 2, 2, &mut dst, 6, 2);
        // 2×2 image centred in a 6×2 window
        assert_eq!(dst, [0, 0, 7, 7, 0, 0, 0, 0, 7, 7, 0, 0]);
    }
}
