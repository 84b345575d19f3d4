use glam::{DVec2, dvec2};
use std::f64::consts::TAU;

/// Player view-point in grid space.
///
/// * `pos` is fractional grid coordinates (x right, y down).
/// * `yaw` is radians, 0 = +X, counter-clockwise positive, always kept in
///   `[0, 2π)`.
/// * Screen rows grow downward, so every direction vector flips Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pos: DVec2,
    yaw: f64,
    fov: f64,
}

impl Camera {
    /// Create a new camera at `pos`, facing `yaw`, with horizontal FoV `fov`.
    pub fn new(pos: DVec2, yaw: f64, fov: f64) -> Self {
        Self {
            pos,
            yaw: normalize_yaw(yaw),
            fov,
        }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    #[inline]
    pub fn set_pos(&mut self, pos: DVec2) {
        self.pos = pos;
    }

    #[inline]
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Grid-space direction for the absolute angle `alpha`.
    #[inline(always)]
    pub fn dir_for(alpha: f64) -> DVec2 {
        let (s, c) = alpha.sin_cos();
        dvec2(c, -s)
    }

    /// Unit vector pointing where the camera looks.
    #[inline(always)]
    pub fn forward(&self) -> DVec2 {
        Self::dir_for(self.yaw)
    }

    /// Rotate around the view axis (positive = turn left).
    pub fn turn(&mut self, delta_yaw: f64) {
        self.yaw = normalize_yaw(self.yaw + delta_yaw);
    }

    /*───────────────── projection / frustum helpers ─────────────────*/

    /// Absolute angle of the ray through screen column `col`.
    ///
    /// Column 0 is the leftmost ray at `yaw + fov/2`, the last column the
    /// rightmost at `yaw - fov/2`.
    #[inline]
    pub fn column_angle(&self, col: usize, width: usize) -> f64 {
        let span = width.saturating_sub(1).max(1) as f64;
        self.yaw + self.fov * 0.5 - self.fov * (col as f64 / span)
    }

    /// Directions of the two rays bounding the field of view (left, right).
    #[inline]
    pub fn frustum_edges(&self) -> (DVec2, DVec2) {
        let half = self.fov * 0.5;
        (Self::dir_for(self.yaw + half), Self::dir_for(self.yaw - half))
    }

    /// Camera-to-projection-plane distance for viewport width `w`.
    ///
    /// ```text
    /// dist = (w / 2) / tan(fov / 2)
    /// ```
    #[inline]
    pub fn projection_distance(&self, w: usize) -> f64 {
        (w as f64) * 0.5 / (self.fov * 0.5).tan()
    }
}

/// Wrap `yaw` into `[0, 2π)`.
fn normalize_yaw(yaw: f64) -> f64 {
    let wrapped = yaw.rem_euclid(TAU);
    // rem_euclid rounds up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn forward_flips_y_for_screen_space() {
        let cam = Camera::new(DVec2::ZERO, FRAC_PI_2, FRAC_PI_2);
        let f = cam.forward();
        assert!(f.x.abs() < 1e-12);
        assert!((f.y + 1.0).abs() < 1e-12, "90° must point up the screen");
    }

    #[test]
    fn yaw_is_normalised() {
        let mut cam = Camera::new(DVec2::ZERO, -FRAC_PI_2, 1.0);
        assert!((cam.yaw() - 3.0 * FRAC_PI_2).abs() < 1e-12);
        cam.turn(PI);
        assert!((cam.yaw() - FRAC_PI_2).abs() < 1e-12);
        cam.turn(-1e-18);
        assert!(cam.yaw() >= 0.0 && cam.yaw() < TAU);
        cam.turn(-4.0 * TAU);
        assert!(cam.yaw() >= 0.0 && cam.yaw() < TAU);

        // construction goes through the same wrap
        let cam = Camera::new(DVec2::ZERO, -1e-18, 1.0);
        assert!(cam.yaw() >= 0.0 && cam.yaw() < TAU, "yaw {}", cam.yaw());
        assert_eq!(Camera::new(DVec2::ZERO, TAU, 1.0).yaw(), 0.0);
    }

    #[test]
    fn column_angles_span_the_fov() {
        let cam = Camera::new(DVec2::ZERO, 1.0, 0.5);
        assert!((cam.column_angle(0, 320) - 1.25).abs() < 1e-12);
        assert!((cam.column_angle(319, 320) - 0.75).abs() < 1e-12);
        assert!((cam.column_angle(2, 5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn projection_distance_at_90_deg() {
        let cam = Camera::new(DVec2::ZERO, 0.0, FRAC_PI_2);
        assert!((cam.projection_distance(640) - 320.0).abs() < 1e-9);
    }
}
