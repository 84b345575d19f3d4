//! Grid DDA ray walk and the perspective maths built on it.
//!
//! Rays step cell by cell along whichever axis reaches its next grid line
//! first. Axis-parallel rays get an infinite `delta` on the other axis,
//! which simply never wins the comparison.

use glam::DVec2;

use crate::world::{Camera, EMPTY, GridMap, OUT_OF_BOUNDS, Tile};

/// Which family of grid lines the ray crossed last.
///
/// `X` = vertical wall face (the ray stepped along X), `Y` = horizontal face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    X,
    Y,
}

/// Where and how a single ray met a wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Grid cell of the wall.
    pub cell: (i64, i64),
    pub tile: Tile,
    pub side: Side,
    /// Length along the (unit) ray to the wall face.
    pub ray_distance: f64,
    /// `ray_distance` projected onto the view axis (fisheye-free).
    pub perp_distance: f64,
    /// Fractional hit position along the wall face, `[0, 1)`.
    pub wall_u: f64,
    pub dir: DVec2,
    /// Number of DDA steps taken.
    pub steps: usize,
}

/// Step direction for one axis; an exactly-zero component never moves.
#[inline(always)]
fn step_sign(v: f64) -> i64 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Walk `dir` from `origin` until a wall is hit.
///
/// Returns `None` when the ray leaves the map (the grid answers
/// [`OUT_OF_BOUNDS`]) or when `dir` cannot advance at all.
/// `perp_distance` equals `ray_distance` here; see [`cast_column`].
pub fn cast_ray(grid: &GridMap, origin: DVec2, dir: DVec2) -> Option<RayHit> {
    if !dir.is_finite() {
        return None;
    }

    // |1/0| = inf: that axis is never the nearer crossing
    let delta = DVec2::new((1.0 / dir.x).abs(), (1.0 / dir.y).abs());
    if delta.x.is_infinite() && delta.y.is_infinite() {
        return None;
    }

    let mut map_x = origin.x.floor() as i64;
    let mut map_y = origin.y.floor() as i64;
    let step_x = step_sign(dir.x);
    let step_y = step_sign(dir.y);

    // distance to the first grid line on each axis
    let mut side_x = if dir.x < 0.0 {
        (origin.x - map_x as f64) * delta.x
    } else {
        (map_x as f64 + 1.0 - origin.x) * delta.x
    };
    let mut side_y = if dir.y < 0.0 {
        (origin.y - map_y as f64) * delta.y
    } else {
        (map_y as f64 + 1.0 - origin.y) * delta.y
    };

    let mut side;
    let mut steps = 0usize;
    let tile = loop {
        if side_x < side_y {
            side_x += delta.x;
            map_x += step_x;
            side = Side::X;
        } else {
            side_y += delta.y;
            map_y += step_y;
            side = Side::Y;
        }
        steps += 1;

        match grid.at(map_x, map_y) {
            OUT_OF_BOUNDS => return None,
            EMPTY => continue,
            t => break t,
        }
    };

    // offset of the near face: 0 when stepping +, 1 when stepping −
    let ray_distance = match side {
        Side::X => (map_x as f64 - origin.x + ((1 - step_x) / 2) as f64) / dir.x,
        Side::Y => (map_y as f64 - origin.y + ((1 - step_y) / 2) as f64) / dir.y,
    };

    let wall = match side {
        Side::X => origin.y + ray_distance * dir.y,
        Side::Y => origin.x + ray_distance * dir.x,
    };
    let wall_u = (wall - wall.floor()).clamp(0.0, 1.0 - f64::EPSILON);

    Some(RayHit {
        cell: (map_x, map_y),
        tile,
        side,
        ray_distance,
        perp_distance: ray_distance,
        wall_u,
        dir,
        steps,
    })
}

/// Cast the ray for screen column `col` of a `width`-column view and
/// correct its distance for fisheye.
pub fn cast_column(grid: &GridMap, camera: &Camera, col: usize, width: usize) -> Option<RayHit> {
    let alpha = camera.column_angle(col, width);
    let mut hit = cast_ray(grid, camera.pos(), Camera::dir_for(alpha))?;
    hit.perp_distance = hit.ray_distance * (alpha - camera.yaw()).cos();
    Some(hit)
}

/// On-screen height of a wall at perpendicular distance `perp`.
#[inline]
pub fn slice_height(projection_distance: f64, perp: f64) -> f64 {
    projection_distance / perp
}

/// Texture column for `hit` in a texture `tex_w` texels wide.
///
/// The column is mirrored when the ray travels +X into an X face or −Y into
/// a Y face, so every face reads left-to-right from the viewer's side.
#[inline]
pub fn texture_column(hit: &RayHit, tex_w: usize) -> usize {
    let tex_x = ((hit.wall_u * tex_w as f64) as usize).min(tex_w - 1);
    let mirrored = match hit.side {
        Side::X => hit.dir.x > 0.0,
        Side::Y => hit.dir.y < 0.0,
    };
    if mirrored { tex_w - tex_x - 1 } else { tex_x }
}

/// Vertical extent of one wall slice, clipped to the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceSpan {
    /// Unclipped slice height in whole pixels.
    pub height: i64,
    /// First row drawn (inclusive).
    pub begin: usize,
    /// Last row drawn (exclusive).
    pub end: usize,
}

impl SliceSpan {
    /// Centre a slice of `slice_height` pixels on the screen's midline.
    pub fn new(slice_height: f64, screen_h: usize) -> Self {
        // `as` saturates, so a zero distance gives i64::MAX, not UB
        let height = slice_height as i64;
        let mid = (screen_h / 2) as i64;
        let begin = (mid - height / 2).clamp(0, screen_h as i64);
        let end = (mid + height / 2).clamp(0, screen_h as i64);
        Self {
            height,
            begin: begin as usize,
            end: end as usize,
        }
    }

    /// Texture V for the first drawn row plus the per-row step.
    ///
    /// Starts from the clipped `begin`, so slices taller than the screen
    /// still sample the right band of the texture.
    pub fn texture_walk(&self, screen_h: usize, tex_h: usize) -> (f64, f64) {
        if self.height <= 0 {
            return (0.0, 0.0);
        }
        let step = tex_h as f64 / self.height as f64;
        let offset = self.begin as i64 - (screen_h / 2) as i64 + self.height / 2;
        (offset as f64 * step, step)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
