//! Player pose update: turning plus tile-occupancy collision.
//!
//! A step either lands entirely on an empty in-bounds tile or is
//! rejected outright; there is no sliding along walls.

use glam::DVec2;

use super::InputCmd;
use crate::world::{Camera, GridMap};

pub const MOVE_SPEED: f64 = 5.0; // grid units / second
pub const TURN_RATE: f64 = 1.3; // rad / second

/// What happened to the pose during one update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub turned: bool,
    pub moved: bool,
    /// A step was requested but the destination tile was not walkable.
    pub blocked: bool,
}

/// Camera plus the movement tuning that belongs to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub camera: Camera,
    pub speed: f64,
    pub turn_rate: f64,
}

impl Player {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            speed: MOVE_SPEED,
            turn_rate: TURN_RATE,
        }
    }

    /// Apply one intent snapshot over `dt` seconds.
    ///
    /// Turning happens first, then the walk uses the new heading.
    pub fn update(&mut self, grid: &GridMap, cmd: InputCmd, dt: f64) -> MoveResult {
        let mut result = MoveResult::default();

        let turn = cmd.turn();
        if turn != 0.0 {
            self.camera.turn(turn * self.turn_rate * dt);
            result.turned = true;
        }

        let walk = cmd.walk();
        if walk != 0.0 {
            let delta = self.camera.forward() * (walk * self.speed * dt);
            result.moved = self.try_move(grid, delta);
            result.blocked = !result.moved;
        }
        result
    }

    /// Move by `delta` unless the destination tile is a wall or off the map.
    pub fn try_move(&mut self, grid: &GridMap, delta: DVec2) -> bool {
        let next = self.camera.pos() + delta;
        if !grid.is_walkable(next.x, next.y) {
            return false;
        }
        self.camera.set_pos(next);
        true
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::f64::consts::{FRAC_PI_2, TAU};

    fn corridor() -> GridMap {
        // 5×3, open middle row
        #[rustfmt::skip]
        let cells = vec![
            1, 1, 1, 1, 1,
            1, 0, 0, 0, 1,
            1, 1, 1, 1, 1,
        ];
        GridMap::new(5, 3, cells).unwrap()
    }

    fn player_at(x: f64, y: f64, yaw: f64) -> Player {
        Player::new(Camera::new(dvec2(x, y), yaw, 1.0))
    }

    #[test]
    fn forward_moves_along_heading() {
        let g = corridor();
        let mut p = player_at(1.5, 1.5, 0.0);
        let r = p.update(&g, InputCmd::FORWARD, 0.1);
        assert!(r.moved && !r.blocked && !r.turned);
        assert!((p.camera.pos() - dvec2(2.0, 1.5)).length() < 1e-12);

        let r = p.update(&g, InputCmd::BACKWARD, 0.1);
        assert!(r.moved);
        assert!((p.camera.pos() - dvec2(1.5, 1.5)).length() < 1e-12);
    }

    #[test]
    fn walls_reject_the_step() {
        let g = corridor();
        // facing up (90°): next tile north is a wall
        let mut p = player_at(2.5, 1.5, FRAC_PI_2);
        let before = p.camera.pos();
        let r = p.update(&g, InputCmd::FORWARD, 0.2);
        assert!(r.blocked && !r.moved);
        assert_eq!(p.camera.pos(), before);
    }

    #[test]
    fn leaving_the_map_is_rejected() {
        let g = GridMap::new(3, 3, vec![0; 9]).unwrap();
        let mut p = player_at(1.5, 0.5, 0.0);
        assert!(!p.try_move(&g, dvec2(2.0, 0.0)));
        assert!(!p.try_move(&g, dvec2(0.0, -0.6)));
        assert_eq!(p.camera.pos(), dvec2(1.5, 0.5));
        assert!(p.try_move(&g, dvec2(-1.0, 0.0)));
    }

    #[test]
    fn fractional_last_column_is_off_the_map() {
        let g = GridMap::new(3, 1, vec![0; 3]).unwrap();
        let mut p = player_at(1.5, 0.0, 0.0);
        assert!(!p.try_move(&g, dvec2(1.0, 0.0)));
        assert_eq!(p.camera.pos(), dvec2(1.5, 0.0));
        // the left edge of the last column is still inside
        assert!(p.try_move(&g, dvec2(0.5, 0.0)));
        assert_eq!(p.camera.pos(), dvec2(2.0, 0.0));
    }

    #[test]
    fn turning_keeps_yaw_normalised() {
        let g = corridor();
        let mut p = player_at(1.5, 1.5, 0.1);
        for _ in 0..100 {
            p.update(&g, InputCmd::TURN_RIGHT, 0.05);
            let yaw = p.camera.yaw();
            assert!((0.0..TAU).contains(&yaw), "yaw {yaw}");
        }
        let mut p = player_at(1.5, 1.5, TAU - 0.01);
        p.update(&g, InputCmd::TURN_LEFT, 0.1);
        assert!((p.camera.yaw() - (0.13 - 0.01)).abs() < 1e-9);
    }
}
