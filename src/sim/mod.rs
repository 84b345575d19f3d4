mod components;
mod movement;
mod tic;

pub use components::InputCmd;
pub use movement::{MOVE_SPEED, MoveResult, Player, TURN_RATE};
pub use tic::{FPS_WINDOW, FpsCounter, FrameClock, MAX_DT};
