//! Wolfenstein-style grid raycaster with a software column renderer.
//!
//! * [`world`]: tile grid, camera pose, texture bank
//! * [`map`]: text map assets
//! * [`renderer`]: DDA walls, floor / ceiling casting, minimap, presentation
//! * [`sim`]: input intent, movement, frame clock
//! * [`engine`]: ties the above together, optionally on its own thread

pub mod config;
pub mod engine;
pub mod map;
pub mod renderer;
pub mod sim;
pub mod world;
