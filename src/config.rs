//! Command-line configuration.
//!
//! ```bash
//! cargo run --release -- --map assets/map.txt --mode textured
//! cargo run --release -- --map assets/map_flat.txt --mode flat --no-minimap
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::dvec2;
use thiserror::Error;

use crate::{
    map::MapFormat,
    renderer::RenderSettings,
    sim::Player,
    world::{Camera, TextureId},
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("virtual resolution {width}x{height} is too small (need at least 2x2)")]
    VirtualTooSmall { width: usize, height: usize },

    #[error("window resolution {width}x{height} has a zero side")]
    WindowEmpty { width: usize, height: usize },

    #[error("field of view {0} deg is outside (0, 180)")]
    Fov(f64),

    #[error("{name} must be a positive number, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("start position ({x}, {y}) is not a finite non-negative point")]
    Start { x: f64, y: f64 },
}

/// Shading strategy. Also picks the map text format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Solid colours, `.` / `R` maps, sky gradient.
    Flat,
    /// Procedural textures, digit maps, floor / ceiling casting.
    Textured,
}

impl Mode {
    pub fn map_format(self) -> MapFormat {
        match self {
            Mode::Flat => MapFormat::Flat,
            Mode::Textured => MapFormat::Textured,
        }
    }
}

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Grid raycaster with a software column renderer")]
pub struct Config {
    /// Map asset, one row per line
    #[arg(long, value_name = "FILE", default_value = "assets/map.txt")]
    pub map: PathBuf,

    #[arg(long, value_enum, default_value_t = Mode::Textured)]
    pub mode: Mode,

    #[arg(long, default_value_t = 320)]
    pub virtual_width: usize,

    #[arg(long, default_value_t = 200)]
    pub virtual_height: usize,

    #[arg(long, default_value_t = 1280)]
    pub window_width: usize,

    #[arg(long, default_value_t = 720)]
    pub window_height: usize,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 66.6)]
    pub fov: f64,

    #[arg(long, default_value_t = 9.0)]
    pub start_x: f64,

    #[arg(long, default_value_t = 9.0)]
    pub start_y: f64,

    /// Initial heading in degrees, counter-clockwise, 90 = up
    #[arg(long, default_value_t = 90.0)]
    pub direction: f64,

    /// Walk speed in grid units per second
    #[arg(long, default_value_t = 5.0)]
    pub speed: f64,

    /// Turn speed in radians per second
    #[arg(long, default_value_t = 1.3)]
    pub turn_rate: f64,

    #[arg(long)]
    pub no_minimap: bool,

    /// Window frame limit, 0 = unlimited
    #[arg(long, default_value_t = 0)]
    pub target_fps: usize,

    /// Floor texture id (textured mode)
    #[arg(long, default_value_t = 4)]
    pub floor_texture: TextureId,

    /// Ceiling texture id (textured mode)
    #[arg(long, default_value_t = 6)]
    pub ceiling_texture: TextureId,
}

impl Default for Config {
    fn default() -> Self {
        // same values as the clap defaults
        Self::parse_from(["raycaster"])
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.virtual_width < 2 || self.virtual_height < 2 {
            return Err(ConfigError::VirtualTooSmall {
                width: self.virtual_width,
                height: self.virtual_height,
            });
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::WindowEmpty {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::Fov(self.fov));
        }
        for (name, value) in [("speed", self.speed), ("turn-rate", self.turn_rate)] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if !(self.start_x >= 0.0 && self.start_y >= 0.0)
            || !self.start_x.is_finite()
            || !self.start_y.is_finite()
        {
            return Err(ConfigError::Start {
                x: self.start_x,
                y: self.start_y,
            });
        }
        Ok(())
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            width: self.virtual_width,
            height: self.virtual_height,
            minimap: !self.no_minimap,
        }
    }

    /// Player at the configured start pose.
    pub fn player(&self) -> Player {
        let camera = Camera::new(
            dvec2(self.start_x, self.start_y),
            self.direction.to_radians(),
            self.fov.to_radians(),
        );
        Player {
            speed: self.speed,
            turn_rate: self.turn_rate,
            ..Player::new(camera)
        }
    }
}
