#[allow(clippy::module_inception)]
mod engine;
mod thread;

use thiserror::Error;

use crate::{config::ConfigError, map::MapError, world::TextureError};

pub use engine::Engine;
pub use thread::{Frame, FrameRequest, RenderThread};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error("cannot spawn render thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("render thread has stopped")]
    RenderThreadGone,
}
