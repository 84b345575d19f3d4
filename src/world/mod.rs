mod camera;
mod grid;
mod texture;

pub use camera::Camera;

pub use grid::{EMPTY, GridError, GridMap, OUT_OF_BOUNDS, Tile};

pub use texture::{NO_TEXTURE, PROCEDURAL_SIZE, Texture, TextureBank, TextureError, TextureId};
