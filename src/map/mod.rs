mod loader;

pub use loader::{FLAT_WALL, MapError, MapFormat, load_map, parse_map};
