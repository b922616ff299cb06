pub mod loader;
pub mod texture;
