//! Desktop host platform for the Fragrance Maker app: console rasterizing,
//! presenters, keyboard input, frame pacing, and the browser launcher.

pub mod input;
pub mod platform;
pub mod render;
