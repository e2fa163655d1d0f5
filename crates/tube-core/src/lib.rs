pub mod camera;
pub mod config;
pub mod constants;
pub mod ensemble;
pub mod geometry;
pub mod palette;
pub mod tween;

pub static TUBE_WGSL: &str = include_str!("../shaders/tube.wgsl");

pub use camera::*;
pub use config::*;
pub use ensemble::*;
pub use geometry::*;
pub use palette::*;
pub use tween::*;
