pub mod beam;
pub mod constants;
pub mod label;
pub mod mesh;
pub mod params;
pub mod spectrum;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use beam::*;
pub use constants::*;
pub use label::*;
pub use mesh::*;
pub use params::*;
pub use spectrum::*;
pub use state::*;
