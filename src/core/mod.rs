//! Pure visualizer core: spectral reduction, deformation math, mesh and
//! camera construction. No `web_sys` or `wgpu` types here so the whole
//! module tree is testable on the host.

pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod deform;
pub mod mesh;
pub mod spectrum;

pub use camera::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use deform::*;
pub use mesh::*;
pub use spectrum::*;

// Shaders bundled as string constants
pub static ORB_WGSL: &str = include_str!("../../shaders/orb.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
