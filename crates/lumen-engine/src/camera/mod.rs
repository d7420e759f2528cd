//! Orbit camera: view/projection matrices and a time-driven model rotation,
//! applied to every drawable of its scene.

mod camera;
mod math;

pub use camera::Camera;
pub use math::{basis, model_matrix, rotation_degrees, Basis, Perspective, WORLD_UP};
