//! Lumen engine crate.
//!
//! Window, GPU context and frame loop for small wgpu demos, plus the
//! drawables and the orbit camera they use.

pub mod camera;
pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shapes;

#[cfg(test)]
mod testing;
