//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single demo window, and wires them to
//! the GPU layer and the app.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
