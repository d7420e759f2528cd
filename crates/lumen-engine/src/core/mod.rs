//! Engine-facing contracts.
//!
//! The interface between the runtime loop and the demo apps: the `App` trait,
//! the running flag, and the per-frame context passed explicitly to apps.

mod app;
mod ctx;
mod loop_state;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub(crate) use ctx::{logical_viewport, surface_outcome};
pub use loop_state::LoopState;
