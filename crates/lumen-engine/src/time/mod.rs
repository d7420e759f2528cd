//! Frame timing.
//!
//! - `FrameClock`: one `tick()` per presented frame, yields `FrameTime`
//! - `FpsCounter`: rolling frame rate for the window caption
//! - `FramePacer`: caps the redraw rate at a target fps

mod fps;
mod frame_clock;
mod pacer;

pub use fps::{fps_caption, FpsCounter};
pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
