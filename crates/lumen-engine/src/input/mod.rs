//! Input events.
//!
//! The public API does not expose winit types; the runtime translates window
//! system events into `InputEvent`s before the loop and the app see them.

mod translate;
mod types;

pub(crate) use translate::translate_window_event;
pub use types::{InputEvent, Key, KeyState};
