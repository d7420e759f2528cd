/// Keyboard key identifier.
///
/// Only keys the demos care about are named; everything else maps to
/// `Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,

    Key {
        key: Key,
        state: KeyState,
        /// True for auto-repeat presses.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// Key-down helper.
    pub fn key_pressed(key: Key) -> Self {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    /// True for a close request or an Escape key press.
    pub fn is_quit_request(&self) -> bool {
        matches!(
            self,
            InputEvent::Quit
                | InputEvent::Key {
                    key: Key::Escape,
                    state: KeyState::Pressed,
                    ..
                }
        )
    }
}
