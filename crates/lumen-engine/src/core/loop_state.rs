use crate::input::InputEvent;

/// The loop's running flag.
///
/// Once cleared it stays cleared; the runtime checks it between events and
/// before every frame, so no frame is drawn after a quit request.
#[derive(Debug, Clone)]
pub struct LoopState {
    running: bool,
}

impl LoopState {
    pub fn new() -> Self {
        Self { running: true }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Applies one polled event. Returns `true` if this event stopped the loop.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        if self.running && event.is_quit_request() {
            log::info!("quit requested ({event:?})");
            self.running = false;
            return true;
        }
        false
    }
}

impl Default for LoopState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState};

    #[test]
    fn quit_event_stops_loop() {
        let mut state = LoopState::new();
        assert!(state.handle_event(&InputEvent::Quit));
        assert!(!state.is_running());
    }

    #[test]
    fn escape_press_stops_loop() {
        let mut state = LoopState::new();
        assert!(state.handle_event(&InputEvent::key_pressed(Key::Escape)));
        assert!(!state.is_running());
    }

    #[test]
    fn other_input_keeps_running() {
        let mut state = LoopState::new();
        let events = [
            InputEvent::key_pressed(Key::Space),
            InputEvent::Key {
                key: Key::Escape,
                state: KeyState::Released,
                repeat: false,
            },
            InputEvent::Focused(false),
        ];
        for ev in &events {
            assert!(!state.handle_event(ev));
        }
        assert!(state.is_running());
    }

    #[test]
    fn stop_is_sticky() {
        let mut state = LoopState::new();
        state.handle_event(&InputEvent::Quit);
        assert!(!state.handle_event(&InputEvent::Quit));
        assert!(!state.is_running());
    }
}
