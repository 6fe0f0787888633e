/// Press state of a single bound key.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    /// Whether the key is currently held down.
    pub pressed: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset frame-specific state (just_pressed/just_released).
    /// Called at the start of each frame.
    pub fn reset_frame_state(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }

    /// Update state when the key goes down. Repeated presses while held are
    /// ignored so a held key does not retrigger.
    pub fn on_press(&mut self) {
        if !self.pressed {
            self.pressed = true;
            self.just_pressed = true;
        }
    }

    /// Update state when the key comes up.
    pub fn on_release(&mut self) {
        if self.pressed {
            self.pressed = false;
            self.just_released = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_released() {
        let state = KeyState::new();
        assert!(!state.pressed);
        assert!(!state.just_pressed);
        assert!(!state.just_released);
    }

    #[test]
    fn press_sets_edge_flag() {
        let mut state = KeyState::new();
        state.on_press();
        assert!(state.pressed);
        assert!(state.just_pressed);
        assert!(!state.just_released);
    }

    #[test]
    fn release_sets_edge_flag() {
        let mut state = KeyState::new();
        state.on_press();
        state.reset_frame_state();
        state.on_release();
        assert!(!state.pressed);
        assert!(!state.just_pressed);
        assert!(state.just_released);
    }

    #[test]
    fn double_press_ignored() {
        let mut state = KeyState::new();
        state.on_press();
        state.reset_frame_state();
        state.on_press();
        assert!(!state.just_pressed);
    }

    #[test]
    fn release_without_press_ignored() {
        let mut state = KeyState::new();
        state.on_release();
        assert!(!state.just_released);
    }

    #[test]
    fn reset_frame_state_keeps_pressed() {
        let mut state = KeyState::new();
        state.on_press();
        state.reset_frame_state();
        assert!(!state.just_pressed);
        assert!(state.pressed);
    }
}
