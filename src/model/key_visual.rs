/// Visual state of an on-screen key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyVisual {
    /// Key is at rest.
    #[default]
    Idle,
    /// Key is held down and drawn highlighted.
    Pressed,
}

impl KeyVisual {
    pub fn is_pressed(self) -> bool {
        matches!(self, KeyVisual::Pressed)
    }
}
