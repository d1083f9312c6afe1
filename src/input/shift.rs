//! Shift/caps state tracking.

/// Shift/caps state.
///
/// A single sticky flag: toggled by the shift key and held until toggled
/// again, never auto-cleared after a character. Case transformation is only
/// applied by the interpreter when the QWERTY layout is active; other layouts
/// carry the flag without reading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftState {
    /// Whether shift/caps is currently engaged
    pub active: bool,
}

impl ShiftState {
    /// Creates a new ShiftState with shift released.
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Flips the shift flag.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// Applies the case transformation to a character.
    ///
    /// Returns the upper-cased character when shift is active and the
    /// character is alphabetic; otherwise returns it unchanged. Layouts only
    /// carry ASCII letters, so ASCII upper-casing is sufficient.
    pub fn apply(&self, c: char) -> char {
        if self.active && c.is_alphabetic() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}
