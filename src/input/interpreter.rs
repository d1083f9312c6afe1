//! The key-event interpreter: primary code in, action out.

use super::shift::ShiftState;
use crate::keycodes::{
    COMMAND_SENTINEL_BASE, KEYCODE_DELETE, KEYCODE_DONE, KEYCODE_SHIFT, KEYCODE_SWITCH_LAYOUT,
    SystemKey,
};
use crate::layout::LayoutId;

/// Output of interpreting a single key press.
///
/// Every variant is fully self-describing and independently replayable: the
/// host can dispatch actions to a text sink in any order without consulting
/// interpreter state, which is what makes the state machine testable in
/// isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Commit a single character to the focused field
    CommitText(char),
    /// Delete `count` characters before the cursor
    DeleteBackward(u32),
    /// Synthesize a system key as a down+up pair
    SendKey(SystemKey),
    /// Commands-layout macro: Ctrl held around a digit press, then Enter
    SendControlSequence {
        /// Modifier held for the digit press
        ctrl: SystemKey,
        /// Digit 1-9
        digit: u8,
    },
    /// The active layout changed; hosts re-render the key surface
    SwitchLayout(LayoutId),
    /// The shift flag flipped; hosts update key labels
    ToggleShift,
}

/// State carried between key events for one input session.
///
/// Owned by the host (exactly one instance per active session) and threaded
/// through [`interpret`]; destroyed when the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterState {
    /// Currently active layout
    pub layout: LayoutId,
    /// Sticky shift/caps flag
    pub shift: ShiftState,
}

impl Default for InterpreterState {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpreterState {
    /// Initial state for a fresh input session: QWERTY, shift released.
    pub fn new() -> Self {
        Self {
            layout: LayoutId::Qwerty,
            shift: ShiftState::new(),
        }
    }
}

/// Interprets one primary code against the current state.
///
/// Pure transition function: returns the successor state and the action to
/// dispatch. Unknown codes are never an error; they fall through to the
/// commit-text path and are echoed verbatim.
///
/// # Transition rules
/// - `DELETE` → `DeleteBackward(1)`, state unchanged
/// - `SHIFT` → shift toggled (unconditionally, whatever the layout),
///   `ToggleShift`
/// - `DONE` → `SendKey(Enter)`, state unchanged
/// - `SWITCH_LAYOUT` → layout advances one step in the fixed cycle
/// - commands layout, codes 101-109 → `SendControlSequence` for digits 1-9
/// - anything else → `CommitText`, upper-cased only when shift is active
///   *and* the layout is QWERTY
pub fn interpret(state: InterpreterState, primary_code: i32) -> (InterpreterState, Action) {
    match primary_code {
        KEYCODE_DELETE => (state, Action::DeleteBackward(1)),
        KEYCODE_SHIFT => {
            // The flag flips regardless of layout; only QWERTY reads it for
            // case transformation.
            let mut next = state;
            next.shift.toggle();
            (next, Action::ToggleShift)
        }
        KEYCODE_DONE => (state, Action::SendKey(SystemKey::Enter)),
        KEYCODE_SWITCH_LAYOUT => {
            let mut next = state;
            next.layout = state.layout.next();
            (next, Action::SwitchLayout(next.layout))
        }
        code => {
            if state.layout == LayoutId::Commands {
                if let Some(digit) = command_digit(code) {
                    return (
                        state,
                        Action::SendControlSequence {
                            ctrl: SystemKey::CtrlLeft,
                            digit,
                        },
                    );
                }
            }

            let c = char::from_u32(code as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
            let c = if state.layout == LayoutId::Qwerty {
                state.shift.apply(c)
            } else {
                c
            };
            // Shift is sticky: committing a character does not clear it.
            (state, Action::CommitText(c))
        }
    }
}

/// Maps a commands-layout sentinel (101..=109) to its macro digit.
///
/// Sentinel 100 is deliberately unmapped (there is no Ctrl+0 macro) and falls
/// through to the plain character path.
fn command_digit(code: i32) -> Option<u8> {
    if (COMMAND_SENTINEL_BASE + 1..=COMMAND_SENTINEL_BASE + 9).contains(&code) {
        Some((code - COMMAND_SENTINEL_BASE) as u8)
    } else {
        None
    }
}
