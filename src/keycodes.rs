//! Reserved primary codes and system key identifiers.
//!
//! Key definitions carry a *primary code*: either a printable character code
//! or one of the negative control sentinels below. The sentinel values match
//! the classic soft-keyboard convention so existing layout tables can be
//! reused verbatim.

/// Toggle shift/caps (QWERTY layout only reads the resulting state).
pub const KEYCODE_SHIFT: i32 = -1;

/// Cycle to the next keyboard layout.
pub const KEYCODE_SWITCH_LAYOUT: i32 = -2;

/// Commit the input session (emitted as an Enter key down+up pair).
pub const KEYCODE_DONE: i32 = -4;

/// Delete one character before the cursor.
pub const KEYCODE_DELETE: i32 = -5;

/// Commands-layout sentinels C1..C9 occupy this range; `code - 100` is the
/// digit sent in the control sequence. Value 100 itself is unmapped and
/// falls through to a plain character commit.
pub const COMMAND_SENTINEL_BASE: i32 = 100;

/// System keys the engine can ask the host to synthesize.
///
/// These are delivered to the [`TextSink`](crate::sink::TextSink) as raw
/// down/up events rather than committed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemKey {
    /// Return/Enter key
    Enter,
    /// Left Control modifier
    CtrlLeft,
    /// Digit key 1-9 (used by the commands layout macros)
    Digit(u8),
}
