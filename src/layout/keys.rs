//! Static key tables for the built-in layouts.

use super::{Layout, LayoutId};
use crate::keycodes::{
    KEYCODE_DELETE, KEYCODE_DONE, KEYCODE_SHIFT, KEYCODE_SWITCH_LAYOUT,
};

/// A single key definition: a display label and the primary code it emits.
#[derive(Debug, Clone)]
pub struct Key {
    /// Label shown on the key face
    pub label: String,
    /// Primary code emitted on press (character code or control sentinel)
    pub code: i32,
}

/// One horizontal row of keys.
#[derive(Debug, Clone)]
pub struct KeyRow {
    pub keys: Vec<Key>,
}

fn char_row(chars: &str) -> KeyRow {
    KeyRow {
        keys: chars
            .chars()
            .map(|c| Key {
                label: c.to_string(),
                code: c as i32,
            })
            .collect(),
    }
}

fn control(label: &str, code: i32) -> Key {
    Key {
        label: label.to_string(),
        code,
    }
}

fn bottom_row() -> KeyRow {
    KeyRow {
        keys: vec![
            control("?123", KEYCODE_SWITCH_LAYOUT),
            control("space", ' ' as i32),
            control("done", KEYCODE_DONE),
        ],
    }
}

/// Standard letter layout with shift, delete, and layout-switch controls.
pub fn qwerty() -> Layout {
    let mut third = char_row("zxcvbnm");
    third.keys.insert(0, control("shift", KEYCODE_SHIFT));
    third.keys.push(control("del", KEYCODE_DELETE));

    Layout {
        id: LayoutId::Qwerty,
        rows: vec![
            char_row("qwertyuiop"),
            char_row("asdfghjkl"),
            third,
            bottom_row(),
        ],
    }
}

/// Digits and common punctuation.
pub fn numeric() -> Layout {
    let mut third = char_row(".,?!'#%^*+=");
    third.keys.push(control("del", KEYCODE_DELETE));

    Layout {
        id: LayoutId::Numeric,
        rows: vec![
            char_row("1234567890"),
            char_row("-/:;()$&@\""),
            third,
            bottom_row(),
        ],
    }
}

/// Command macro layout: C1-C9 send Ctrl+digit+Enter.
///
/// The macro sentinels are `100 + n` for Cn; there is no C0 key, so code 100
/// never appears in the table.
pub fn commands() -> Layout {
    let macro_row = |range: std::ops::RangeInclusive<i32>| KeyRow {
        keys: range
            .map(|code| Key {
                label: format!("C{}", code - 100),
                code,
            })
            .collect(),
    };

    let mut last = KeyRow {
        keys: vec![control("del", KEYCODE_DELETE)],
    };
    last.keys.extend(bottom_row().keys);

    Layout {
        id: LayoutId::Commands,
        rows: vec![macro_row(101..=103), macro_row(104..=106), macro_row(107..=109), last],
    }
}
