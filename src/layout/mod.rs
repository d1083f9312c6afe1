//! Keyboard layout registry.
//!
//! Holds the immutable key-code tables for the three built-in layouts and
//! implements the fixed layout cycle. Layouts are constructed once at startup
//! from the static definitions in [`keys`] and never mutated afterwards.

pub mod keys;

pub use keys::{Key, KeyRow};

/// Identity of a keyboard layout. Closed set; every identity always resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutId {
    /// Standard letter layout
    Qwerty,
    /// Digits and common symbols
    Numeric,
    /// Command macros C1-C9 (Ctrl+digit+Enter)
    Commands,
}

impl LayoutId {
    /// Returns the next layout in the fixed cycle
    /// Qwerty → Numeric → Commands → Qwerty.
    pub fn next(self) -> LayoutId {
        match self {
            LayoutId::Qwerty => LayoutId::Numeric,
            LayoutId::Numeric => LayoutId::Commands,
            LayoutId::Commands => LayoutId::Qwerty,
        }
    }
}

impl std::fmt::Display for LayoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LayoutId::Qwerty => "qwerty",
            LayoutId::Numeric => "numeric",
            LayoutId::Commands => "commands",
        };
        write!(f, "{name}")
    }
}

/// An immutable keyboard layout: rows of key definitions, each mapping a
/// physical key position to a primary code.
#[derive(Debug)]
pub struct Layout {
    /// Which layout this table belongs to
    pub id: LayoutId,
    /// Key rows, top to bottom
    pub rows: Vec<KeyRow>,
}

impl Layout {
    /// Iterates over every key in the layout, row by row.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flat_map(|row| row.keys.iter())
    }
}

/// Registry of all available layouts.
///
/// All three layouts are statically defined, so lookups never fail.
#[derive(Debug)]
pub struct LayoutRegistry {
    qwerty: Layout,
    numeric: Layout,
    commands: Layout,
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutRegistry {
    /// Builds the registry from the static key tables.
    pub fn new() -> Self {
        Self {
            qwerty: keys::qwerty(),
            numeric: keys::numeric(),
            commands: keys::commands(),
        }
    }

    /// Returns the layout for the given identity. Never fails.
    pub fn layout_for(&self, id: LayoutId) -> &Layout {
        match id {
            LayoutId::Qwerty => &self.qwerty,
            LayoutId::Numeric => &self.numeric,
            LayoutId::Commands => &self.commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes;

    #[test]
    fn layout_cycle_has_period_three() {
        for start in [LayoutId::Qwerty, LayoutId::Numeric, LayoutId::Commands] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn layout_cycle_order_is_fixed() {
        assert_eq!(LayoutId::Qwerty.next(), LayoutId::Numeric);
        assert_eq!(LayoutId::Numeric.next(), LayoutId::Commands);
        assert_eq!(LayoutId::Commands.next(), LayoutId::Qwerty);
    }

    #[test]
    fn registry_resolves_all_identities() {
        let registry = LayoutRegistry::new();
        for id in [LayoutId::Qwerty, LayoutId::Numeric, LayoutId::Commands] {
            assert_eq!(registry.layout_for(id).id, id);
        }
    }

    #[test]
    fn qwerty_contains_letters_and_controls() {
        let registry = LayoutRegistry::new();
        let layout = registry.layout_for(LayoutId::Qwerty);
        assert!(layout.keys().any(|k| k.code == 'q' as i32));
        assert!(layout.keys().any(|k| k.code == keycodes::KEYCODE_SHIFT));
        assert!(layout.keys().any(|k| k.code == keycodes::KEYCODE_DELETE));
        assert!(
            layout
                .keys()
                .any(|k| k.code == keycodes::KEYCODE_SWITCH_LAYOUT)
        );
    }

    #[test]
    fn commands_layout_covers_all_nine_macros() {
        let registry = LayoutRegistry::new();
        let layout = registry.layout_for(LayoutId::Commands);
        for code in 101..=109 {
            assert!(layout.keys().any(|k| k.code == code), "missing C{}", code - 100);
        }
        // No C0: sentinel 100 is deliberately absent from the table.
        assert!(layout.keys().all(|k| k.code != 100));
    }
}
