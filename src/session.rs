//! Host-side session wiring.
//!
//! A [`Session`] is the long-lived object a host keeps per keyboard instance.
//! It owns the single interpreter state for the active input session, the
//! loaded one-handed settings, and the layout registry, and it threads every
//! key event and control tap through the pure core functions. All events
//! arrive sequentially on the host's event thread; there is no locking and
//! no cancellation.

use log::debug;

use crate::geometry::{self, Frame};
use crate::input::{self, Action, InterpreterState};
use crate::layout::{Layout, LayoutRegistry};
use crate::settings::{KeyboardPosition, OneHandedSettings, SettingsError, SettingsStore};
use crate::sink::{self, TextSink};

/// One-handed control surface buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneHandedControl {
    /// Toggle one-handed mode on/off
    Toggle,
    /// Anchor the keyboard to the left edge
    MoveLeft,
    /// Anchor the keyboard to the right edge
    MoveRight,
    /// Widen the keyboard by one step
    Grow,
    /// Narrow the keyboard by one step
    Shrink,
}

/// Long-lived keyboard session state owned by the host.
pub struct Session<S: SettingsStore> {
    registry: LayoutRegistry,
    state: InterpreterState,
    settings: OneHandedSettings,
    store: S,
}

impl<S: SettingsStore> Session<S> {
    /// Starts a session: builds the layout tables and loads settings once.
    pub fn new(store: S) -> Result<Self, SettingsError> {
        let settings = store.load()?;
        Ok(Self {
            registry: LayoutRegistry::new(),
            state: InterpreterState::new(),
            settings,
            store,
        })
    }

    /// Interprets one key press, advancing the session state.
    ///
    /// The returned action is fully self-describing; pass it to
    /// [`sink::dispatch`] or drop it if no field is focused.
    pub fn handle_key(&mut self, primary_code: i32) -> Action {
        let (next, action) = input::interpret(self.state, primary_code);
        debug!(
            "key {primary_code}: {action:?} (layout {}, shift {})",
            next.layout, next.shift.active
        );
        self.state = next;
        action
    }

    /// Interprets one key press and dispatches it to the focused field.
    ///
    /// With no focused field (`sink` is `None`) the computed action is
    /// discarded; the state transition still happens.
    pub fn dispatch_key(&mut self, primary_code: i32, sink: Option<&mut dyn TextSink>) -> Action {
        let action = self.handle_key(primary_code);
        match sink {
            Some(sink) => sink::dispatch(action, sink),
            None => debug!("no focused field, discarding {action:?}"),
        }
        action
    }

    /// Applies a one-handed control tap.
    ///
    /// The new settings are persisted immediately (no batching) and returned
    /// so the host can recompute its frame and re-lay-out.
    pub fn handle_control(
        &mut self,
        control: OneHandedControl,
    ) -> Result<OneHandedSettings, SettingsError> {
        let next = match control {
            OneHandedControl::Toggle => self.settings.toggled(),
            OneHandedControl::MoveLeft => self.settings.with_position(KeyboardPosition::Left),
            OneHandedControl::MoveRight => self.settings.with_position(KeyboardPosition::Right),
            OneHandedControl::Grow => self.settings.grown(),
            OneHandedControl::Shrink => self.settings.shrunk(),
        };
        self.store.store(&next)?;
        debug!("one-handed control {control:?}: {next:?}");
        self.settings = next;
        Ok(next)
    }

    /// Computes the keyboard frame for the current settings.
    pub fn frame(&self, screen_w_px: i32, dip_to_px: f32) -> Frame {
        geometry::compute_frame(&self.settings, screen_w_px, dip_to_px)
    }

    /// Key table of the currently active layout.
    pub fn current_layout(&self) -> &Layout {
        self.registry.layout_for(self.state.layout)
    }

    /// Current interpreter state (layout identity plus shift flag).
    pub fn state(&self) -> InterpreterState {
        self.state
    }

    /// Currently loaded one-handed settings.
    pub fn settings(&self) -> OneHandedSettings {
        self.settings
    }
}
