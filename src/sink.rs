//! Text sink contract and action dispatch.
//!
//! A [`TextSink`] stands in for the host's focused editable field. The
//! interpreter never talks to a sink directly; it produces [`Action`] values
//! and [`dispatch`] translates each variant into the corresponding sink
//! calls. When no field is focused the host simply skips dispatch — a
//! documented no-op, never an error.

use crate::input::Action;
use crate::keycodes::SystemKey;

/// Host interface for the currently focused editable field.
pub trait TextSink {
    /// Inserts text at the cursor.
    fn commit_text(&mut self, text: &str);

    /// Deletes `count` characters before the cursor.
    fn delete_backward(&mut self, count: u32);

    /// Raw key-down event.
    fn send_key_down(&mut self, key: SystemKey);

    /// Raw key-up event.
    fn send_key_up(&mut self, key: SystemKey);

    /// Synthesizes a full press as a down+up pair.
    fn send_key_down_up(&mut self, key: SystemKey) {
        self.send_key_down(key);
        self.send_key_up(key);
    }
}

/// Translates one action into sink calls.
///
/// `SendControlSequence` expands in strict order: CTRL-down, digit-down,
/// digit-up, CTRL-up, then Enter as a down+up pair. `SwitchLayout` and
/// `ToggleShift` are state-only and touch no sink.
pub fn dispatch(action: Action, sink: &mut dyn TextSink) {
    match action {
        Action::CommitText(c) => {
            let mut buf = [0u8; 4];
            sink.commit_text(c.encode_utf8(&mut buf));
        }
        Action::DeleteBackward(count) => sink.delete_backward(count),
        Action::SendKey(key) => sink.send_key_down_up(key),
        Action::SendControlSequence { ctrl, digit } => {
            sink.send_key_down(ctrl);
            sink.send_key_down_up(SystemKey::Digit(digit));
            sink.send_key_up(ctrl);
            sink.send_key_down_up(SystemKey::Enter);
        }
        Action::SwitchLayout(_) | Action::ToggleShift => {}
    }
}

/// One observable sink call, recorded by [`BufferSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Commit(String),
    Delete(u32),
    KeyDown(SystemKey),
    KeyUp(SystemKey),
}

/// In-memory sink that accumulates committed text and logs every call.
///
/// Used by the demo harness and the tests; doubles as a reference for what a
/// real host adapter must implement.
#[derive(Debug, Default)]
pub struct BufferSink {
    /// Committed text after deletions are applied
    pub text: String,
    /// Every sink call, in dispatch order
    pub events: Vec<SinkEvent>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextSink for BufferSink {
    fn commit_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.events.push(SinkEvent::Commit(text.to_string()));
    }

    fn delete_backward(&mut self, count: u32) {
        for _ in 0..count {
            self.text.pop();
        }
        self.events.push(SinkEvent::Delete(count));
    }

    fn send_key_down(&mut self, key: SystemKey) {
        self.events.push(SinkEvent::KeyDown(key));
    }

    fn send_key_up(&mut self, key: SystemKey) {
        self.events.push(SinkEvent::KeyUp(key));
    }
}
