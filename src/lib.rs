//! Library exports for embedding the softboard engine.
//!
//! Exposes the key-event interpreter, layout registry, one-handed geometry,
//! and settings store so that host shells (IME front-ends, test harnesses)
//! can drive the keyboard core without the bundled CLI.

pub mod geometry;
pub mod input;
pub mod keycodes;
pub mod layout;
pub mod session;
pub mod settings;
pub mod sink;

pub use input::{Action, InterpreterState, interpret};
pub use layout::{LayoutId, LayoutRegistry};
pub use session::Session;
pub use settings::OneHandedSettings;
pub use sink::TextSink;
