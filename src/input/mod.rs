//! Key-event interpretation and keyboard-mode state machine.
//!
//! This module translates raw primary codes from the key surface into output
//! actions for the host. It tracks the active layout and the shift/caps state
//! and owns the transition rules between them.

pub mod interpreter;
pub mod shift;

#[cfg(test)]
mod tests;

// Re-export commonly used types at module level
pub use interpreter::{Action, InterpreterState, interpret};
pub use shift::ShiftState;
