//! Keypad-driven mode/tool dispatcher
//!
//! Keypad values are translated once into [`KeyCommand`]s; the dispatcher
//! is a small state machine over [`Mode`], whose payload is the selection
//! made within that mode.

pub mod command;
pub mod dispatcher;
pub mod tool;

pub use command::{KeyCommand, Selection};
pub use dispatcher::{Dispatch, Mode, ModeDispatcher};
pub use tool::Tool;
