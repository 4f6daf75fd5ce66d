//! Interactive terminal for the tool tracking session
//!
//! Reads command lines with rustyline, applies them to a
//! [`TerminalSession`] and prints whatever the transcript gained.

mod repl;

pub use repl::{ReplAction, TerminalRepl};
