//! Output formatting for the terminal

pub mod tool_list;
pub mod transcript;
