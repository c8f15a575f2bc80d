// src/ports/mod.rs
pub mod command;
pub mod text;

pub use command::{Command, ParseError};
pub use text::{render_board_json, TextPresenter};
