//! Operations module
//!
//! Encoding and decoding of `get_transactions` commands and their output formats

pub mod encode;
pub mod to_command_line;

pub use encode::{decode, encode, encode_form};
pub use to_command_line::{OutputFormat, generate_command_line};
