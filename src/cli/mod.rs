//! Command-line interface module
//!
//! Handles argument parsing and merging with request files

pub mod args;

pub use args::*;
