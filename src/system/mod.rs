//! System abstraction for filesystem access
//!
//! Request files are read through the [`System`] trait so that configuration
//! loading can be tested against an in-memory filesystem.

use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Trait for the operating system interactions txquery needs
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if a path points to a file
    fn is_file(&self, path: &Path) -> bool;
}
