//! Message Schema Definitions
//!
//! This crate contains the core schema definitions consumed by the accessor
//! and thunk generators. It provides pure data structures for representing
//! message types and their fields without any file I/O or code generation
//! logic.

pub mod types;

// Re-export commonly used types at the crate root
pub use types::*;
