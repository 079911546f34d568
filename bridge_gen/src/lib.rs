//! Accessor/thunk generator for repeated scalar message fields.
//!
//! Given resolved field descriptors, this crate emits two mutually
//! consistent artifacts per schema: a Rust accessor surface for the
//! generated message wrappers, and the C++ forwarding thunks those
//! accessors call across the FFI boundary.

pub mod cmds;
pub mod codegen;
