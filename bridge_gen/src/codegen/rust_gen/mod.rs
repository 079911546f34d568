pub mod repeated_scalar;

pub use repeated_scalar::{emit_accessors, emit_extern_decls};
