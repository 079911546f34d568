pub mod repeated_scalar;

pub use repeated_scalar::emit_thunks;
