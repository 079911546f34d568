/* Thunk signature construction and rendering
 *
 * Each emitted thunk has exactly one signature, built here and rendered
 * twice: once as a Rust `extern "C"` declaration (artifact A) and once as
 * a C++ definition header (artifact B). Deriving both spellings from one
 * `ThunkSignature` value is what keeps the two artifacts in agreement.
 */

use super::naming::{RUNTIME_INTERNAL, scalar_cpp_type, scalar_rust_type};
use super::ops::ThunkOperation;
use bridge_schema::{MessageType, ScalarKind};
use std::fmt::Write;

/// ABI-level type of one thunk parameter or return slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiType {
    /// Pointer to the declaring message's native representation. Typed to
    /// the exact message class on the C++ side; the thunk body calls the
    /// message's own typed method with no runtime check.
    MessagePtr,
    /// Element index / element count.
    Size,
    Bool,
    Scalar(ScalarKind),
    Unit,
}

impl AbiType {
    fn rust_spelling(self) -> String {
        match self {
            AbiType::MessagePtr => format!("{}::RawMessage", RUNTIME_INTERNAL),
            AbiType::Size => "usize".to_string(),
            AbiType::Bool => "bool".to_string(),
            AbiType::Scalar(kind) => scalar_rust_type(kind).to_string(),
            AbiType::Unit => "()".to_string(),
        }
    }

    fn cpp_spelling(self, message: &MessageType) -> String {
        match self {
            AbiType::MessagePtr => format!("{}*", message.cpp_qualified_name()),
            AbiType::Size => "size_t".to_string(),
            AbiType::Bool => "bool".to_string(),
            AbiType::Scalar(kind) => scalar_cpp_type(kind).to_string(),
            AbiType::Unit => "void".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThunkParam {
    pub name: &'static str,
    pub ty: AbiType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThunkSignature {
    pub params: Vec<ThunkParam>,
    pub ret: AbiType,
}

/// Signature for one operation on a repeated scalar field of element type
/// `scalar`. Which operations actually get emitted is decided elsewhere
/// (`ops::operations_for`); every operation has a well-defined signature.
pub fn signature_for(scalar: ScalarKind, op: ThunkOperation) -> ThunkSignature {
    let msg = ThunkParam {
        name: "msg",
        ty: AbiType::MessagePtr,
    };
    let index = ThunkParam {
        name: "index",
        ty: AbiType::Size,
    };
    match op {
        ThunkOperation::Get => ThunkSignature {
            params: vec![msg, index],
            ret: AbiType::Scalar(scalar),
        },
        ThunkOperation::Set => ThunkSignature {
            params: vec![
                msg,
                index,
                ThunkParam {
                    name: "val",
                    ty: AbiType::Scalar(scalar),
                },
            ],
            ret: AbiType::Unit,
        },
        ThunkOperation::Len => ThunkSignature {
            params: vec![msg],
            ret: AbiType::Size,
        },
        ThunkOperation::Has => ThunkSignature {
            params: vec![msg],
            ret: AbiType::Bool,
        },
        ThunkOperation::Clear => ThunkSignature {
            params: vec![msg],
            ret: AbiType::Unit,
        },
    }
}

impl ThunkSignature {
    /// Render as a Rust declaration item for an `extern "C"` block.
    pub fn rust_extern_decl(&self, symbol: &str) -> String {
        let mut out = String::new();
        write!(out, "pub fn {}(", symbol).unwrap();
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write!(out, "{}: {}", param.name, param.ty.rust_spelling()).unwrap();
        }
        out.push(')');
        if self.ret != AbiType::Unit {
            write!(out, " -> {}", self.ret.rust_spelling()).unwrap();
        }
        out.push(';');
        out
    }

    /// Render as the header of a C++ function definition, e.g.
    /// `int32_t sym(::pkg::Stats* msg, size_t index)`.
    pub fn cpp_header(&self, symbol: &str, message: &MessageType) -> String {
        let mut out = String::new();
        write!(out, "{} {}(", self.ret.cpp_spelling(message), symbol).unwrap();
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write!(out, "{} {}", param.ty.cpp_spelling(message), param.name).unwrap();
        }
        out.push(')');
        out
    }
}
