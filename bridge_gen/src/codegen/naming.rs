/* Symbol and type naming for generated accessors and thunks */

use super::ops::ThunkOperation;
use bridge_schema::{MessageType, ScalarKind};

/// Prefix shared by every generated thunk symbol. Keeps the generated
/// symbols out of any namespace user code could plausibly occupy.
pub const THUNK_PREFIX: &str = "__bridge_thunk_";

/// Crate path of the runtime support crate referenced by generated Rust
/// code. The runtime is an external collaborator; generated code only
/// names it.
pub const RUNTIME: &str = "::bridge_rt";

/// Path of the runtime's internal (generated-code-only) module.
pub const RUNTIME_INTERNAL: &str = "::bridge_rt::__internal";

/// Native-linkage symbol for one (field, operation) pair.
///
/// Pure function of its inputs: composes the declaring message's package
/// parts, the message name, the field name, and the operation tag, joined
/// by `_`. Literal underscores inside a part are escaped as `_1`, so the
/// separator cannot be forged by underscore-bearing names and the
/// composition stays injective: `a.B` field `c` gives `..a_B_c_get`, while
/// message `a` field `B_c` gives `..a_B_1c_get`. Name parts are
/// identifiers and never start with a digit, which keeps `_1` unambiguous.
/// The field name is never keyword-escaped here; symbols are not subject
/// to either target language's identifier restrictions.
pub fn thunk_symbol(message: &MessageType, field_name: &str, op: ThunkOperation) -> String {
    let mut out = String::from(THUNK_PREFIX);
    for part in message.package.split('.').filter(|p| !p.is_empty()) {
        out.push_str(&mangle_part(part));
        out.push('_');
    }
    out.push_str(&mangle_part(&message.name));
    out.push('_');
    out.push_str(&mangle_part(field_name));
    out.push('_');
    out.push_str(op.tag());
    out
}

fn mangle_part(part: &str) -> String {
    part.replace('_', "_1")
}

/// Escape Rust keywords to valid identifiers. Applied to host accessor
/// method names only, never to symbols.
pub fn escape_rust_keyword(name: &str) -> String {
    /* these four have no r# raw form; use a trailing underscore instead */
    const NO_RAW_FORM: &[&str] = &["self", "Self", "super", "crate"];

    const RUST_KEYWORDS: &[&str] = &[
        "as", "break", "const", "continue", "crate", "else", "enum", "extern",
        "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct",
        "super", "trait", "true", "type", "unsafe", "use", "where", "while",
        "async", "await", "dyn", "abstract", "become", "box", "do", "final",
        "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ];

    if NO_RAW_FORM.contains(&name) {
        format!("{}_", name)
    } else if RUST_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/* Fixed scalar element type mappings. One entry per ScalarKind per target;
 * the two tables must stay in lockstep with each other and with the native
 * message API's parameter types. */

pub fn scalar_rust_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::I32 => "i32",
        ScalarKind::I64 => "i64",
        ScalarKind::U32 => "u32",
        ScalarKind::U64 => "u64",
        ScalarKind::F32 => "f32",
        ScalarKind::F64 => "f64",
        ScalarKind::Bool => "bool",
    }
}

pub fn scalar_cpp_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::I32 => "int32_t",
        ScalarKind::I64 => "int64_t",
        ScalarKind::U32 => "uint32_t",
        ScalarKind::U64 => "uint64_t",
        ScalarKind::F32 => "float",
        ScalarKind::F64 => "double",
        ScalarKind::Bool => "bool",
    }
}
