/* Native thunk emission for repeated scalar fields
 *
 * One C-linkage forwarding function per operation in the field's
 * operation set. Each body is a single call into the native message's
 * existing typed method; the thunk adds no state, no buffering, and no
 * bounds checking. Out-of-range indices keep whatever behavior the native
 * method already has.
 */

use super::super::context::EmissionContext;
use super::super::ops::ThunkOperation;
use super::super::signature::signature_for;
use std::fmt::Write;

/// Thunk definitions for one field, for inclusion in the artifact's
/// `extern "C"` block. Symbol and signature come from the same naming
/// scheme and signature builder the Rust emitter consults.
pub fn emit_thunks(ctx: &EmissionContext) -> String {
    let mut out = String::new();
    for (op, symbol) in ctx.operations() {
        let sig = signature_for(ctx.scalar, op);
        let header = sig.cpp_header(symbol, &ctx.field.declaring_message);
        writeln!(out, "{} {{", header).unwrap();
        writeln!(out, "  {}", forward_call(ctx, op)).unwrap();
        writeln!(out, "}}").unwrap();
        out.push('\n');
    }
    out
}

/* The one-line forward into the native message's own method. */
fn forward_call(ctx: &EmissionContext, op: ThunkOperation) -> String {
    let field = &ctx.field.name;
    match op {
        ThunkOperation::Get => format!("return msg->{}(index);", field),
        ThunkOperation::Set => format!("msg->set_{}(index, val);", field),
        ThunkOperation::Len => format!("return msg->{}_size();", field),
        ThunkOperation::Has => format!("return msg->has_{}();", field),
        ThunkOperation::Clear => format!("msg->clear_{}();", field),
    }
}
