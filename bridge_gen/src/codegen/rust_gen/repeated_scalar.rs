/* Host accessor emission for repeated scalar fields
 *
 * Emits the Rust methods a generated message wrapper exposes for one
 * field, plus the `extern "C"` declarations those methods call. The
 * declarations are rendered from the same `ThunkSignature` values the C++
 * emitter uses, so the two artifacts cannot drift apart.
 */

use super::super::context::EmissionContext;
use super::super::naming::{RUNTIME, RUNTIME_INTERNAL};
use super::super::ops::{
    ThunkOperation, emits_host_hazzer, emits_host_setter, emits_mutable_view,
};
use super::super::signature::signature_for;
use std::fmt::Write;

/// Declaration lines for the field's thunks, for inclusion in the
/// artifact's `extern "C"` block.
pub fn emit_extern_decls(ctx: &EmissionContext) -> String {
    let mut out = String::new();
    for (op, symbol) in ctx.operations() {
        let sig = signature_for(ctx.scalar, op);
        writeln!(out, "    {}", sig.rust_extern_decl(symbol)).unwrap();
    }
    out
}

/// Accessor methods for one field, indented for inclusion in the wrapper
/// type's `impl` block.
pub fn emit_accessors(ctx: &EmissionContext) -> String {
    let mut out = String::new();
    emit_getter(ctx, &mut out);
    emit_len(ctx, &mut out);
    if emits_host_setter(ctx.field.presence) {
        emit_setter(ctx, &mut out);
    }
    if emits_host_hazzer(ctx.field.presence) {
        emit_hazzer(ctx, &mut out);
    }
    if emits_mutable_view(ctx.field.presence) {
        emit_mutable_view(ctx, &mut out);
    }
    out
}

/* Indexed getter: shared borrow, index, optional borrowed element view.
 * The index is bounds-checked against the len thunk here; the get thunk
 * itself performs no checking, so an unchecked call past the end would be
 * undefined behavior on the native side. */
fn emit_getter(ctx: &EmissionContext, out: &mut String) {
    write!(
        out,
        r#"    pub fn {name}(&self, index: usize) -> Option<{rt}::RepeatedPrimitive<'_, {scalar}>> {{
        if index >= unsafe {{ {len_thunk}(self.inner.msg) }} {{
            return None;
        }}
        Some(unsafe {{
            {rt}::RepeatedPrimitive::from_raw(
                {rti}::Private,
                {get_thunk}(self.inner.msg, index),
            )
        }})
    }}

"#,
        name = ctx.accessor_name(),
        scalar = ctx.rust_scalar(),
        rt = RUNTIME,
        rti = RUNTIME_INTERNAL,
        len_thunk = ctx.symbol(ThunkOperation::Len),
        get_thunk = ctx.symbol(ThunkOperation::Get),
    )
    .unwrap();
}

fn emit_len(ctx: &EmissionContext, out: &mut String) {
    write!(
        out,
        r#"    pub fn {raw_name}_len(&self) -> usize {{
        unsafe {{ {len_thunk}(self.inner.msg) }}
    }}

"#,
        raw_name = ctx.field.name,
        len_thunk = ctx.symbol(ThunkOperation::Len),
    )
    .unwrap();
}

/* Indexed setter: the exclusive receiver borrow is the precondition that
 * keeps readers from observing a half-written element. */
fn emit_setter(ctx: &EmissionContext, out: &mut String) {
    write!(
        out,
        r#"    pub fn {raw_name}_set(&mut self, index: usize, val: {scalar}) {{
        unsafe {{ {set_thunk}(self.inner.msg, index, val) }}
    }}

"#,
        raw_name = ctx.field.name,
        scalar = ctx.rust_scalar(),
        set_thunk = ctx.symbol(ThunkOperation::Set),
    )
    .unwrap();
}

fn emit_hazzer(ctx: &EmissionContext, out: &mut String) {
    write!(
        out,
        r#"    pub fn {raw_name}_has(&self) -> bool {{
        unsafe {{ {has_thunk}(self.inner.msg) }}
    }}

"#,
        raw_name = ctx.field.name,
        has_thunk = ctx.symbol(ThunkOperation::Has),
    )
    .unwrap();
}

/* Generic mutable view: one static two-entry dispatch table (get thunk,
 * set thunk) per field, one generic PrimitiveMut implementation for every
 * scalar kind. The alternative is generating a mutator type per scalar
 * kind per field, which this indirection exists to avoid. */
fn emit_mutable_view(ctx: &EmissionContext, out: &mut String) {
    write!(
        out,
        r#"    pub fn {raw_name}_mut(&mut self) -> {rt}::PrimitiveMut<'_, {scalar}> {{
        static VTABLE: {rti}::PrimitiveVTable<{scalar}> =
            {rti}::PrimitiveVTable::new(
                {rti}::Private,
                {get_thunk},
                {set_thunk},
            );

        {rt}::PrimitiveMut::from_inner(
            {rti}::Private,
            unsafe {{
                {rti}::RawVTableMutator::new(
                    {rti}::Private,
                    {rti}::MutatorMessageRef::new({rti}::Private, &mut self.inner),
                    &VTABLE,
                )
            }},
        )
    }}

"#,
        raw_name = ctx.field.name,
        scalar = ctx.rust_scalar(),
        rt = RUNTIME,
        rti = RUNTIME_INTERNAL,
        get_thunk = ctx.symbol(ThunkOperation::Get),
        set_thunk = ctx.symbol(ThunkOperation::Set),
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_schema::{
        Cardinality, FieldDescriptor, FieldType, MessageType, Presence, ScalarKind,
    };

    fn context(presence: Presence) -> EmissionContext {
        let field = FieldDescriptor {
            name: "count".into(),
            field_type: FieldType::Scalar(ScalarKind::I32),
            cardinality: Cardinality::Repeated,
            presence,
            declaring_message: MessageType::new("telemetry.v1", "Stats"),
        };
        EmissionContext::new(&field).unwrap()
    }

    #[test]
    fn implicit_presence_emits_getter_len_and_mutable_view() {
        let methods = emit_accessors(&context(Presence::Implicit));
        assert!(methods.contains("pub fn count(&self, index: usize)"));
        assert!(methods.contains("pub fn count_len(&self) -> usize"));
        assert!(methods.contains("pub fn count_mut(&mut self)"));
        assert!(!methods.contains("pub fn count_set"));
        assert!(!methods.contains("pub fn count_has"));
    }

    #[test]
    fn explicit_presence_emits_setter_and_hazzer_but_no_view() {
        let methods = emit_accessors(&context(Presence::Explicit));
        assert!(methods.contains("pub fn count_set(&mut self, index: usize, val: i32)"));
        assert!(methods.contains("pub fn count_has(&self) -> bool"));
        assert!(!methods.contains("pub fn count_mut"));
        assert!(!methods.contains("PrimitiveVTable"));
    }

    #[test]
    fn mutable_view_table_references_get_and_set_thunks() {
        let methods = emit_accessors(&context(Presence::Implicit));
        assert!(methods.contains("PrimitiveVTable::new"));
        assert!(methods.contains("__bridge_thunk_telemetry_v1_Stats_count_get,"));
        assert!(methods.contains("__bridge_thunk_telemetry_v1_Stats_count_set,"));
    }

    #[test]
    fn extern_decls_cover_the_operation_set() {
        let ctx = context(Presence::Explicit);
        let decls = emit_extern_decls(&ctx);
        for (_, symbol) in ctx.operations() {
            assert!(decls.contains(symbol), "missing declaration for {}", symbol);
        }
        assert!(decls.contains(
            "pub fn __bridge_thunk_telemetry_v1_Stats_count_has(msg: ::bridge_rt::__internal::RawMessage) -> bool;"
        ));
    }

    #[test]
    fn keyword_field_name_is_escaped_in_method_position() {
        let field = FieldDescriptor {
            name: "type".into(),
            field_type: FieldType::Scalar(ScalarKind::U32),
            cardinality: Cardinality::Repeated,
            presence: Presence::Implicit,
            declaring_message: MessageType::new("", "M"),
        };
        let ctx = EmissionContext::new(&field).unwrap();
        let methods = emit_accessors(&ctx);
        assert!(methods.contains("pub fn r#type(&self, index: usize)"));
        /* suffixed methods cannot collide with keywords, so no escaping */
        assert!(methods.contains("pub fn type_len(&self)"));
        /* symbols embed the raw name */
        assert!(methods.contains("__bridge_thunk_M_type_get"));
    }
}
