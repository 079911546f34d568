pub mod context;
pub mod cpp_gen;
pub mod naming;
pub mod ops;
pub mod rust_gen;
pub mod signature;

use bridge_schema::{FieldDescriptor, MessageType, SchemaFile};
use context::EmissionContext;
use std::fmt::Write;
use thiserror::Error;

/// The one error class this subsystem produces itself: a descriptor that
/// contradicts its repeated-scalar classification. Continuing past either
/// variant would emit artifacts that do not link, so emission for the
/// offending field aborts instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("field '{field}' of '{message}' is not repeated; repeated-scalar emission requested for the wrong cardinality")]
    NotRepeated { message: String, field: String },
    #[error("field '{field}' of '{message}' has a non-scalar element type; repeated-scalar emission cannot represent it")]
    NotScalar { message: String, field: String },
}

/// Both emitted blocks for one field. Produced together or not at all.
#[derive(Debug)]
pub struct FieldArtifacts {
    pub extern_decls: String,
    pub accessors: String,
    pub thunks: String,
}

/// Emit the accessor block and thunk block for one repeated scalar field.
/// Both blocks are derived from one emission context, which is what
/// guarantees they reference identical symbols and signatures.
pub fn generate_field(field: &FieldDescriptor) -> Result<FieldArtifacts, GenError> {
    let ctx = EmissionContext::new(field)?;
    Ok(FieldArtifacts {
        extern_decls: rust_gen::emit_extern_decls(&ctx),
        accessors: rust_gen::emit_accessors(&ctx),
        thunks: cpp_gen::emit_thunks(&ctx),
    })
}

/// The two output files for a set of schemas: artifact A (Rust accessor
/// surface) and artifact B (C++ thunk definitions).
pub struct Artifacts {
    pub accessors_rs: String,
    pub thunks_cc: String,
}

const GENERATED_HEADER: &str = "Generated by bridge-gen. Do not edit.";

/// Walk every message of every schema and emit both artifacts for its
/// repeated scalar fields. Fields of other kinds or cardinalities belong
/// to other per-field-kind generators and are skipped here; the
/// classification error fires only when this generator is invoked on a
/// contradictory descriptor directly.
pub fn generate_schemas(schemas: &[SchemaFile]) -> Result<Artifacts, GenError> {
    let mut externs = String::new();
    let mut impls = String::new();
    let mut thunks = String::new();

    for schema in schemas {
        for message in &schema.messages {
            let message_type = MessageType::new(&schema.package, &message.name);
            let mut methods = String::new();

            for field_def in &message.fields {
                let field = FieldDescriptor::from_def(&message_type, field_def);
                if !field.is_repeated_scalar() {
                    continue;
                }
                let generated = generate_field(&field)?;
                externs.push_str(&generated.extern_decls);
                methods.push_str(&generated.accessors);
                thunks.push_str(&generated.thunks);
            }

            if methods.is_empty() {
                continue;
            }
            writeln!(impls, "impl {} {{", message.name).unwrap();
            /* trim the trailing blank line the last method leaves behind */
            impls.push_str(methods.trim_end_matches('\n'));
            impls.push_str("\n}\n\n");
        }
    }

    let mut accessors_rs = String::new();
    writeln!(accessors_rs, "/* {} */\n", GENERATED_HEADER).unwrap();
    if !externs.is_empty() {
        accessors_rs.push_str("extern \"C\" {\n");
        accessors_rs.push_str(&externs);
        accessors_rs.push_str("}\n\n");
    }
    accessors_rs.push_str(impls.trim_end_matches('\n'));
    accessors_rs.push('\n');

    let mut thunks_cc = String::new();
    writeln!(thunks_cc, "// {}\n", GENERATED_HEADER).unwrap();
    thunks_cc.push_str("#include <cstddef>\n#include <cstdint>\n\n");
    thunks_cc.push_str("extern \"C\" {\n\n");
    thunks_cc.push_str(&thunks);
    thunks_cc.push_str("}  // extern \"C\"\n");

    Ok(Artifacts {
        accessors_rs,
        thunks_cc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_schema::{Cardinality, FieldDef, FieldType, MessageDef, Presence, ScalarKind};

    fn schema() -> SchemaFile {
        SchemaFile {
            package: "telemetry.v1".into(),
            messages: vec![MessageDef {
                name: "Stats".into(),
                fields: vec![
                    FieldDef {
                        name: "count".into(),
                        field_type: FieldType::Scalar(ScalarKind::I32),
                        cardinality: Cardinality::Repeated,
                        presence: Presence::Implicit,
                    },
                    FieldDef {
                        name: "label".into(),
                        field_type: FieldType::Str,
                        cardinality: Cardinality::Singular,
                        presence: Presence::Implicit,
                    },
                ],
            }],
        }
    }

    #[test]
    fn non_repeated_scalar_fields_are_skipped_by_the_walk() {
        let artifacts = generate_schemas(&[schema()]).unwrap();
        assert!(artifacts.accessors_rs.contains("pub fn count"));
        assert!(!artifacts.accessors_rs.contains("label"));
        assert!(!artifacts.thunks_cc.contains("label"));
    }

    #[test]
    fn every_extern_symbol_has_a_thunk_definition() {
        let artifacts = generate_schemas(&[schema()]).unwrap();
        for line in artifacts.accessors_rs.lines() {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("pub fn __bridge_thunk_") {
                let symbol = format!(
                    "__bridge_thunk_{}",
                    rest.split('(').next().unwrap()
                );
                assert!(
                    artifacts.thunks_cc.contains(&format!("{}(", symbol)),
                    "extern declaration without thunk definition: {}",
                    symbol
                );
            }
        }
    }

    #[test]
    fn generation_is_idempotent() {
        let schemas = [schema()];
        let first = generate_schemas(&schemas).unwrap();
        let second = generate_schemas(&schemas).unwrap();
        assert_eq!(first.accessors_rs, second.accessors_rs);
        assert_eq!(first.thunks_cc, second.thunks_cc);
    }

    #[test]
    fn direct_invocation_on_contradictory_descriptor_fails() {
        let message_type = MessageType::new("telemetry.v1", "Stats");
        let field = FieldDescriptor {
            name: "label".into(),
            field_type: FieldType::Str,
            cardinality: Cardinality::Repeated,
            presence: Presence::Implicit,
            declaring_message: message_type,
        };
        let err = generate_field(&field).unwrap_err();
        assert_eq!(
            err,
            GenError::NotScalar {
                message: "telemetry.v1.Stats".into(),
                field: "label".into(),
            }
        );
    }
}
