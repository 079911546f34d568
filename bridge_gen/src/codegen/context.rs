/* Per-field emission context
 *
 * Binds one field descriptor to the derived values both emitters consume,
 * so the Rust accessor block and the C++ thunk block are produced from the
 * same symbols and the same signatures. Built fresh per field, discarded
 * after emission.
 */

use super::GenError;
use super::naming::{escape_rust_keyword, scalar_cpp_type, scalar_rust_type, thunk_symbol};
use super::ops::{ThunkOperation, operations_for};
use bridge_schema::{Cardinality, FieldDescriptor, FieldType, ScalarKind};
use indexmap::IndexMap;

#[derive(Debug)]
pub struct EmissionContext {
    pub field: FieldDescriptor,
    pub scalar: ScalarKind,
    symbols: IndexMap<ThunkOperation, String>,
}

impl EmissionContext {
    /// Fails with the classification error when the descriptor is not a
    /// repeated scalar; emission for such a field is all-or-nothing, so
    /// nothing is derived before the check passes.
    pub fn new(field: &FieldDescriptor) -> Result<Self, GenError> {
        if field.cardinality != Cardinality::Repeated {
            return Err(GenError::NotRepeated {
                message: field.declaring_message.full_name(),
                field: field.name.clone(),
            });
        }
        let scalar = match &field.field_type {
            FieldType::Scalar(kind) => *kind,
            _ => {
                return Err(GenError::NotScalar {
                    message: field.declaring_message.full_name(),
                    field: field.name.clone(),
                });
            }
        };

        let symbols = operations_for(field.presence)
            .iter()
            .map(|op| (*op, thunk_symbol(&field.declaring_message, &field.name, *op)))
            .collect();

        Ok(Self {
            field: field.clone(),
            scalar,
            symbols,
        })
    }

    /// Symbols in emission order, one per operation in the field's
    /// operation set.
    pub fn operations(&self) -> impl Iterator<Item = (ThunkOperation, &str)> {
        self.symbols.iter().map(|(op, sym)| (*op, sym.as_str()))
    }

    /// Symbol for one operation. Callers only ask for operations in the
    /// field's operation set.
    pub fn symbol(&self, op: ThunkOperation) -> &str {
        &self.symbols[&op]
    }

    /// Host accessor method base name, keyword-escaped where the raw field
    /// name collides with a Rust keyword.
    pub fn accessor_name(&self) -> String {
        escape_rust_keyword(&self.field.name)
    }

    pub fn rust_scalar(&self) -> &'static str {
        scalar_rust_type(self.scalar)
    }

    pub fn cpp_scalar(&self) -> &'static str {
        scalar_cpp_type(self.scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_schema::{MessageType, Presence};

    fn descriptor(presence: Presence) -> FieldDescriptor {
        FieldDescriptor {
            name: "count".into(),
            field_type: FieldType::Scalar(ScalarKind::I32),
            cardinality: Cardinality::Repeated,
            presence,
            declaring_message: MessageType::new("telemetry.v1", "Stats"),
        }
    }

    #[test]
    fn context_derives_one_symbol_per_operation() {
        let ctx = EmissionContext::new(&descriptor(Presence::Implicit)).unwrap();
        let ops: Vec<ThunkOperation> = ctx.operations().map(|(op, _)| op).collect();
        assert_eq!(
            ops,
            vec![
                ThunkOperation::Get,
                ThunkOperation::Set,
                ThunkOperation::Len,
                ThunkOperation::Clear,
            ]
        );
        assert_eq!(
            ctx.symbol(ThunkOperation::Get),
            "__bridge_thunk_telemetry_v1_Stats_count_get"
        );
    }

    #[test]
    fn context_rejects_singular_cardinality() {
        let mut field = descriptor(Presence::Implicit);
        field.cardinality = Cardinality::Singular;
        let err = EmissionContext::new(&field).unwrap_err();
        assert_eq!(
            err,
            GenError::NotRepeated {
                message: "telemetry.v1.Stats".into(),
                field: "count".into(),
            }
        );
    }

    #[test]
    fn context_rejects_non_scalar_element() {
        let mut field = descriptor(Presence::Explicit);
        field.field_type = FieldType::Message("Other".into());
        let err = EmissionContext::new(&field).unwrap_err();
        assert_eq!(
            err,
            GenError::NotScalar {
                message: "telemetry.v1.Stats".into(),
                field: "count".into(),
            }
        );
    }

    #[test]
    fn keyword_field_escapes_method_name_only() {
        let mut field = descriptor(Presence::Implicit);
        field.name = "type".into();
        let ctx = EmissionContext::new(&field).unwrap();
        assert_eq!(ctx.accessor_name(), "r#type");
        assert_eq!(
            ctx.symbol(ThunkOperation::Get),
            "__bridge_thunk_telemetry_v1_Stats_type_get"
        );
    }
}
