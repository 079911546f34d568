use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarKind {
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    Bool,
}

impl ScalarKind {
    pub const ALL: &'static [ScalarKind] = &[
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::F32,
        ScalarKind::F64,
        ScalarKind::Bool,
    ];
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct MapEntry {
    pub key: String,
    pub value: String,
}

/// Element type of a field. Only `Scalar` is handled by the repeated-scalar
/// generator; the remaining kinds exist so that a contradictory descriptor
/// is representable and can be rejected instead of silently mis-generated.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Scalar(ScalarKind),
    Str,
    Bytes,
    Message(String),
    Map(MapEntry),
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Presence {
    Explicit,
    Implicit,
}

impl Default for Presence {
    fn default() -> Self {
        Presence::Implicit
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    Singular,
    Repeated,
}

impl Default for Cardinality {
    fn default() -> Self {
        Cardinality::Singular
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type", with = "serde_yml::with::singleton_map_recursive")]
    pub field_type: FieldType,
    #[serde(default)]
    pub cardinality: Cardinality,
    #[serde(default)]
    pub presence: Presence,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct MessageDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct SchemaFile {
    #[serde(default)]
    pub package: String,
    pub messages: Vec<MessageDef>,
}

/// Identity of a message that declares fields. Owned by the schema front end
/// and immutable for the duration of generation; qualifies both the native
/// symbol names and the native function parameter types.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct MessageType {
    pub name: String,
    pub package: String,
}

impl MessageType {
    pub fn new(package: &str, name: &str) -> Self {
        Self {
            package: package.to_string(),
            name: name.to_string(),
        }
    }

    /// Fully-qualified dotted name, e.g. `telemetry.v1.Stats`.
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Qualified C++ class name, e.g. `::telemetry::v1::Stats`.
    pub fn cpp_qualified_name(&self) -> String {
        let mut out = String::new();
        if !self.package.is_empty() {
            for part in self.package.split('.') {
                out.push_str("::");
                out.push_str(part);
            }
        }
        out.push_str("::");
        out.push_str(&self.name);
        out
    }
}

/// One resolved field, as delivered by the driver: the unit of work for the
/// accessor and thunk emitters. One descriptor drives exactly one
/// (thunk-set, accessor-set) emission.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
    pub cardinality: Cardinality,
    pub presence: Presence,
    pub declaring_message: MessageType,
}

impl FieldDescriptor {
    pub fn from_def(declaring_message: &MessageType, def: &FieldDef) -> Self {
        Self {
            name: def.name.clone(),
            field_type: def.field_type.clone(),
            cardinality: def.cardinality,
            presence: def.presence,
            declaring_message: declaring_message.clone(),
        }
    }

    pub fn is_repeated_scalar(&self) -> bool {
        self.cardinality == Cardinality::Repeated
            && matches!(self.field_type, FieldType::Scalar(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_file_parses_from_yaml() {
        let yaml = r#"
package: telemetry.v1
messages:
  - name: Stats
    fields:
      - name: count
        type: { scalar: i32 }
        cardinality: repeated
      - name: label
        type: str
"#;
        let schema: SchemaFile = serde_yml::from_str(yaml).unwrap();
        assert_eq!(schema.package, "telemetry.v1");
        assert_eq!(schema.messages.len(), 1);
        let fields = &schema.messages[0].fields;
        assert_eq!(fields[0].field_type, FieldType::Scalar(ScalarKind::I32));
        assert_eq!(fields[0].cardinality, Cardinality::Repeated);
        /* presence defaults to implicit */
        assert_eq!(fields[0].presence, Presence::Implicit);
        assert_eq!(fields[1].field_type, FieldType::Str);
        assert_eq!(fields[1].cardinality, Cardinality::Singular);
    }

    #[test]
    fn message_type_qualified_names() {
        let msg = MessageType::new("telemetry.v1", "Stats");
        assert_eq!(msg.full_name(), "telemetry.v1.Stats");
        assert_eq!(msg.cpp_qualified_name(), "::telemetry::v1::Stats");

        let bare = MessageType::new("", "Stats");
        assert_eq!(bare.full_name(), "Stats");
        assert_eq!(bare.cpp_qualified_name(), "::Stats");
    }

    #[test]
    fn repeated_scalar_classification() {
        let msg = MessageType::new("", "Stats");
        let scalar = FieldDescriptor {
            name: "count".into(),
            field_type: FieldType::Scalar(ScalarKind::I32),
            cardinality: Cardinality::Repeated,
            presence: Presence::Implicit,
            declaring_message: msg.clone(),
        };
        assert!(scalar.is_repeated_scalar());

        let map = FieldDescriptor {
            field_type: FieldType::Map(MapEntry {
                key: "i32".into(),
                value: "str".into(),
            }),
            ..scalar.clone()
        };
        assert!(!map.is_repeated_scalar());

        let singular = FieldDescriptor {
            cardinality: Cardinality::Singular,
            ..scalar
        };
        assert!(!singular.is_repeated_scalar());
    }
}
