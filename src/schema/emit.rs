//! Artifact emission via the `Emit` trait.
//!
//! Both artifacts iterate the same banded entity sequence, so the interface
//! text and the tag-name list can never disagree on order. Every field is
//! emitted optional: not every record shape populates every conceptually
//! available field at a given tag.

use super::ir::{ClosedSchema, Entity, Field, FieldKind, NODE_TYPE, SCHEMA_TYPE};

/// Trait for emitting TypeScript text from schema IR nodes.
pub trait Emit {
    /// Convert the IR node to its TypeScript string representation.
    fn emit(&self) -> String;
}

impl Emit for FieldKind {
    fn emit(&self) -> String {
        match self {
            FieldKind::Node => NODE_TYPE.to_string(),
            FieldKind::NodeList => format!("{NODE_TYPE}[]"),
            FieldKind::Boolean => "boolean".to_string(),
            FieldKind::Number => "number".to_string(),
            FieldKind::String => "string".to_string(),
            FieldKind::Reference(name) => format!("{SCHEMA_TYPE}['{name}']"),
            // Only reachable when emitting pre-resolution state.
            FieldKind::Unresolved(raw) => raw.clone(),
            FieldKind::Any => "any".to_string(),
        }
    }
}

impl Emit for Field {
    fn emit(&self) -> String {
        format!("\t\t{}?: {};\n", self.name, self.kind.emit())
    }
}

impl Emit for Entity {
    fn emit(&self) -> String {
        let mut output = format!("\t{}: {{\n", self.name);
        for field in &self.fields {
            output.push_str(&field.emit());
        }
        output.push_str("\t}\n");
        output
    }
}

impl ClosedSchema {
    /// The closed interface text (artifact 1).
    pub fn type_definitions(&self) -> String {
        let mut output = format!("interface {SCHEMA_TYPE} {{\n");
        for entity in self.banded_entities() {
            output.push_str(&entity.emit());
        }
        output.push('}');
        output
    }

    /// The ordered tag-name list (artifact 2), the literal tag set of the
    /// discriminated union described by artifact 1.
    pub fn tag_literals(&self) -> String {
        let names: Vec<String> = self
            .banded_entities()
            .map(|entity| format!("'{}'", entity.name))
            .collect();
        format!("[\n{}\n]", names.join(",\n"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::schema::Registry;

    #[test]
    fn test_emit_field_kinds() {
        assert_eq!(FieldKind::Node.emit(), "AstNode");
        assert_eq!(FieldKind::NodeList.emit(), "AstNode[]");
        assert_eq!(FieldKind::Boolean.emit(), "boolean");
        assert_eq!(FieldKind::Number.emit(), "number");
        assert_eq!(FieldKind::String.emit(), "string");
        assert_eq!(
            FieldKind::Reference("Alias".to_string()).emit(),
            "AllAstNodes['Alias']"
        );
        assert_eq!(FieldKind::Any.emit(), "any");
    }

    #[test]
    fn test_emit_field_is_optional() {
        let field = Field {
            name: "location".to_string(),
            kind: FieldKind::Number,
        };
        assert_eq!(field.emit(), "\t\tlocation?: number;\n");
    }

    #[test]
    fn test_emit_entity() {
        let entity = Entity {
            name: "ColumnRef".to_string(),
            fields: vec![
                Field {
                    name: "fields".to_string(),
                    kind: FieldKind::NodeList,
                },
                Field {
                    name: "location".to_string(),
                    kind: FieldKind::Number,
                },
            ],
        };
        assert_eq!(
            entity.emit(),
            "\tColumnRef: {\n\t\tfields?: AstNode[];\n\t\tlocation?: number;\n\t}\n"
        );
    }

    #[test]
    fn test_emit_empty_entity() {
        let entity = Entity {
            name: "Empty".to_string(),
            fields: Vec::new(),
        };
        assert_eq!(entity.emit(), "\tEmpty: {\n\t}\n");
    }

    #[test]
    fn test_artifacts_agree_on_order() {
        let mut nodes = Registry::new();
        nodes.insert(Entity {
            name: "ColumnRef".to_string(),
            fields: Vec::new(),
        });
        nodes.insert(Entity {
            name: "SelectStmt".to_string(),
            fields: Vec::new(),
        });
        let schema = ClosedSchema {
            nodes,
            pulled: Registry::new(),
            unresolved: Vec::new(),
        };

        assert_eq!(
            schema.type_definitions(),
            "interface AllAstNodes {\n\tSelectStmt: {\n\t}\n\tColumnRef: {\n\t}\n}"
        );
        assert_eq!(schema.tag_literals(), "[\n'SelectStmt',\n'ColumnRef'\n]");
    }
}
