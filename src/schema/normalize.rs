//! Field classification and registry construction.
//!
//! One raw body line becomes at most one field: inline comments are stripped,
//! a leading `struct` qualifier dropped, and anything that is not exactly
//! `<Type> <name>;` after that is skipped. Tag lines, macro invocations, and
//! multi-word declarations (`unsigned int`) all fall out this way.

use tracing::trace;

use super::header::{RawStructBlock, strip_block_comments};
use super::ir::{Entity, Field, FieldKind, Registry};

/// Discriminator field type, implicit in the schema's own tag mechanism.
const NODE_TAG: &str = "NodeTag";

/// Command-type enum, serialized as its string name.
const CMD_TYPE: &str = "CmdType";

/// Top-level query wrapper type, not itself a schema member.
const QUERY_WRAPPER: &str = "Query";

/// Map a declared C type to its target kind; `None` means unclassified.
fn classify(declared: &str) -> Option<FieldKind> {
    match declared {
        "Node" => Some(FieldKind::Node),
        "List" => Some(FieldKind::NodeList),
        "bool" => Some(FieldKind::Boolean),
        "char" => Some(FieldKind::String),
        "Oid" => Some(FieldKind::Number),
        CMD_TYPE => Some(FieldKind::String),
        t if t.starts_with("int") || t == "long" => Some(FieldKind::Number),
        _ => None,
    }
}

/// Normalize one struct body into a field list, preserving source order.
///
/// `struct_name` is only used for trace context.
pub fn normalize_fields(struct_name: &str, body: &[String]) -> Vec<Field> {
    let mut fields = Vec::new();
    for line in body {
        let line = strip_block_comments(line);
        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.first() == Some(&"struct") {
            // Qualifier for an embedded-by-value record field.
            tokens.remove(0);
        }
        if tokens.len() != 2 {
            continue;
        }
        let (declared, raw_name) = (tokens[0], tokens[1]);
        if declared == NODE_TAG {
            continue;
        }
        let name: String = raw_name.chars().filter(|c| *c != '*').collect();
        let name = name.trim_end_matches(';').to_string();
        let kind =
            classify(declared).unwrap_or_else(|| FieldKind::Unresolved(declared.to_string()));
        trace!(entity = struct_name, field = %name, ?kind, "normalized field");
        fields.push(Field { name, kind });
    }
    fields
}

/// Build the node registry from the primary header's blocks.
///
/// The `Query` wrapper is excluded regardless of presence. Entities with no
/// surviving fields are kept: their record shape is legitimately empty.
pub fn build_node_registry(blocks: &[RawStructBlock]) -> Registry {
    let mut registry = Registry::new();
    for block in blocks {
        if block.name == QUERY_WRAPPER {
            continue;
        }
        registry.insert(Entity {
            name: block.name.clone(),
            fields: normalize_fields(&block.name, &block.body),
        });
    }
    registry
}

/// Build the primitive registry from the secondary header's blocks.
///
/// Entities whose bodies yield no fields are dropped: all-comment or
/// macro-only bodies can never contribute a record shape.
pub fn build_primitive_registry(blocks: &[RawStructBlock]) -> Registry {
    let mut registry = Registry::new();
    for block in blocks {
        let fields = normalize_fields(&block.name, &block.body);
        if fields.is_empty() {
            continue;
        }
        registry.insert(Entity {
            name: block.name.clone(),
            fields,
        });
    }
    registry
}
