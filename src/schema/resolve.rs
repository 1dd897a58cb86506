//! Reference resolution across the node and primitive registries.
//!
//! A single forward pass resolves node-entity fields; an explicit worklist
//! then computes the transitive closure of pulled primitive entities. Each
//! primitive is enqueued at most once, so the closure is bounded by the size
//! of the primitive registry.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use super::ir::{ClosedSchema, Entity, Field, FieldKind, Registry};

/// Names of the terminal literal-value nodes, which have no header struct.
const VALUE_NODES: [&str; 5] = ["String", "Integer", "Float", "Null", "BitString"];

/// The fixed shape shared by every literal-value node.
fn value_node(name: &str) -> Entity {
    Entity {
        name: name.to_string(),
        fields: vec![
            Field {
                name: "ival".to_string(),
                kind: FieldKind::Number,
            },
            Field {
                name: "str".to_string(),
                kind: FieldKind::String,
            },
        ],
    }
}

/// Resolve every field across both registries into the closed schema.
///
/// Fatal errors: an entity name present in both registries, or a primitive
/// entity referencing a node entity. A declared type that names neither
/// registry is not fatal: the field falls to the escape hatch and the name
/// is recorded for the diagnostics channel.
pub fn resolve(mut nodes: Registry, prims: &Registry) -> Result<ClosedSchema, String> {
    for name in VALUE_NODES {
        nodes.insert(value_node(name));
    }

    // Registry disjointness is a precondition of everything below; picking
    // one side silently would corrupt the emitted references.
    let collisions: Vec<&str> = nodes.names().filter(|name| prims.contains(name)).collect();
    if !collisions.is_empty() {
        return Err(format!(
            "Entity name(s) present in both registries: {}",
            collisions.join(", ")
        ));
    }

    let node_names: HashSet<String> = nodes.names().map(str::to_string).collect();
    let mut unresolved = Vec::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut pulled_names: HashSet<String> = HashSet::new();

    for entity in nodes.iter_mut() {
        for field in &mut entity.fields {
            let FieldKind::Unresolved(declared) = &field.kind else {
                continue;
            };
            let declared = declared.clone();
            if node_names.contains(&declared) {
                field.kind = FieldKind::Reference(declared);
            } else if prims.contains(&declared) {
                if pulled_names.insert(declared.clone()) {
                    queue.push_back(declared.clone());
                }
                field.kind = FieldKind::Reference(declared);
            } else {
                debug!(declared_type = %declared, "declared type names no entity, escaping to any");
                unresolved.push(declared);
                field.kind = FieldKind::Any;
            }
        }
    }

    let mut pulled = Registry::new();
    while let Some(name) = queue.pop_front() {
        let Some(entity) = prims.get(&name) else {
            // Unreachable: only names that passed `prims.contains` are queued.
            continue;
        };
        let mut entity = entity.clone();
        for field in &mut entity.fields {
            let FieldKind::Unresolved(declared) = &field.kind else {
                continue;
            };
            let declared = declared.clone();
            if node_names.contains(&declared) {
                return Err(format!(
                    "Primitive entity `{name}` references node entity `{declared}`"
                ));
            }
            if prims.contains(&declared) {
                if pulled_names.insert(declared.clone()) {
                    queue.push_back(declared.clone());
                }
                field.kind = FieldKind::Reference(declared);
            } else {
                debug!(declared_type = %declared, "declared type names no entity, escaping to any");
                unresolved.push(declared);
                field.kind = FieldKind::Any;
            }
        }
        pulled.insert(entity);
    }

    Ok(ClosedSchema {
        nodes,
        pulled,
        unresolved,
    })
}
