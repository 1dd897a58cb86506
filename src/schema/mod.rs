//! Closed-schema generation for PostgreSQL parse-tree node types.
//!
//! This module turns the raw text of two C headers into a single closed
//! TypeScript schema: a discriminated union of record shapes plus the ordered
//! list of its discriminant names. The pipeline is:
//! 1. Extract: header text -> one `RawStructBlock` per `typedef struct`
//! 2. Normalize: struct bodies -> entities with classified field kinds
//! 3. Resolve: cross-entity references closed over both registries
//! 4. Emit: resolved registries -> interface text + tag-name list
//!
//! ## Module Structure
//!
//! - `header`: comment stripping and struct-block extraction
//! - `ir`: schema IR (`FieldKind`, `Field`, `Entity`, `Registry`, `ClosedSchema`)
//! - `normalize`: field classification and registry construction
//! - `resolve`: reference resolution across the two registries
//! - `emit`: IR to text artifacts (via the `Emit` trait)

mod emit;
mod header;
mod ir;
mod normalize;
mod resolve;

pub use emit::Emit;
pub use ir::{ClosedSchema, Entity, Field, FieldKind, NODE_TYPE, Registry, SCHEMA_TYPE};

/// Generate the closed schema from the two raw header texts.
///
/// `nodes_header` supplies the syntax-tree node shapes, `prims_header` the
/// leaf value types they may reference. Only primitive entities actually
/// reachable from a node entity end up in the result.
pub fn generate(nodes_header: &str, prims_header: &str) -> Result<ClosedSchema, String> {
    let node_blocks = header::extract_struct_blocks(nodes_header)?;
    let prim_blocks = header::extract_struct_blocks(prims_header)?;

    let nodes = normalize::build_node_registry(&node_blocks);
    let prims = normalize::build_primitive_registry(&prim_blocks);

    resolve::resolve(nodes, &prims)
}
