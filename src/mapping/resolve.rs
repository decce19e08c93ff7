//! Direction resolution.
//!
//! A declaration is written from one side of the edge, but the edge has two
//! ends. `Outgoing` and `Both` declarations describe the edge themselves;
//! an `Incoming` declaration defers to the `Outgoing` declaration on the
//! other class — the mirror — for the edge type, while the calling node
//! stays the *target* of the underlying edge.

use crate::model::Direction;
use crate::Result;
use super::decl::{Cardinality, RelationshipDecl};
use super::schema::{ClassDef, Schema};

/// The outcome of resolving a declaration for one accessor call: which edge
/// type to traverse/create, the slot's cardinality, and the traversal
/// direction relative to the calling node.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRel {
    pub rel_type: String,
    pub cardinality: Cardinality,
    pub direction: Direction,
}

/// Resolve `decl` (declared on `owner`) against the schema.
///
/// `Outgoing`/`Both` pass through unchanged. `Incoming` looks up its mirror
/// and adopts the mirror's edge type; traversal direction stays `Incoming`.
/// Resolution is recomputed on every call — the mirror link is a weak
/// by-name lookup, never a cached reference (the builder has already
/// verified it exists, so failure here means the schema changed under us).
pub fn resolve(schema: &Schema, owner: &ClassDef, decl: &RelationshipDecl) -> Result<ResolvedRel> {
    match decl.direction {
        Direction::Outgoing | Direction::Both => Ok(ResolvedRel {
            rel_type: decl.rel_type().to_owned(),
            cardinality: decl.cardinality,
            direction: decl.direction,
        }),
        Direction::Incoming => {
            let mirror = schema.find_mirror(owner, decl)?;
            Ok(ResolvedRel {
                rel_type: mirror.rel_type().to_owned(),
                cardinality: decl.cardinality,
                direction: Direction::Incoming,
            })
        }
    }
}
