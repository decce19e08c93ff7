//! Relationship declarations.
//!
//! A declaration is the static record behind one `has_n`/`has_one` slot:
//! its name, cardinality, direction and parameters. Declarations are value
//! types — immutable once stored in a [`ClassDef`](super::schema::ClassDef)
//! registry.

use serde::{Deserialize, Serialize};

use crate::model::{Direction, PropertyMap, Value};

/// How many edges a declared relation may hold on one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    /// At most one edge; assignment replaces the previous edge.
    One,
    /// Any number of edges; appending never deduplicates.
    Many,
}

/// Free-form declaration parameters.
///
/// `to` names the class on the other end of the edge — required context for
/// mirror resolution when the same edge type is produced by more than one
/// class. `rel_type` overrides the edge type written to the engine, which
/// otherwise defaults to the declaration name; an `Incoming` declaration
/// typically sets it to the name of the `Outgoing` declaration it mirrors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelParams {
    pub to: Option<String>,
    pub rel_type: Option<String>,
    pub extras: PropertyMap,
}

impl RelParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the class on the other end of the edge.
    pub fn to(mut self, class: impl Into<String>) -> Self {
        self.to = Some(class.into());
        self
    }

    /// Override the edge type (defaults to the declaration name).
    pub fn rel_type(mut self, rel_type: impl Into<String>) -> Self {
        self.rel_type = Some(rel_type.into());
        self
    }

    /// Attach an opaque extra parameter.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// A declared relationship on a node class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDecl {
    pub name: String,
    pub cardinality: Cardinality,
    pub direction: Direction,
    pub params: RelParams,
}

impl RelationshipDecl {
    pub fn new(
        name: impl Into<String>,
        cardinality: Cardinality,
        direction: Direction,
        params: RelParams,
    ) -> Self {
        Self {
            name: name.into(),
            cardinality,
            direction,
            params,
        }
    }

    /// The edge type this declaration reads and writes.
    pub fn rel_type(&self) -> &str {
        self.params.rel_type.as_deref().unwrap_or(&self.name)
    }

    pub fn is_incoming(&self) -> bool {
        self.direction == Direction::Incoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_type_defaults_to_name() {
        let decl = RelationshipDecl::new(
            "files", Cardinality::Many, Direction::Both, RelParams::new(),
        );
        assert_eq!(decl.rel_type(), "files");
    }

    #[test]
    fn test_rel_type_override() {
        let decl = RelationshipDecl::new(
            "parent",
            Cardinality::One,
            Direction::Incoming,
            RelParams::new().to("Folder").rel_type("children"),
        );
        assert_eq!(decl.rel_type(), "children");
        assert_eq!(decl.params.to.as_deref(), Some("Folder"));
        assert!(decl.is_incoming());
    }

    #[test]
    fn test_extras() {
        let params = RelParams::new().extra("namespace", "fs");
        assert_eq!(params.extras.get("namespace"), Some(&Value::from("fs")));
    }
}
