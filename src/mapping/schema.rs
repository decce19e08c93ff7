//! Schema: the explicit, owned registry of classes and their declarations.
//!
//! Built once at setup via [`Schema::builder`], read thereafter. There is no
//! ambient per-class global state; every lookup goes through the `Schema`
//! the caller holds. `build()` validates eagerly that every `Incoming`
//! declaration has a mirror, so misconfigured schemas fail at construction
//! rather than at first access.

use std::collections::HashMap;

use crate::model::Direction;
use crate::{Error, Result};
use super::decl::{Cardinality, RelParams, RelationshipDecl};

// ============================================================================
// ClassDef
// ============================================================================

/// A node class: a name plus its declaration registry.
#[derive(Debug, Clone)]
pub struct ClassDef {
    name: String,
    relationships: HashMap<String, RelationshipDecl>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relationships: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store a declaration. Redeclaring a name replaces the earlier entry
    /// (last write wins); entries are never removed.
    pub fn declare(&mut self, decl: RelationshipDecl) {
        self.relationships.insert(decl.name.clone(), decl);
    }

    /// Look up a declaration by name.
    pub fn lookup(&self, name: &str) -> Result<&RelationshipDecl> {
        self.relationships.get(name).ok_or_else(|| Error::UnknownRelation {
            class: self.name.clone(),
            relation: name.to_string(),
        })
    }

    pub fn declarations(&self) -> impl Iterator<Item = &RelationshipDecl> {
        self.relationships.values()
    }
}

// ============================================================================
// Schema
// ============================================================================

/// The full set of node classes known to the mapping layer.
#[derive(Debug, Clone)]
pub struct Schema {
    classes: HashMap<String, ClassDef>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { classes: Vec::new() }
    }

    pub fn class(&self, name: &str) -> Result<&ClassDef> {
        self.classes
            .get(name)
            .ok_or_else(|| Error::UnknownClass(name.to_string()))
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    /// Find the declaration an `Incoming` declaration defers to: an
    /// `Outgoing`/`Both` declaration producing the same edge type, on the
    /// class named by the `to` parameter or, lacking a hint, on exactly one
    /// class in the schema.
    ///
    /// Re-resolved on every access (and once more, eagerly, at build time);
    /// the result is never cached across schema changes.
    pub fn find_mirror(
        &self,
        owner: &ClassDef,
        decl: &RelationshipDecl,
    ) -> Result<&RelationshipDecl> {
        let want = decl.rel_type();
        let unresolved = |reason: &str| Error::UnresolvedMirror {
            class: owner.name().to_string(),
            relation: decl.name.clone(),
            reason: reason.to_string(),
        };

        let is_mirror = |candidate: &RelationshipDecl| {
            matches!(candidate.direction, Direction::Outgoing | Direction::Both)
                && candidate.rel_type() == want
        };

        match &decl.params.to {
            Some(target) => {
                let class = self
                    .get_class(target)
                    .ok_or_else(|| unresolved(&format!("target class {target:?} is not in the schema")))?;
                class
                    .declarations()
                    .find(|d| is_mirror(d))
                    .ok_or_else(|| unresolved(&format!(
                        "class {target:?} has no outgoing declaration for edge type {want:?}"
                    )))
            }
            None => {
                let mut candidates: Vec<&RelationshipDecl> = self
                    .classes
                    .values()
                    .flat_map(|c| c.declarations())
                    .filter(|d| is_mirror(d))
                    .collect();
                match candidates.len() {
                    1 => Ok(candidates.remove(0)),
                    0 => Err(unresolved(&format!(
                        "no class declares edge type {want:?} outgoing"
                    ))),
                    n => Err(unresolved(&format!(
                        "edge type {want:?} is declared outgoing by {n} classes; add a `to` parameter"
                    ))),
                }
            }
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Builds a [`Schema`], validating mirrors eagerly at `build()`.
pub struct SchemaBuilder {
    classes: Vec<ClassDef>,
}

impl SchemaBuilder {
    /// Add a class and declare its relationships.
    pub fn class(mut self, name: impl Into<String>, f: impl FnOnce(&mut ClassBuilder)) -> Self {
        let mut builder = ClassBuilder { def: ClassDef::new(name) };
        f(&mut builder);
        self.classes.push(builder.def);
        self
    }

    /// Assemble the schema. Fails with [`Error::UnresolvedMirror`] when any
    /// `Incoming` declaration lacks an unambiguous mirror.
    pub fn build(self) -> Result<Schema> {
        let schema = Schema {
            classes: self
                .classes
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
        };

        for class in schema.classes.values() {
            for decl in class.declarations().filter(|d| d.is_incoming()) {
                schema.find_mirror(class, decl)?;
            }
        }

        Ok(schema)
    }
}

/// Declares relationships on one class within [`SchemaBuilder::class`].
pub struct ClassBuilder {
    def: ClassDef,
}

impl ClassBuilder {
    /// Declare a many-valued relation. Direction defaults to `Both`.
    pub fn has_n(&mut self, name: impl Into<String>) -> &mut Self {
        self.declare(name, Cardinality::Many, Direction::Both, RelParams::new())
    }

    /// Declare a many-valued relation with explicit direction and parameters.
    pub fn has_n_with(
        &mut self,
        name: impl Into<String>,
        direction: Direction,
        params: RelParams,
    ) -> &mut Self {
        self.declare(name, Cardinality::Many, direction, params)
    }

    /// Declare a single-valued relation. Direction defaults to `Both`.
    pub fn has_one(&mut self, name: impl Into<String>) -> &mut Self {
        self.declare(name, Cardinality::One, Direction::Both, RelParams::new())
    }

    /// Declare a single-valued relation with explicit direction and parameters.
    pub fn has_one_with(
        &mut self,
        name: impl Into<String>,
        direction: Direction,
        params: RelParams,
    ) -> &mut Self {
        self.declare(name, Cardinality::One, direction, params)
    }

    /// The generic form behind the sugar above.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        cardinality: Cardinality,
        direction: Direction,
        params: RelParams,
    ) -> &mut Self {
        self.def.declare(RelationshipDecl::new(name, cardinality, direction, params));
        self
    }
}
