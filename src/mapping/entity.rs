//! Entity: the runtime binding between a node and its class.
//!
//! The accessor surface is a small dispatch table keyed by declaration name
//! — no runtime code generation. Per-name typed accessors are produced at
//! compile time by the [`relation_accessors!`](crate::relation_accessors)
//! macro, each a thin wrapper over [`Entity::has_n`]/[`Entity::has_one`].

use crate::engine::GraphEngine;
use crate::model::{NodeId, PropertyMap};
use crate::{Error, Result};
use super::decl::Cardinality;
use super::has_n::HasN;
use super::has_one::HasOne;
use super::resolve::resolve;
use super::schema::{ClassDef, Schema};

/// One node seen through its class's declarations.
///
/// Holds only borrows and an id — cheap to construct per access.
pub struct Entity<'g, E: GraphEngine> {
    engine: &'g E,
    schema: &'g Schema,
    class: &'g ClassDef,
    node: NodeId,
}

impl<'g, E: GraphEngine> Entity<'g, E> {
    /// Bind an existing node to a class.
    pub fn new(engine: &'g E, schema: &'g Schema, class: &str, node: NodeId) -> Result<Self> {
        let class = schema.class(class)?;
        Ok(Self { engine, schema, class, node })
    }

    /// Create a fresh node labeled with the class name and bind it.
    pub async fn create(engine: &'g E, schema: &'g Schema, class: &str) -> Result<Self> {
        let class = schema.class(class)?;
        let node = engine.create_node(&[class.name()], PropertyMap::new()).await?;
        Ok(Self { engine, schema, class, node })
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    pub fn class(&self) -> &ClassDef {
        self.class
    }

    /// Many-valued view of a declared relation.
    ///
    /// Works for any declaration — a `has_one` slot exposes its (at most
    /// one) edge through it, which is how edge-level accessors are built.
    pub fn has_n(&self, name: &str) -> Result<HasN<'g, E>> {
        let decl = self.class.lookup(name)?;
        let resolved = resolve(self.schema, self.class, decl)?;
        Ok(HasN::new(self.engine, self.node, resolved))
    }

    /// Single-valued view of a declared relation.
    ///
    /// Requires the declaration to be `has_one`: exposing single-slot
    /// replacement writes over a `has_n` declaration would silently drop
    /// edges.
    pub fn has_one(&self, name: &str) -> Result<HasOne<'g, E>> {
        let decl = self.class.lookup(name)?;
        if decl.cardinality != Cardinality::One {
            return Err(Error::CardinalityMismatch {
                class: self.class.name().to_string(),
                relation: name.to_string(),
            });
        }
        let resolved = resolve(self.schema, self.class, decl)?;
        Ok(HasOne::new(self.engine, self.node, resolved))
    }
}

/// Generate a typed wrapper struct with one accessor method per declared
/// relation.
///
/// ```rust,ignore
/// relation_accessors! {
///     pub struct FolderNode {
///         has_n files;
///     }
/// }
///
/// let folder = FolderNode(Entity::new(&engine, &schema, "Folder", id)?);
/// folder.files()?.push(file_id).await?;
/// ```
#[macro_export]
macro_rules! relation_accessors {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $kind:ident $rel:ident; )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name<'g, E: $crate::engine::GraphEngine>(
            pub $crate::mapping::Entity<'g, E>,
        );

        impl<'g, E: $crate::engine::GraphEngine> $name<'g, E> {
            $( $crate::relation_accessors!(@method 'g E $kind $rel); )*
        }
    };
    (@method $lt:lifetime $engine:ident has_n $rel:ident) => {
        pub fn $rel(&self) -> $crate::Result<$crate::mapping::HasN<$lt, $engine>> {
            self.0.has_n(stringify!($rel))
        }
    };
    (@method $lt:lifetime $engine:ident has_one $rel:ident) => {
        pub fn $rel(&self) -> $crate::Result<$crate::mapping::HasOne<$lt, $engine>> {
            self.0.has_one(stringify!($rel))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryEngine;

    fn schema() -> Schema {
        Schema::builder()
            .class("Folder", |c| {
                c.has_n("files");
                c.has_one("owner");
            })
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_class() {
        let engine = MemoryEngine::new();
        let schema = schema();
        let result = Entity::new(&engine, &schema, "Ghost", NodeId(1));
        assert!(matches!(result, Err(Error::UnknownClass(_))));
    }

    #[tokio::test]
    async fn test_unknown_relation() {
        let engine = MemoryEngine::new();
        let schema = schema();
        let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
        assert!(matches!(
            folder.has_n("nope"),
            Err(Error::UnknownRelation { .. })
        ));
    }

    #[tokio::test]
    async fn test_has_one_rejects_many_declaration() {
        let engine = MemoryEngine::new();
        let schema = schema();
        let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
        assert!(matches!(
            folder.has_one("files"),
            Err(Error::CardinalityMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_has_n_over_single_declaration() {
        // Edge-level access to a has_one slot goes through a HasN view.
        let engine = MemoryEngine::new();
        let schema = schema();
        let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
        let view = folder.has_n("owner").unwrap();
        assert_eq!(view.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_labels_node_with_class() {
        let engine = MemoryEngine::new();
        let schema = schema();
        let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
        let node = engine.get_node(folder.node_id()).await.unwrap().unwrap();
        assert!(node.has_label("Folder"));
    }
}
