//! # graphmap — Declarative Relationship Mapping for Property Graphs
//!
//! A typed mapping layer between node classes and a graph engine's edges.
//! Classes declare named relationships once; accessors translate
//! attribute-style access into edge traversal and creation, enforcing
//! cardinality — `has_n` slots append, `has_one` slots replace.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphEngine` is the contract between the mapping
//!    layer and storage
//! 2. **Clean DTOs**: `Node`, `Relationship`, `Value` cross all boundaries
//! 3. **Explicit schema**: declarations live in a `Schema` object built
//!    once at setup — no ambient per-class globals, no runtime codegen
//! 4. **Fail fast**: incoming declarations are mirror-checked when the
//!    schema is built, not at first access
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graphmap::engine::{GraphEngine, MemoryEngine};
//! use graphmap::mapping::{Entity, RelParams, Schema};
//! use graphmap::Direction;
//!
//! # async fn example() -> graphmap::Result<()> {
//! // Folders hold any number of files; a file sits in at most one folder.
//! let schema = Schema::builder()
//!     .class("Folder", |c| { c.has_n("files"); })
//!     .class("File", |c| {
//!         c.has_one_with(
//!             "folder",
//!             Direction::Incoming,
//!             RelParams::new().to("Folder").rel_type("files"),
//!         );
//!     })
//!     .build()?;
//!
//! let engine = MemoryEngine::new();
//! let folder = Entity::create(&engine, &schema, "Folder").await?;
//! let file = Entity::create(&engine, &schema, "File").await?;
//!
//! // Assign from the file side...
//! file.has_one("folder")?.set(folder.node_id()).await?;
//!
//! // ...and observe from the folder side.
//! assert!(folder.has_n("files")?.node_ids().await?.contains(&file.node_id()));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod engine;
pub mod mapping;
pub mod model;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Direction, Node, NodeId, PropertyMap, RelId, Relationship, Value,
};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use engine::{GraphEngine, MemoryEngine};

// ============================================================================
// Re-exports: Mapping
// ============================================================================

pub use mapping::{
    Cardinality, Entity, HasN, HasOne, RelParams, RelationshipDecl,
    ResolvedRel, Schema,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown node class: {0}")]
    UnknownClass(String),

    #[error("Relation {class}.{relation} has not been declared")]
    UnknownRelation { class: String, relation: String },

    #[error("Cannot resolve mirror for incoming relation {class}.{relation}: {reason}")]
    UnresolvedMirror {
        class: String,
        relation: String,
        reason: String,
    },

    #[error("Relation {class}.{relation} is not declared has_one")]
    CardinalityMismatch { class: String, relation: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
