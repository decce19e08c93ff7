//! # Relationship Mapping
//!
//! The declarative layer between node classes and the engine's edges.
//!
//! A [`Schema`] is built once: each class declares its named relationships
//! (`has_n` for any number of edges, `has_one` for an at-most-one slot with
//! replacement semantics). At access time an [`Entity`] binds a node to its
//! class and hands out [`HasN`]/[`HasOne`] views that translate reads and
//! writes into engine edge operations, resolving direction first — an
//! `Incoming` declaration defers to the mirroring `Outgoing` declaration on
//! the class at the other end of the edge.
//!
//! ```rust,no_run
//! use graphmap::engine::{GraphEngine, MemoryEngine};
//! use graphmap::mapping::{Entity, Schema};
//!
//! # async fn example() -> graphmap::Result<()> {
//! let schema = Schema::builder()
//!     .class("Folder", |c| { c.has_n("files"); })
//!     .build()?;
//!
//! let engine = MemoryEngine::new();
//! let folder = Entity::create(&engine, &schema, "Folder").await?;
//! let file = engine.create_node(&["File"], Default::default()).await?;
//!
//! folder.has_n("files")?.push(file).await?;
//! assert_eq!(folder.has_n("files")?.node_ids().await?, vec![file]);
//! # Ok(())
//! # }
//! ```

pub mod decl;
pub mod entity;
pub mod has_n;
pub mod has_one;
pub mod resolve;
pub mod schema;
pub mod timestamps;

pub use decl::{Cardinality, RelParams, RelationshipDecl};
pub use entity::Entity;
pub use has_n::HasN;
pub use has_one::HasOne;
pub use resolve::{ResolvedRel, resolve};
pub use schema::{ClassBuilder, ClassDef, Schema, SchemaBuilder};
pub use timestamps::{Clock, SystemClock, Timestamper, CREATED_AT, UPDATED_AT};
