//! # Graph Engine Trait
//!
//! This is the contract between the mapping layer and any storage engine.
//! It is deliberately narrow: the relationship views need edge creation,
//! edge deletion and edge iteration, plus a small node CRUD surface for
//! entity construction and the timestamp hooks. Query planning, indexing
//! and transactions belong to the engine behind this trait, not here.
//!
//! ## Implementations
//!
//! | Engine | Module | Description |
//! |--------|--------|-------------|
//! | `MemoryEngine` | `memory` | In-memory for testing/embedding |

pub mod memory;

use async_trait::async_trait;
use crate::model::*;
use crate::Result;

pub use memory::MemoryEngine;

/// The storage contract consumed by the mapping layer.
///
/// Every method is atomic on its own; there is no transactionality across
/// calls. Callers that need atomicity over multi-step mutations (such as
/// [`HasOne::set`](crate::mapping::HasOne::set)) must get it from the
/// engine itself, outside this trait.
#[async_trait]
pub trait GraphEngine: Send + Sync + 'static {
    // ========================================================================
    // Node CRUD
    // ========================================================================

    /// Create a node with the given labels and properties.
    async fn create_node(&self, labels: &[&str], props: PropertyMap) -> Result<NodeId>;

    /// Get a node by ID. Returns None if not found.
    async fn get_node(&self, id: NodeId) -> Result<Option<Node>>;

    /// Delete a node. Returns true if it existed.
    /// Fails while the node still has relationships.
    async fn delete_node(&self, id: NodeId) -> Result<bool>;

    /// Set a property on a node (upsert).
    async fn set_node_property(&self, id: NodeId, key: &str, val: Value) -> Result<()>;

    // ========================================================================
    // Relationship CRUD
    // ========================================================================

    /// Create a relationship between two nodes and return it.
    async fn create_relationship(
        &self,
        src: NodeId,
        dst: NodeId,
        rel_type: &str,
        props: PropertyMap,
    ) -> Result<Relationship>;

    /// Get a relationship by ID.
    async fn get_relationship(&self, id: RelId) -> Result<Option<Relationship>>;

    /// Delete a relationship. Returns true if it existed.
    async fn delete_relationship(&self, id: RelId) -> Result<bool>;

    // ========================================================================
    // Traversal
    // ========================================================================

    /// All relationships of the given type touching `node`, filtered by
    /// direction as seen from `node`. Each call reflects the graph at call
    /// time; the mapping layer re-queries rather than holding snapshots.
    async fn relationships_of(
        &self,
        node: NodeId,
        rel_type: &str,
        dir: Direction,
    ) -> Result<Vec<Relationship>>;

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Total number of nodes.
    async fn node_count(&self) -> Result<u64>;

    /// Total number of relationships.
    async fn relationship_count(&self) -> Result<u64>;
}
