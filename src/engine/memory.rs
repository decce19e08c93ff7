//! In-memory graph engine.
//!
//! This is the reference implementation of `GraphEngine`.
//! It uses simple HashMaps protected by RwLock.
//!
//! ## Limitations
//!
//! - **Single-writer only**: Per-collection locks mean multi-step mutations
//!   are NOT atomic. Safe for single-threaded or read-heavy use only.
//! - **No indexes**: all lookups go through the id maps or the per-node
//!   adjacency lists.
//!
//! Use this engine for:
//! - Testing schemas and relationship declarations
//! - Embedding graphmap in applications that don't need persistence

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use parking_lot::RwLock;
use async_trait::async_trait;

use crate::model::*;
use crate::{Error, Result};
use super::GraphEngine;

// ============================================================================
// MemoryEngine
// ============================================================================

/// In-memory property graph storage.
pub struct MemoryEngine {
    inner: Arc<MemoryInner>,
}

struct MemoryInner {
    nodes: RwLock<HashMap<NodeId, Node>>,
    relationships: RwLock<HashMap<RelId, Relationship>>,
    /// node_id → list of relationship IDs
    adjacency: RwLock<HashMap<NodeId, Vec<RelId>>>,
    next_node_id: AtomicU64,
    next_rel_id: AtomicU64,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                nodes: RwLock::new(HashMap::new()),
                relationships: RwLock::new(HashMap::new()),
                adjacency: RwLock::new(HashMap::new()),
                next_node_id: AtomicU64::new(1),
                next_rel_id: AtomicU64::new(1),
            }),
        }
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// GraphEngine impl
// ============================================================================

#[async_trait]
impl GraphEngine for MemoryEngine {
    // ========================================================================
    // Node CRUD
    // ========================================================================

    async fn create_node(&self, labels: &[&str], props: PropertyMap) -> Result<NodeId> {
        let id = NodeId(self.inner.next_node_id.fetch_add(1, Ordering::Relaxed));
        let node = Node {
            id,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            properties: props,
        };

        self.inner.nodes.write().insert(id, node);
        self.inner.adjacency.write().insert(id, Vec::new());

        Ok(id)
    }

    async fn get_node(&self, id: NodeId) -> Result<Option<Node>> {
        Ok(self.inner.nodes.read().get(&id).cloned())
    }

    async fn delete_node(&self, id: NodeId) -> Result<bool> {
        // Can't delete a connected node: dangling edges would corrupt traversal
        {
            let adj = self.inner.adjacency.read();
            if let Some(rels) = adj.get(&id) {
                if !rels.is_empty() {
                    return Err(Error::ConstraintViolation(
                        format!("Cannot delete node {id} with {} relationships. Delete relationships first.", rels.len())
                    ));
                }
            }
        }

        let removed = self.inner.nodes.write().remove(&id);
        self.inner.adjacency.write().remove(&id);

        Ok(removed.is_some())
    }

    async fn set_node_property(&self, id: NodeId, key: &str, val: Value) -> Result<()> {
        let mut nodes = self.inner.nodes.write();
        let node = nodes.get_mut(&id).ok_or_else(|| Error::NotFound(format!("Node {id}")))?;
        node.properties.insert(key.to_string(), val);
        Ok(())
    }

    // ========================================================================
    // Relationship CRUD
    // ========================================================================

    async fn create_relationship(
        &self,
        src: NodeId,
        dst: NodeId,
        rel_type: &str,
        props: PropertyMap,
    ) -> Result<Relationship> {
        // Verify both nodes exist
        {
            let nodes = self.inner.nodes.read();
            if !nodes.contains_key(&src) {
                return Err(Error::NotFound(format!("Source node {src}")));
            }
            if !nodes.contains_key(&dst) {
                return Err(Error::NotFound(format!("Target node {dst}")));
            }
        }

        let id = RelId(self.inner.next_rel_id.fetch_add(1, Ordering::Relaxed));
        let rel = Relationship {
            id,
            src,
            dst,
            rel_type: rel_type.to_string(),
            properties: props,
        };

        self.inner.relationships.write().insert(id, rel.clone());

        // Update adjacency for both endpoints
        let mut adj = self.inner.adjacency.write();
        adj.entry(src).or_default().push(id);
        if src != dst {
            adj.entry(dst).or_default().push(id);
        }

        Ok(rel)
    }

    async fn get_relationship(&self, id: RelId) -> Result<Option<Relationship>> {
        Ok(self.inner.relationships.read().get(&id).cloned())
    }

    async fn delete_relationship(&self, id: RelId) -> Result<bool> {
        let removed = self.inner.relationships.write().remove(&id);
        if let Some(rel) = &removed {
            let mut adj = self.inner.adjacency.write();
            if let Some(rels) = adj.get_mut(&rel.src) {
                rels.retain(|rid| *rid != id);
            }
            if rel.src != rel.dst {
                if let Some(rels) = adj.get_mut(&rel.dst) {
                    rels.retain(|rid| *rid != id);
                }
            }
        }
        Ok(removed.is_some())
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    async fn relationships_of(
        &self,
        node: NodeId,
        rel_type: &str,
        dir: Direction,
    ) -> Result<Vec<Relationship>> {
        let adj = self.inner.adjacency.read();
        let rels = self.inner.relationships.read();

        let rel_ids = adj.get(&node).cloned().unwrap_or_default();
        let mut result = Vec::new();

        for rid in rel_ids {
            if let Some(rel) = rels.get(&rid) {
                if rel.matches_direction(node, dir) && rel.rel_type == rel_type {
                    result.push(rel.clone());
                }
            }
        }

        Ok(result)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    async fn node_count(&self) -> Result<u64> {
        Ok(self.inner.nodes.read().len() as u64)
    }

    async fn relationship_count(&self) -> Result<u64> {
        Ok(self.inner.relationships.read().len() as u64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_node() {
        let db = MemoryEngine::new();

        let mut props = PropertyMap::new();
        props.insert("name".into(), Value::from("Ada"));

        let id = db.create_node(&["Person"], props).await.unwrap();
        let node = db.get_node(id).await.unwrap().unwrap();

        assert_eq!(node.labels, vec!["Person"]);
        assert_eq!(node.get("name"), Some(&Value::from("Ada")));
    }

    #[tokio::test]
    async fn test_create_relationship() {
        let db = MemoryEngine::new();

        let a = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();
        let b = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();

        let rel = db.create_relationship(a, b, "KNOWS", PropertyMap::new()).await.unwrap();

        assert_eq!(rel.src, a);
        assert_eq!(rel.dst, b);
        assert_eq!(rel.rel_type, "KNOWS");

        let fetched = db.get_relationship(rel.id).await.unwrap().unwrap();
        assert_eq!(fetched, rel);
    }

    #[tokio::test]
    async fn test_create_relationship_missing_endpoint() {
        let db = MemoryEngine::new();
        let a = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();

        let result = db.create_relationship(a, NodeId(999), "KNOWS", PropertyMap::new()).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cannot_delete_connected_node() {
        let db = MemoryEngine::new();

        let a = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();
        let b = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();
        db.create_relationship(a, b, "KNOWS", PropertyMap::new()).await.unwrap();

        let result = db.delete_node(a).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_relationship_updates_adjacency() {
        let db = MemoryEngine::new();

        let a = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();
        let b = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();
        let rel = db.create_relationship(a, b, "KNOWS", PropertyMap::new()).await.unwrap();

        assert!(db.delete_relationship(rel.id).await.unwrap());
        assert_eq!(db.relationship_count().await.unwrap(), 0);
        assert!(db.relationships_of(a, "KNOWS", Direction::Both).await.unwrap().is_empty());

        // Node is no longer connected, so plain delete succeeds
        assert!(db.delete_node(a).await.unwrap());
    }

    #[tokio::test]
    async fn test_relationships_of_filters_direction_and_type() {
        let db = MemoryEngine::new();

        let a = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();
        let b = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();
        let c = db.create_node(&["Person"], PropertyMap::new()).await.unwrap();

        db.create_relationship(a, b, "KNOWS", PropertyMap::new()).await.unwrap();
        db.create_relationship(c, a, "KNOWS", PropertyMap::new()).await.unwrap();
        db.create_relationship(a, c, "WORKS_WITH", PropertyMap::new()).await.unwrap();

        let outgoing = db.relationships_of(a, "KNOWS", Direction::Outgoing).await.unwrap();
        assert_eq!(outgoing.len(), 1);
        assert_eq!(outgoing[0].dst, b);

        let incoming = db.relationships_of(a, "KNOWS", Direction::Incoming).await.unwrap();
        assert_eq!(incoming.len(), 1);
        assert_eq!(incoming[0].src, c);

        let both = db.relationships_of(a, "KNOWS", Direction::Both).await.unwrap();
        assert_eq!(both.len(), 2);
    }
}
