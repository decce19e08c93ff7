//! Single-valued relationship view (`has_one`).

use tracing::debug;

use crate::engine::GraphEngine;
use crate::model::{Direction, Node, NodeId, PropertyMap, Relationship};
use crate::Result;
use super::resolve::ResolvedRel;

/// An at-most-one slot over one declared relation on one node.
///
/// Reading yields the single target or `None`. Assignment deletes the old
/// edge and then creates the new one; it is the only mutation this view
/// offers, so the single-edge invariant holds as long as all writes go
/// through `set` and the declaring code keeps other writers away from this
/// edge type.
pub struct HasOne<'g, E: GraphEngine> {
    engine: &'g E,
    node: NodeId,
    resolved: ResolvedRel,
}

impl<'g, E: GraphEngine> HasOne<'g, E> {
    pub(crate) fn new(engine: &'g E, node: NodeId, resolved: ResolvedRel) -> Self {
        Self { engine, node, resolved }
    }

    /// The edge type this view reads and writes.
    pub fn rel_type(&self) -> &str {
        &self.resolved.rel_type
    }

    /// The single edge, or `None` when the slot is empty. If more than one
    /// edge exists the invariant was violated externally; an arbitrary edge
    /// is returned, not an error.
    pub async fn rel(&self) -> Result<Option<Relationship>> {
        let rels = self
            .engine
            .relationships_of(self.node, &self.resolved.rel_type, self.resolved.direction)
            .await?;
        Ok(rels.into_iter().next())
    }

    /// The node on the other end of the single edge, or `None`.
    pub async fn get(&self) -> Result<Option<Node>> {
        match self.rel().await? {
            Some(rel) => match rel.other_node(self.node) {
                Some(id) => self.engine.get_node(id).await,
                None => Ok(None),
            },
            None => Ok(None),
        }
    }

    /// Like [`get`](Self::get) but returns only the id.
    pub async fn get_id(&self) -> Result<Option<NodeId>> {
        Ok(self.rel().await?.and_then(|rel| rel.other_node(self.node)))
    }

    /// Replace the slot's edge: delete the old edge if present, then create
    /// a new one to `target`.
    ///
    /// The two steps are separate engine calls with no transaction across
    /// them. If the create fails after the delete succeeded, the slot is
    /// left empty and the error propagates — no rollback is attempted.
    /// Callers needing atomicity must wrap this in an engine-level
    /// transaction outside this layer.
    pub async fn set(&self, target: NodeId) -> Result<Relationship> {
        if let Some(old) = self.rel().await? {
            debug!(
                rel_type = %self.resolved.rel_type,
                old_rel = %old.id,
                "replacing single relationship"
            );
            self.engine.delete_relationship(old.id).await?;
        }
        let (src, dst) = match self.resolved.direction {
            Direction::Incoming => (target, self.node),
            Direction::Outgoing | Direction::Both => (self.node, target),
        };
        debug!(
            rel_type = %self.resolved.rel_type,
            %src,
            %dst,
            "creating relationship"
        );
        self.engine
            .create_relationship(src, dst, &self.resolved.rel_type, PropertyMap::new())
            .await
    }
}
