//! Many-valued relationship view (`has_n`).

use tracing::debug;

use crate::engine::GraphEngine;
use crate::model::{Direction, Node, NodeId, PropertyMap, Relationship};
use crate::{Error, Result};
use super::resolve::ResolvedRel;

/// A lazy, restartable view over every edge of one declared relation on one
/// node. The view owns nothing but the (node, resolved declaration) binding;
/// every read re-queries the engine, so two successive reads reflect the
/// graph at their respective call times — never a held snapshot.
pub struct HasN<'g, E: GraphEngine> {
    engine: &'g E,
    node: NodeId,
    resolved: ResolvedRel,
}

impl<'g, E: GraphEngine> HasN<'g, E> {
    pub(crate) fn new(engine: &'g E, node: NodeId, resolved: ResolvedRel) -> Self {
        Self { engine, node, resolved }
    }

    /// The edge type this view reads and writes.
    pub fn rel_type(&self) -> &str {
        &self.resolved.rel_type
    }

    /// Every matching edge, for callers needing edge-level data.
    pub async fn rels(&self) -> Result<Vec<Relationship>> {
        self.engine
            .relationships_of(self.node, &self.resolved.rel_type, self.resolved.direction)
            .await
    }

    /// The ids of the nodes at the other end of every matching edge.
    pub async fn node_ids(&self) -> Result<Vec<NodeId>> {
        let rels = self.rels().await?;
        Ok(rels
            .iter()
            .filter_map(|rel| rel.other_node(self.node))
            .collect())
    }

    /// The nodes at the other end of every matching edge.
    pub async fn nodes(&self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        for id in self.node_ids().await? {
            let node = self
                .engine
                .get_node(id)
                .await?
                .ok_or_else(|| Error::NotFound(format!("Node {id}")))?;
            nodes.push(node);
        }
        Ok(nodes)
    }

    /// Number of matching edges at call time.
    pub async fn count(&self) -> Result<usize> {
        Ok(self.rels().await?.len())
    }

    /// Create one new edge of the declared type between this node and
    /// `target`. Existing edges are neither deleted nor deduplicated.
    ///
    /// For an `Incoming` declaration the calling node is the edge target, so
    /// the edge runs from `target` to this node; otherwise it runs from this
    /// node to `target` (a `Both` declaration creates outgoing).
    pub async fn push(&self, target: NodeId) -> Result<Relationship> {
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
