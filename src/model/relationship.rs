//! Relationship (edge) in the property graph.

use serde::{Deserialize, Serialize};
use super::{NodeId, PropertyMap, Value};

/// Opaque relationship identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelId(pub u64);

impl std::fmt::Display for RelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traversal direction, relative to some node of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}

impl Direction {
    /// The same edges seen from the other endpoint. `Both` is its own mirror.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Outgoing => Direction::Incoming,
            Direction::Incoming => Direction::Outgoing,
            Direction::Both => Direction::Both,
        }
    }
}

/// A relationship (directed edge) in the property graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelId,
    pub src: NodeId,
    pub dst: NodeId,
    pub rel_type: String,
    pub properties: PropertyMap,
}

impl Relationship {
    pub fn new(id: RelId, src: NodeId, dst: NodeId, rel_type: impl Into<String>) -> Self {
        Self {
            id,
            src,
            dst,
            rel_type: rel_type.into(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// The "other" end of the relationship from the given node.
    ///
    /// Returns `None` when the node is not an endpoint at all. For a
    /// self-loop the node itself is returned.
    pub fn other_node(&self, from: NodeId) -> Option<NodeId> {
        if from == self.src { Some(self.dst) }
        else if from == self.dst { Some(self.src) }
        else { None }
    }

    /// Whether the edge matches `dir` as seen from `node`.
    pub fn matches_direction(&self, node: NodeId, dir: Direction) -> bool {
        match dir {
            Direction::Outgoing => self.src == node,
            Direction::Incoming => self.dst == node,
            Direction::Both => self.src == node || self.dst == node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_node() {
        let rel = Relationship::new(RelId(1), NodeId(1), NodeId(2), "FILES");
        assert_eq!(rel.other_node(NodeId(1)), Some(NodeId(2)));
        assert_eq!(rel.other_node(NodeId(2)), Some(NodeId(1)));
        assert_eq!(rel.other_node(NodeId(3)), None);
    }

    #[test]
    fn test_direction_reversed() {
        assert_eq!(Direction::Outgoing.reversed(), Direction::Incoming);
        assert_eq!(Direction::Incoming.reversed(), Direction::Outgoing);
        assert_eq!(Direction::Both.reversed(), Direction::Both);
    }

    #[test]
    fn test_matches_direction() {
        let rel = Relationship::new(RelId(1), NodeId(1), NodeId(2), "FILES");
        assert!(rel.matches_direction(NodeId(1), Direction::Outgoing));
        assert!(!rel.matches_direction(NodeId(1), Direction::Incoming));
        assert!(rel.matches_direction(NodeId(2), Direction::Incoming));
        assert!(rel.matches_direction(NodeId(2), Direction::Both));
    }
}
