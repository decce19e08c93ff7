//! Timestamp lifecycle hooks.
//!
//! An independent persistence-audit feature, fully decoupled from the
//! relationship layer: callers invoke [`Timestamper::stamp_created`] after
//! creating a node and [`Timestamper::stamp_updated`] after modifying one.
//! The clock is a trait so tests can pin time.

use chrono::{DateTime, Utc};

use crate::engine::GraphEngine;
use crate::model::{NodeId, Value};
use crate::Result;

/// Property key for the creation timestamp.
pub const CREATED_AT: &str = "created_at";
/// Property key for the last-update timestamp.
pub const UPDATED_AT: &str = "updated_at";

/// Source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Stamps `created_at`/`updated_at` node properties through the engine.
pub struct Timestamper<'g, E, C = SystemClock> {
    engine: &'g E,
    clock: C,
}

impl<'g, E: GraphEngine> Timestamper<'g, E, SystemClock> {
    pub fn new(engine: &'g E) -> Self {
        Self { engine, clock: SystemClock }
    }
}

impl<'g, E: GraphEngine, C: Clock> Timestamper<'g, E, C> {
    pub fn with_clock(engine: &'g E, clock: C) -> Self {
        Self { engine, clock }
    }

    /// On create: set both `created_at` and `updated_at` to now.
    pub async fn stamp_created(&self, node: NodeId) -> Result<()> {
        let now = self.clock.now();
        self.engine.set_node_property(node, CREATED_AT, Value::DateTime(now)).await?;
        self.engine.set_node_property(node, UPDATED_AT, Value::DateTime(now)).await?;
        Ok(())
    }

    /// On update: advance `updated_at` only; `created_at` is never touched
    /// again.
    pub async fn stamp_updated(&self, node: NodeId) -> Result<()> {
        let now = self.clock.now();
        self.engine.set_node_property(node, UPDATED_AT, Value::DateTime(now)).await?;
        Ok(())
    }

    /// Read back `created_at`, if stamped.
    pub async fn created_at(&self, node: NodeId) -> Result<Option<DateTime<Utc>>> {
        self.read(node, CREATED_AT).await
    }

    /// Read back `updated_at`, if stamped.
    pub async fn updated_at(&self, node: NodeId) -> Result<Option<DateTime<Utc>>> {
        self.read(node, UPDATED_AT).await
    }

    async fn read(&self, node: NodeId, key: &str) -> Result<Option<DateTime<Utc>>> {
        let node = self.engine.get_node(node).await?;
        Ok(node.and_then(|n| n.get(key).and_then(Value::as_datetime)))
    }
}
