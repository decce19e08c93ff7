//! # Property Graph Model
//!
//! Clean DTOs shared by the mapping layer and any storage engine.
//! These types cross every boundary: schema ↔ views ↔ engine ↔ user.
//!
//! Design rule: this module is pure data — no I/O, no state, no async.

pub mod node;
pub mod property_map;
pub mod relationship;
pub mod value;

pub use node::{Node, NodeId};
pub use property_map::PropertyMap;
pub use relationship::{Direction, RelId, Relationship};
pub use value::Value;
