//! Dendrite Core - Branching Flow Builder
//!
//! Builds directed graphs of steps one append at a time:
//! - `GraphStore`: append-only node/edge arena shared by all cursors
//! - `FlowCursor`: position + staged edge label, with scoped checkouts
//! - `Schematic`: immutable snapshot for printers and viewers
//!
//! The crate only constructs structure; it does not traverse, validate or
//! persist graphs.

pub mod cursor;
pub mod error;
pub mod schematic;
pub mod store;
pub mod transition;

pub use cursor::{Checkout, Flow, FlowCursor};
pub use error::{GraphError, GraphResult};
pub use schematic::{Edge, Node, NodeId, Schematic};
pub use store::{GraphStore, SharedStore};
pub use transition::{Transition, Wait};

pub mod prelude {
    pub use crate::cursor::{Checkout, Flow, FlowCursor};
    pub use crate::schematic::{NodeId, Schematic};
    pub use crate::transition::{Transition, Wait};
}
