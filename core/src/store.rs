//! GraphStore - Append-only Node/Edge Arena
//!
//! The store is the only durable state of a flow. It knows nothing about
//! cursors or branching: it hands out dense ids and records edges.

use crate::error::{GraphError, GraphResult};
use crate::schematic::{Edge, Node, NodeId, Schematic};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Handle shared by every cursor descended from one root.
pub type SharedStore<N, E> = Rc<RefCell<GraphStore<N, E>>>;

/// Append-only directed graph with payloads on nodes and (optionally) edges.
#[derive(Debug, Clone)]
pub struct GraphStore<N, E> {
    id: Uuid,
    name: String,
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<E>>,
}

impl<N, E> Default for GraphStore<N, E> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<N, E> GraphStore<N, E> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Wrap this store into a handle that cursors can share.
    pub fn into_shared(self) -> SharedStore<N, E> {
        Rc::new(RefCell::new(self))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<N>> {
        self.nodes.get(id)
    }

    /// Append a node and return its id (the prior node count).
    pub fn add_node(&mut self, payload: N) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node { id, payload });
        tracing::trace!(store = %self.id, node = id, "node added");
        id
    }

    /// Append an edge between two existing nodes.
    ///
    /// Both endpoints must already be in the store. Cursors only ever pass
    /// ids they received from `add_node`, so this is asserted in debug
    /// builds only. Use [`try_add_edge`](Self::try_add_edge) for ids from
    /// elsewhere.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, payload: Option<E>) {
        debug_assert!(self.contains(from), "edge source {from} out of range");
        debug_assert!(self.contains(to), "edge target {to} out of range");
        self.edges.push(Edge { from, to, payload });
        tracing::trace!(store = %self.id, from, to, "edge added");
    }

    /// Checked variant of [`add_edge`](Self::add_edge).
    pub fn try_add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        payload: Option<E>,
    ) -> GraphResult<()> {
        self.check(from)?;
        self.check(to)?;
        self.add_edge(from, to, payload);
        Ok(())
    }

    pub(crate) fn check(&self, id: NodeId) -> GraphResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::InvalidReference {
                id,
                node_count: self.nodes.len(),
            })
        }
    }
}

impl<N: Clone, E: Clone> GraphStore<N, E> {
    /// Take a read-only copy of the current nodes and edges.
    pub fn snapshot(&self) -> Schematic<N, E> {
        Schematic {
            id: self.id,
            name: self.name.clone(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_and_sequential() {
        let mut store: GraphStore<&str, ()> = GraphStore::new("ids");
        assert_eq!(store.add_node("a"), 0);
        assert_eq!(store.add_node("b"), 1);
        assert_eq!(store.add_node("c"), 2);
        assert_eq!(store.node_count(), 3);
        assert_eq!(store.node(1).map(|n| n.payload), Some("b"));
        assert!(store.node(3).is_none());
    }

    #[test]
    fn test_add_edge_keeps_payload() {
        let mut store: GraphStore<&str, u32> = GraphStore::default();
        let a = store.add_node("a");
        let b = store.add_node("b");
        store.add_edge(a, b, Some(7));
        store.add_edge(b, a, None);

        let snap = store.snapshot();
        assert_eq!(snap.edges[0], Edge { from: 0, to: 1, payload: Some(7) });
        assert_eq!(snap.edges[1].payload, None);
    }

    #[test]
    fn test_try_add_edge_rejects_unknown_ids() {
        let mut store: GraphStore<&str, ()> = GraphStore::new("checked");
        let a = store.add_node("a");

        let err = store.try_add_edge(a, 5, None).unwrap_err();
        assert_eq!(err, GraphError::InvalidReference { id: 5, node_count: 1 });
        assert_eq!(store.edge_count(), 0);

        let b = store.add_node("b");
        assert!(store.try_add_edge(a, b, None).is_ok());
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_mutation() {
        let mut store: GraphStore<String, ()> = GraphStore::new("snap");
        store.add_node("first".to_string());

        let before = store.snapshot();
        assert_eq!(before, store.snapshot());

        store.add_node("second".to_string());
        assert_eq!(before.nodes.len(), 1);
        assert_eq!(store.snapshot().nodes.len(), 2);
        assert_eq!(before.id, store.id());
        assert_eq!(before.name, "snap");
    }
}
