use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dense, zero-based node index assigned in creation order.
pub type NodeId = usize;

/// The Static View of a Flow.
///
/// `Schematic` is the immutable snapshot taken from a `GraphStore`.
/// It is the read surface for printers, visualizers and tests; later
/// mutations of the store never show up in an existing snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schematic<N, E> {
    pub id: Uuid,
    pub name: String,
    pub nodes: Vec<Node<N>>,
    pub edges: Vec<Edge<E>>,
}

impl<N, E> Schematic<N, E> {
    /// Edges leaving `id`, in creation order.
    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = &Edge<E>> {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Edges entering `id`, in creation order.
    pub fn edges_to(&self, id: NodeId) -> impl Iterator<Item = &Edge<E>> {
        self.edges.iter().filter(move |e| e.to == id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<N>> {
        self.nodes.get(id)
    }
}

impl<N: Serialize, E: Serialize> Schematic<N, E> {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<N> {
    pub id: NodeId,
    pub payload: N,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<E> {
    pub from: NodeId,
    pub to: NodeId,
    pub payload: Option<E>, // None for plain sequencing
}

impl<E> Edge<E> {
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schematic<&'static str, u64> {
        Schematic {
            id: Uuid::nil(),
            name: "sample".to_string(),
            nodes: vec![
                Node { id: 0, payload: "a" },
                Node { id: 1, payload: "b" },
                Node { id: 2, payload: "c" },
            ],
            edges: vec![
                Edge { from: 0, to: 1, payload: None },
                Edge { from: 0, to: 2, payload: Some(5) },
            ],
        }
    }

    #[test]
    fn test_edges_from_and_to() {
        let schematic = sample();
        let out: Vec<_> = schematic.edges_from(0).map(|e| e.to).collect();
        assert_eq!(out, vec![1, 2]);
        assert_eq!(schematic.edges_to(2).count(), 1);
        assert_eq!(schematic.edges_from(2).count(), 0);
        assert_eq!(schematic.node(1).map(|n| n.payload), Some("b"));
    }

    #[test]
    fn test_to_json() {
        let json = sample().to_json();
        assert_eq!(json["name"], "sample");
        assert_eq!(json["nodes"][2], serde_json::json!({ "id": 2, "payload": "c" }));
        assert_eq!(
            json["edges"][1],
            serde_json::json!({ "from": 0, "to": 2, "payload": 5 })
        );
        assert_eq!(json["edges"][0]["payload"], serde_json::Value::Null);
    }
}
