use crate::schematic::NodeId;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {id} does not exist (store holds {node_count} nodes)")]
    InvalidReference { id: NodeId, node_count: usize },
}
