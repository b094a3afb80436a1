use super::syntax::{Attrs, NodeId, RawEdge};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Malformed node graph: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate node id {0}")]
    DuplicateNode(NodeId),
    #[error("Edge of node {src} points to missing node {sink}")]
    DanglingEdge { src: NodeId, sink: NodeId },
    #[error("Node {id} has no type attribute")]
    MissingType { id: NodeId },
    #[error("Node {id} (`{ty}`) needs attribute `{field}`")]
    MissingAttr { id: NodeId, ty: String, field: &'static str },
    #[error("Node {id} (`{ty}`) requires at least one edge")]
    MissingEdge { id: NodeId, ty: String },
    #[error("Import node {id} has no components")]
    EmptyImport { id: NodeId },
    #[error("Import node {src}: component edge to node {sink} lacks `{field}`")]
    ImportComponent { src: NodeId, sink: NodeId, field: &'static str },
    #[error("Unknown node type `{ty}` at node {id}: attrs {attrs:?}, edges {edges:?}")]
    UnknownType { id: NodeId, ty: String, attrs: Attrs, edges: Vec<RawEdge> },
    #[error("no root node found")]
    NoRoot,
}

pub type Result<T> = std::result::Result<T, GraphError>;
