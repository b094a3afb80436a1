//! The wire format: a JSON array of node objects with id-addressed edges.

use serde::Deserialize;
use std::fmt;

/* ------------------------------- Identifier ------------------------------- */

/// A node's id, unique within one graph. Ids are the only stable reference
/// between nodes; array order carries no meaning beyond root selection.
#[derive(Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let NodeId(id) = self;
        write!(f, "{}", id)
    }
}

/* ---------------------------------- Node ---------------------------------- */

#[derive(Deserialize, Clone, Debug)]
pub struct RawNode {
    pub id: NodeId,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
    pub attrs: Attrs,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RawEdge {
    pub sink: NodeId,
    #[serde(default)]
    pub attrs: Attrs,
}

/// Named fields of a node or an edge. A node's attrs always carry its
/// `type`; an edge's attrs may mirror data about its sink (its role type,
/// or an import component's `index`/`text`). Unrecognized fields are kept
/// for diagnostics.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct Attrs {
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub index: Option<u64>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}
