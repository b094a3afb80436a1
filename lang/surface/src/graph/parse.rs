//! Decoding a node graph into representations of the syntax capability.
//!
//! Parsing is two-phase. Phase one turns every node into a [`Template`], a
//! build step that only mentions other nodes by id. Phase two applies each
//! template once against a shared [`NodeTable`] handle; cross-node
//! references go through [`Delay::delay`], so the handle is dereferenced at
//! evaluation time, never during resolution. Forward and cyclic edges are
//! therefore safe, and no template ever forces another.

use super::{arena::NodeTable, err::*, syntax::*};
use skein_syntax::{Delay, DotPath, Syntax, VarName};
use std::{collections::HashMap, rc::Rc};

/// One parsed graph: the fully-tied table, and the representation of the
/// first `module` node in array order, if any.
pub struct Graph<R> {
    pub table: NodeTable<R>,
    pub root: Option<R>,
}

impl<R> std::fmt::Debug for Graph<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph").field("root", &self.root.is_some()).finish_non_exhaustive()
    }
}

/// A deferred build step, applied exactly once to the shared table handle.
type Template<R> = Box<dyn FnOnce(&NodeTable<R>) -> R>;

pub fn parse_str<S: Delay>(src: &str) -> Result<Graph<S::Repr>> {
    let nodes: Vec<RawNode> = serde_json::from_str(src)?;
    parse_graph::<S>(nodes)
}

pub fn parse_graph<S: Delay>(nodes: Vec<RawNode>) -> Result<Graph<S::Repr>> {
    // id uniqueness and sink existence are checked up front, so the delayed
    // lookups built below cannot miss
    let mut attrs_of = HashMap::new();
    for node in &nodes {
        if attrs_of.insert(node.id, node.attrs.clone()).is_some() {
            return Err(GraphError::DuplicateNode(node.id));
        }
    }
    for node in &nodes {
        for edge in &node.edges {
            if !attrs_of.contains_key(&edge.sink) {
                return Err(GraphError::DanglingEdge { src: node.id, sink: edge.sink });
            }
        }
    }

    let mut root = None;
    let mut pending = Vec::with_capacity(nodes.len());
    for node in nodes {
        let id = node.id;
        let (tpl, is_root) = parse_node::<S>(node, &attrs_of)?;
        if is_root && root.is_none() {
            root = Some(id);
        }
        pending.push((id, tpl));
    }

    // templates reference ids only, so application order is irrelevant
    let table = NodeTable::new();
    for (id, tpl) in pending {
        let repr = tpl(&table);
        table.tie(id, repr);
    }
    let root = root.map(|id| table.get(id).expect("root was parsed into the table"));
    Ok(Graph { table, root })
}

/// Parse one node into its template. The second component marks a root
/// candidate: exactly the nodes whose type is `module`.
fn parse_node<S: Delay>(
    node: RawNode, attrs_of: &HashMap<NodeId, Attrs>,
) -> Result<(Template<S::Repr>, bool)> {
    let RawNode { id, edges, attrs } = node;
    let ty = attrs.ty.clone().ok_or(GraphError::MissingType { id })?;
    let is_root = ty == "module";
    let tpl = parse_type::<S>(id, attrs, edges, ty, attrs_of)?;
    Ok((tpl, is_root))
}

fn parse_type<S: Delay>(
    id: NodeId, attrs: Attrs, edges: Vec<RawEdge>, ty: String, attrs_of: &HashMap<NodeId, Attrs>,
) -> Result<Template<S::Repr>> {
    let tpl: Template<S::Repr> = match ty.as_str() {
        | "string" => {
            let text = take_text(id, &ty, &attrs)?;
            Box::new(move |_| S::string(text))
        }
        | "true" => Box::new(|_| S::bool(true)),
        | "false" => Box::new(|_| S::bool(false)),
        | "throw" => {
            let head =
                edges.first().ok_or_else(|| GraphError::MissingEdge { id, ty: ty.clone() })?;
            let sink = head.sink;
            Box::new(move |table| S::throw(resolve::<S>(table, sink)))
        }
        | "if" => {
            let cond = find_edge_named(&edges, "condition", attrs_of);
            let cons = find_edge_named(&edges, "consequence", attrs_of);
            let alt = find_edge_named(&edges, "alternative", attrs_of);
            match (cond, cons, alt) {
                | (Some(cond), Some(cons), Some(alt)) => Box::new(move |table| {
                    S::iff(
                        resolve::<S>(table, cond),
                        resolve::<S>(table, cons),
                        resolve::<S>(table, alt),
                    )
                }),
                // all or nothing: a partial conditional degrades to a no-op
                | _ => Box::new(|_| S::noop()),
            }
        }
        | "block" | "module" => children::<S>(edges),
        | "identifier" => {
            let text = take_text(id, &ty, &attrs)?;
            Box::new(move |_| S::var(VarName(text)))
        }
        | "import" => {
            if edges.is_empty() {
                return Err(GraphError::EmptyImport { id });
            }
            let mut parts = edges
                .iter()
                .map(|edge| import_component(id, edge, attrs_of))
                .collect::<Result<Vec<_>>>()?;
            // stable sort: duplicate indices keep edge order
            parts.sort_by_key(|&(index, _)| index);
            let path = parts.into_iter().map(|(_, text)| text).collect::<DotPath>();
            Box::new(move |_| S::import(path))
        }
        | _ => return Err(GraphError::UnknownType { id, ty: ty.clone(), attrs, edges }),
    };
    Ok(tpl)
}

/// Ordered statement children: fold right-to-left with a noop terminal, so
/// the first edge's binding is the outermost wrapper and statements run in
/// list order.
fn children<S: Delay>(edges: Vec<RawEdge>) -> Template<S::Repr> {
    Box::new(move |table| {
        let mut seq = S::noop();
        for (idx, edge) in edges.iter().enumerate().rev() {
            seq = chain::<S>(idx, resolve::<S>(table, edge.sink), seq);
        }
        seq
    })
}

/// Each statement in a sequence is let-bound under a position-derived name,
/// so its effects land before the rest of the sequence runs.
fn chain<S: Syntax>(idx: usize, stmt: S::Repr, rest: S::Repr) -> S::Repr {
    S::let_(VarName::synthetic(idx), stmt, Box::new(move |_| rest.clone()))
}

/// First edge whose sink declares the expected type. The role is read
/// through the edge's own attrs where present, with the sink node's attrs
/// as the fallback.
fn find_edge_named(
    edges: &[RawEdge], expected: &str, attrs_of: &HashMap<NodeId, Attrs>,
) -> Option<NodeId> {
    edges
        .iter()
        .find(|edge| {
            let declared = edge
                .attrs
                .ty
                .as_deref()
                .or_else(|| attrs_of.get(&edge.sink).and_then(|attrs| attrs.ty.as_deref()));
            declared == Some(expected)
        })
        .map(|edge| edge.sink)
}

/// An import component's `(index, text)`, read from the edge's own attrs
/// where present and from the sink node's attrs otherwise.
fn import_component(
    src: NodeId, edge: &RawEdge, attrs_of: &HashMap<NodeId, Attrs>,
) -> Result<(u64, String)> {
    let sink_attrs = attrs_of.get(&edge.sink);
    let index = edge
        .attrs
        .index
        .or_else(|| sink_attrs.and_then(|attrs| attrs.index))
        .ok_or(GraphError::ImportComponent { src, sink: edge.sink, field: "index" })?;
    let text = edge
        .attrs
        .text
        .clone()
        .or_else(|| sink_attrs.and_then(|attrs| attrs.text.clone()))
        .ok_or(GraphError::ImportComponent { src, sink: edge.sink, field: "text" })?;
    Ok((index, text))
}

/// A deferred table lookup. Referencing a node captures its id and a table
/// handle only; the entry is read when the representation is evaluated.
fn resolve<S: Delay>(table: &NodeTable<S::Repr>, sink: NodeId) -> S::Repr {
    let table = table.clone();
    S::delay(Rc::new(move || table.get(sink).expect("sinks are validated before resolution")))
}

fn take_text(id: NodeId, ty: &str, attrs: &Attrs) -> Result<String> {
    attrs
        .text
        .clone()
        .ok_or_else(|| GraphError::MissingAttr { id, ty: ty.to_string(), field: "text" })
}
