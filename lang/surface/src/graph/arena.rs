use super::syntax::NodeId;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/* ---------------------------------- Arena --------------------------------- */

/// The id-indexed map from node to resolved representation. Entries may
/// reference other entries, including themselves transitively; the parser
/// fills the table exactly once, and callers only ever read it.
///
/// The handle is shared: templates capture clones of it and dereference
/// them inside delayed closures, after the table is complete. Nothing
/// outside this crate can write to it.
pub struct NodeTable<R> {
    slots: Rc<RefCell<HashMap<NodeId, R>>>,
}

impl<R> Clone for NodeTable<R> {
    fn clone(&self) -> Self {
        NodeTable { slots: self.slots.clone() }
    }
}

impl<R: Clone> NodeTable<R> {
    pub fn new() -> Self {
        NodeTable { slots: Rc::new(RefCell::new(HashMap::new())) }
    }
    /// Fix a node's resolved representation. Resolution-time only.
    pub(crate) fn tie(&self, id: NodeId, repr: R) {
        self.slots.borrow_mut().insert(id, repr);
    }
    pub fn get(&self, id: NodeId) -> Option<R> {
        self.slots.borrow().get(&id).cloned()
    }
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl<R: Clone> Default for NodeTable<R> {
    fn default() -> Self {
        Self::new()
    }
}
