use crate::eval::Evaluate;
use derive_more::{Deref, DerefMut, From, Into};
use skein_syntax::{Statement, VarName};
use std::{marker::PhantomData, ops::AddAssign, rc::Rc};

/* --------------------------------- Address -------------------------------- */

/// A store address, handed out by [`Store::alloc`] and never reused.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Addr(pub usize);

/* ------------------------------- Environment ------------------------------ */

/// The persistent name-to-address map. Scoping saves a copy and restores it
/// when the scope's extent ends; sharing makes the copy cheap.
#[derive(Clone, Debug, From, Into, Deref, DerefMut)]
pub struct Env(im::HashMap<VarName, Addr>);

impl Env {
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }
    pub fn addr(&self, name: &VarName) -> Option<Addr> {
        self.0.get(name).copied()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl<Iter> AddAssign<Iter> for Env
where
    Iter: IntoIterator<Item = (VarName, Addr)>,
{
    fn add_assign(&mut self, iter: Iter) {
        for (name, addr) in iter {
            self.0.insert(name, addr);
        }
    }
}

/* ---------------------------------- Store --------------------------------- */

/// The value store: allocate fresh addresses, read and write by address.
#[derive(Clone, Debug)]
pub struct Store<V> {
    cells: Vec<V>,
}

impl<V: Clone> Store<V> {
    pub fn new() -> Self {
        Store { cells: Vec::new() }
    }
    pub fn alloc(&mut self, value: V) -> Addr {
        let addr = Addr(self.cells.len());
        self.cells.push(value);
        addr
    }
    /// Addresses come only from `alloc`, so reads cannot miss.
    pub fn read(&self, addr: Addr) -> V {
        self.cells[addr.0].clone()
    }
    pub fn write(&mut self, addr: Addr, value: V) {
        self.cells[addr.0] = value;
    }
}

impl<V: Clone> Default for Store<V> {
    fn default() -> Self {
        Self::new()
    }
}

/* --------------------------------- Runtime -------------------------------- */

/// The evaluation context threaded by `&mut` through every action: the
/// environment, the store, and the statement side channel. Acquired before
/// a run, finalized after it; no global state.
pub struct Runtime<D: Domain> {
    pub env: Env,
    pub store: Store<D::Value>,
    pub emitted: Vec<Statement>,
}

impl<D: Domain> Runtime<D> {
    pub fn new() -> Self {
        Runtime { env: Env::new(), store: Store::new(), emitted: Vec::new() }
    }
    /// The statement capability: emit a structured message alongside the
    /// ordinary result, in evaluation order.
    pub fn emit(&mut self, stmt: Statement) {
        self.emitted.push(stmt);
    }
}

impl<D: Domain> Default for Runtime<D> {
    fn default() -> Self {
        Self::new()
    }
}

/* --------------------------------- Domain --------------------------------- */

/// The domain capability: abstract-value construction, branching, and the
/// two abnormal signals. A domain is a stateless policy type; anything it
/// needs at runtime lives in the [`Runtime`] it is handed.
pub trait Domain: Sized + 'static {
    type Value: Clone + std::fmt::Debug + 'static;

    fn bool(rt: &mut Runtime<Self>, b: bool) -> Self::Value;
    fn string(rt: &mut Runtime<Self>, s: &str) -> Self::Value;
    fn unit(rt: &mut Runtime<Self>) -> Self::Value;
    /// Branch on an abstract boolean between two deferred arms. The domain,
    /// not the evaluator, decides how non-concrete booleans combine.
    fn branch(
        rt: &mut Runtime<Self>, cond: Self::Value,
        then: &mut dyn FnMut(&mut Runtime<Self>) -> Self::Value,
        other: &mut dyn FnMut(&mut Runtime<Self>) -> Self::Value,
    ) -> Self::Value;
    /// Signal abnormal termination carrying a value.
    fn throw(rt: &mut Runtime<Self>, value: Self::Value) -> Self::Value;
    /// Signal a variable-not-found condition.
    fn unbound(rt: &mut Runtime<Self>, name: &VarName) -> Self::Value;
}

/* --------------------------------- Action --------------------------------- */

/// A deferred abstract-interpretation action: a syntax node as a function
/// of "how to evaluate a subnode". Nodes never call themselves; they call
/// the [`Evaluate`] callback they are given, which is closed into ordinary
/// recursion only at the boundary (see [`crate::eval::Fix`]).
pub struct SemAct<D: Domain>(pub Rc<dyn Fn(&dyn Evaluate<D>, &mut Runtime<D>) -> D::Value>);

impl<D: Domain> Clone for SemAct<D> {
    fn clone(&self) -> Self {
        SemAct(self.0.clone())
    }
}

impl<D: Domain> SemAct<D> {
    pub fn new(f: impl Fn(&dyn Evaluate<D>, &mut Runtime<D>) -> D::Value + 'static) -> Self {
        SemAct(Rc::new(f))
    }
}

/// The abstract-interpretation instantiation of the syntax capability,
/// parameterized by the domain it signals through.
pub struct Interpret<D: Domain>(PhantomData<D>);
