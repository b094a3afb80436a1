pub mod fmt;
pub use fmt::*;

mod impls;

use derive_more::From;
use std::rc::Rc;

/* --------------------------------- Binder --------------------------------- */

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarName(pub String);

impl VarName {
    /// A compiler-made name derived from a statement's position in its
    /// sequence; `%`-prefixed so it cannot collide with source names.
    pub fn synthetic(idx: usize) -> Self {
        VarName(format!("%{idx}"))
    }
}

/// A dotted module path, `a.b.c`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DotPath(pub Vec<String>);

impl DotPath {
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

/* -------------------------------- Statement ------------------------------- */

/// A structured message emitted on the statement side channel during
/// evaluation, alongside the ordinary result.
#[derive(From, Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Import(DotPath),
}

/* ------------------------------- Capability ------------------------------- */

/// The fixed vocabulary of syntax forms, parameterized by an opaque
/// representation. Every interpretation implements all eight forms; none has
/// a default, so omission fails at compile time.
pub trait Syntax {
    type Repr: Clone + 'static;

    /// Reference a bound variable.
    fn var(name: VarName) -> Self::Repr;
    /// Conditional. The branches are representations, not thunks; laziness,
    /// if any, is the interpretation's business.
    fn iff(cond: Self::Repr, then: Self::Repr, other: Self::Repr) -> Self::Repr;
    /// A no-effect, no-value unit expression; the empty-sequence identity
    /// and the parse fallback.
    fn noop() -> Self::Repr;
    fn bool(b: bool) -> Self::Repr;
    fn string(s: String) -> Self::Repr;
    /// Abnormal termination carrying an evaluated representation.
    fn throw(e: Self::Repr) -> Self::Repr;
    /// Bind `name` to `value`'s result for the extent of `body`. The body
    /// maps a representation of the bound occurrence to the continuation,
    /// so scoping needs no substitution.
    fn let_(
        name: VarName, value: Self::Repr, body: Box<dyn Fn(Self::Repr) -> Self::Repr>,
    ) -> Self::Repr;
    /// Declare a dotted module path.
    fn import(path: DotPath) -> Self::Repr;
}

/// Deferred construction of a representation. The graph parser routes every
/// cross-node reference through `delay`, so resolving the node table touches
/// ids only and cyclic edges never force one another.
pub trait Delay: Syntax {
    fn delay(thunk: Rc<dyn Fn() -> Self::Repr>) -> Self::Repr;
}
