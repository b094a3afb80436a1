//! The surface of skein: programs arrive as a graph-encoded AST and leave
//! as representations of the syntax capability, with no concrete tree in
//! between.

pub mod graph {
    /// Wire types for the JSON node graph.
    pub mod syntax;
    pub use syntax::*;
    /// The resolved node table.
    pub mod arena;
    pub use arena::*;
    /// Node dispatch and tie-the-knot resolution.
    pub mod parse;
    pub use parse::*;
    /// Parse error definitions.
    pub mod err;
    pub use err::*;

    #[cfg(test)]
    mod tests;
}
