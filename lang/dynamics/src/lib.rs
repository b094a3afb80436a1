#![allow(clippy::style)]

pub mod syntax;
pub use syntax::*;
pub mod eval;
pub use eval::*;
pub mod builtin;
pub use builtin::*;
pub mod link;
pub use link::*;


pub use skein_syntax::*;
