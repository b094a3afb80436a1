//! A minimal front end for skein node-graph programs: read a file, parse it
//! under some interpretation of the syntax capability, and hand the caller
//! either rendered text or an assembled module.

pub mod conf;
pub mod err;

pub use conf::Conf;
pub use err::*;


use skein_dynamics::{Assembler, Domain, Evaluate, Interpret, Module};
use skein_surface::graph::{self, Graph, GraphError};
use skein_syntax::{Delay, Print};
use skein_utils::span::{Sp, Span};
use std::path::PathBuf;

/* -------------------------------- Pipeline -------------------------------- */

/// A source file before any work is done on it.
pub struct File {
    pub path: PathBuf,
}

impl File {
    pub fn load(self) -> Result<FileLoaded> {
        let File { path } = self;
        log::debug!("loading `{}`", path.display());
        let source = std::fs::read_to_string(&path)?;
        Ok(FileLoaded { path, source })
    }
}

pub struct FileLoaded {
    pub path: PathBuf,
    pub source: String,
}

impl FileLoaded {
    pub fn parse<S: Delay>(&self) -> Result<FileParsed<S::Repr>> {
        log::debug!("parsing `{}`", self.path.display());
        let graph = graph::parse_str::<S>(&self.source)?;
        Ok(FileParsed { path: self.path.clone(), graph })
    }
}

pub struct FileParsed<R> {
    pub path: PathBuf,
    pub graph: Graph<R>,
}

impl<R: Clone> FileParsed<R> {
    /// The program root, tagged with the originating path at position zero.
    pub fn root(&self) -> Result<Sp<R>> {
        let repr = self.graph.root.clone().ok_or(GraphError::NoRoot)?;
        Ok(Span::head_of(&self.path).make(repr))
    }
}

/* ------------------------------ Entry points ------------------------------ */

/// Parse a file under any interpretation of the syntax capability.
pub fn parse_file<S: Delay>(path: impl Into<PathBuf>) -> Result<Sp<S::Repr>> {
    File { path: path.into() }.load()?.parse::<S>()?.root()
}

/// Render a file through the textual interpretation.
pub fn print_file(path: impl Into<PathBuf>) -> Result<String> {
    let root = parse_file::<Print>(path)?;
    Ok(root.inner().render())
}

/// Evaluate a file under the given evaluator and assemble the resulting
/// module.
pub fn interp_file<D: Domain>(
    path: impl Into<PathBuf>, ev: &dyn Evaluate<D>,
) -> Result<Sp<Module<D>>> {
    let root = parse_file::<Interpret<D>>(path)?;
    log::debug!("assembling module for `{}`", root.info);
    Ok(root.map(|prog| Assembler::new().run(&prog, ev)))
}
