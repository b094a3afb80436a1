//! Assembling an evaluated program into a module record.

use crate::{eval::Evaluate, syntax::*};
use skein_syntax::{DotPath, Statement, VarName};
use std::rc::Rc;

/// A whole-program module. `body` and `imports` are filled by the
/// assembler; the remaining fields belong to the package layer and stay
/// empty here.
pub struct Module<D: Domain> {
    /// The program's result, replayed behind the module-execution protocol;
    /// the environment argument is ignored because the body has already
    /// fully evaluated.
    pub body: Rc<dyn Fn(&Env) -> D::Value>,
    /// Dotted names of every import the program declared.
    pub imports: im::OrdSet<String>,
    /// Export bindings, owned by the package layer.
    pub exports: im::HashMap<VarName, D::Value>,
    /// Package dependencies, owned by the package layer.
    pub deps: Vec<DotPath>,
}

/// Runs a closed computation to completion and harvests the statement side
/// channel into a [`Module`].
pub struct Assembler<D: Domain> {
    pub rt: Runtime<D>,
}

impl<D: Domain> Assembler<D> {
    pub fn new() -> Self {
        Assembler { rt: Runtime::new() }
    }

    pub fn run(mut self, prog: &SemAct<D>, ev: &dyn Evaluate<D>) -> Module<D> {
        let out = ev.eval(prog, &mut self.rt);
        let imports = self
            .rt
            .emitted
            .drain(..)
            .map(|stmt| match stmt {
                | Statement::Import(path) => path.dotted(),
            })
            .collect();
        let body = {
            let out = out.clone();
            Rc::new(move |_: &Env| out.clone()) as Rc<dyn Fn(&Env) -> D::Value>
        };
        Module { body, imports, exports: im::HashMap::new(), deps: Vec::new() }
    }
}

impl<D: Domain> Default for Assembler<D> {
    fn default() -> Self {
        Self::new()
    }
}
