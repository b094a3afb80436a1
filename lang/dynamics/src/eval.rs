use crate::syntax::*;
use skein_syntax::{Delay, DotPath, Statement, Syntax, VarName};
use std::{cell::Cell, rc::Rc};

/* -------------------------------- Evaluate -------------------------------- */

/// The open-recursion seam: how a subnode gets evaluated. An action never
/// decides this for itself; whoever closes the loop does. Supplying a
/// different implementer changes the evaluation strategy for every node at
/// once without touching any node definition.
pub trait Evaluate<D: Domain> {
    fn eval(&self, act: &SemAct<D>, rt: &mut Runtime<D>) -> D::Value;
}

/// Ordinary closed recursion: the evaluator fed to itself, once, here.
pub struct Fix;

impl<D: Domain> Evaluate<D> for Fix {
    fn eval(&self, act: &SemAct<D>, rt: &mut Runtime<D>) -> D::Value {
        (act.0)(self, rt)
    }
}

/// A step-limited self-application. Burns one unit per node evaluation and,
/// once dry, signals exhaustion through the domain instead of recursing,
/// so cyclic programs terminate.
pub struct Fuel {
    tank: Cell<u64>,
}

impl Fuel {
    pub fn new(limit: u64) -> Self {
        Fuel { tank: Cell::new(limit) }
    }
    pub fn left(&self) -> u64 {
        self.tank.get()
    }
}

impl<D: Domain> Evaluate<D> for Fuel {
    fn eval(&self, act: &SemAct<D>, rt: &mut Runtime<D>) -> D::Value {
        let left = self.tank.get();
        if left == 0 {
            log::trace!("evaluation ran out of fuel");
            let msg = D::string(rt, "fuel exhausted");
            return D::throw(rt, msg);
        }
        self.tank.set(left - 1);
        (act.0)(self, rt)
    }
}

/* -------------------------------- Interpret ------------------------------- */

impl<D: Domain> Syntax for Interpret<D> {
    type Repr = SemAct<D>;

    fn var(name: VarName) -> SemAct<D> {
        SemAct::new(move |_ev, rt| match rt.env.addr(&name) {
            | Some(addr) => rt.store.read(addr),
            | None => D::unbound(rt, &name),
        })
    }

    fn iff(cond: SemAct<D>, then: SemAct<D>, other: SemAct<D>) -> SemAct<D> {
        SemAct::new(move |ev, rt| {
            let scrut = ev.eval(&cond, rt);
            D::branch(
                rt,
                scrut,
                &mut |rt| ev.eval(&then, rt),
                &mut |rt| ev.eval(&other, rt),
            )
        })
    }

    fn noop() -> SemAct<D> {
        SemAct::new(|_ev, rt| D::unit(rt))
    }

    fn bool(b: bool) -> SemAct<D> {
        SemAct::new(move |_ev, rt| D::bool(rt, b))
    }

    fn string(s: String) -> SemAct<D> {
        SemAct::new(move |_ev, rt| D::string(rt, &s))
    }

    fn throw(e: SemAct<D>) -> SemAct<D> {
        SemAct::new(move |ev, rt| {
            let value = ev.eval(&e, rt);
            D::throw(rt, value)
        })
    }

    /// Call-by-value with single evaluation: the bindee runs once, its
    /// result is stored at a fresh address, and the representation handed
    /// to the body replays that result without re-running the bindee.
    fn let_(
        name: VarName, value: SemAct<D>, body: Box<dyn Fn(SemAct<D>) -> SemAct<D>>,
    ) -> SemAct<D> {
        SemAct::new(move |ev, rt| {
            let computed = ev.eval(&value, rt);
            let addr = rt.store.alloc(computed.clone());
            let saved = rt.env.clone();
            rt.env += [(name.clone(), addr)];
            let replay = {
                let computed = computed.clone();
                SemAct::new(move |_ev, _rt| computed.clone())
            };
            let tail = body(replay);
            let out = ev.eval(&tail, rt);
            rt.env = saved;
            out
        })
    }

    fn import(path: DotPath) -> SemAct<D> {
        SemAct::new(move |_ev, rt| {
            rt.emit(Statement::Import(path.clone()));
            D::unit(rt)
        })
    }
}

impl<D: Domain> Delay for Interpret<D> {
    fn delay(thunk: Rc<dyn Fn() -> SemAct<D>>) -> SemAct<D> {
        SemAct::new(move |ev, rt| {
            let act = thunk();
            ev.eval(&act, rt)
        })
    }
}
