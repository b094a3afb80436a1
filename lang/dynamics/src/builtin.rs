//! The built-in abstract domain.

use crate::syntax::{Domain, Runtime};
use skein_syntax::VarName;

/// Abstract values over a flat join-semilattice: concrete booleans and
/// strings at the bottom, `Any` at the top, with thrown values and unbound
/// variables carried as ordinary (tainting) values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbsVal {
    Unit,
    Bool(bool),
    Str(String),
    /// The join of disagreeing branches.
    Any,
    Thrown(Box<AbsVal>),
    Undefined(VarName),
}

impl AbsVal {
    pub fn join(self, other: AbsVal) -> AbsVal {
        if self == other { self } else { AbsVal::Any }
    }
}

/// The default domain: branch on a known boolean takes one arm; anything
/// else runs both arms and joins. Thrown values do not short-circuit
/// sequencing; they taint whatever consumes them.
pub struct BaseDomain;

impl Domain for BaseDomain {
    type Value = AbsVal;

    fn bool(_rt: &mut Runtime<Self>, b: bool) -> AbsVal {
        AbsVal::Bool(b)
    }
    fn string(_rt: &mut Runtime<Self>, s: &str) -> AbsVal {
        AbsVal::Str(s.to_string())
    }
    fn unit(_rt: &mut Runtime<Self>) -> AbsVal {
        AbsVal::Unit
    }
    fn branch(
        rt: &mut Runtime<Self>, cond: AbsVal,
        then: &mut dyn FnMut(&mut Runtime<Self>) -> AbsVal,
        other: &mut dyn FnMut(&mut Runtime<Self>) -> AbsVal,
    ) -> AbsVal {
        match cond {
            | AbsVal::Bool(true) => then(rt),
            | AbsVal::Bool(false) => other(rt),
            | AbsVal::Thrown(_) => cond,
            | _ => {
                let taken = then(rt);
                let skipped = other(rt);
                taken.join(skipped)
            }
        }
    }
    fn throw(_rt: &mut Runtime<Self>, value: AbsVal) -> AbsVal {
        AbsVal::Thrown(Box::new(value))
    }
    fn unbound(_rt: &mut Runtime<Self>, name: &VarName) -> AbsVal {
        AbsVal::Undefined(name.clone())
    }
}
