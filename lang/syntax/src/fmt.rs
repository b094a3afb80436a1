//! The textual interpretation of the syntax capability.

use crate::{Delay, DotPath, Syntax, VarName};
use std::{ops::Add, rc::Rc};

/* ---------------------------------- Text ---------------------------------- */

/// An append-only rope: a suspended "write yourself into this buffer"
/// action. Appends are O(1) closure composition; `render` is the single
/// O(n) materialization.
#[derive(Clone)]
pub struct Text(Rc<dyn Fn(&mut String)>);

impl Text {
    pub fn lit(s: impl Into<String>) -> Text {
        let s = s.into();
        Text(Rc::new(move |buf| buf.push_str(&s)))
    }
    pub fn render(&self) -> String {
        let mut buf = String::new();
        (self.0)(&mut buf);
        buf
    }
}

impl Add for Text {
    type Output = Text;
    fn add(self, rhs: Text) -> Text {
        Text(Rc::new(move |buf| {
            (self.0)(buf);
            (rhs.0)(buf)
        }))
    }
}

/* ---------------------------------- Print --------------------------------- */

/// The pretty-printing interpretation. Output is canonical and fully
/// delimited; a golden-test serialization, not a parser input format.
pub struct Print;

impl Syntax for Print {
    type Repr = Text;

    fn var(name: VarName) -> Text {
        Text::lit(format!("get {}", name))
    }
    fn iff(cond: Text, then: Text, other: Text) -> Text {
        Text::lit("(iff ") + cond + Text::lit(" then ") + then + Text::lit(" else ") + other
            + Text::lit(")")
    }
    fn noop() -> Text {
        Text::lit("(noop)")
    }
    fn bool(b: bool) -> Text {
        Text::lit(if b { "(true)" } else { "(false)" })
    }
    fn string(s: String) -> Text {
        // no escaping
        Text::lit(format!("({s})"))
    }
    fn throw(e: Text) -> Text {
        Text::lit("(throw ") + e + Text::lit(")")
    }
    fn let_(name: VarName, value: Text, body: Box<dyn Fn(Text) -> Text>) -> Text {
        let shown = name.to_string();
        Text::lit(format!("(let {shown} = "))
            + value
            + Text::lit(" in ")
            + body(Text::lit(shown))
            + Text::lit(")")
    }
    fn import(path: DotPath) -> Text {
        Text::lit(path.dotted())
    }
}

impl Delay for Print {
    fn delay(thunk: Rc<dyn Fn() -> Text>) -> Text {
        Text(Rc::new(move |buf| (thunk().0)(buf)))
    }
}
