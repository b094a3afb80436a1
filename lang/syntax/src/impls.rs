use crate::*;
use std::fmt;

impl<T: AsRef<str>> From<T> for VarName {
    fn from(name: T) -> Self {
        VarName(name.as_ref().to_string())
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let VarName(name) = self;
        write!(f, "{}", name)
    }
}

impl FromIterator<String> for DotPath {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        DotPath(iter.into_iter().collect())
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dotted())
    }
}
