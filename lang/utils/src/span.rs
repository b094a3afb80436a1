use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
    path::{Path, PathBuf},
    sync::Arc,
};

/// A byte range in a source artifact, optionally tagged with the path it
/// came from. The node-graph wire format carries no offsets, so most spans
/// are the zero position of a whole file.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
    path: Option<Arc<PathBuf>>,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end, path: None }
    }
    pub fn dummy() -> Span {
        Span::new(0, 0)
    }
    /// Position zero of a whole file.
    pub fn head_of(path: impl Into<PathBuf>) -> Span {
        Span { start: 0, end: 0, path: Some(Arc::new(path.into())) }
    }
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref().map(PathBuf::as_path)
    }
    pub fn make<T>(&self, inner: T) -> Sp<T> {
        Sp { inner, info: self.clone() }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Span { start, end, path } = self;
        if let Some(path) = path {
            write!(f, "{}:{start}-{end}", path.display())
        } else {
            write!(f, "{start}-{end}")
        }
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// A value tagged with its source location.
#[derive(Default, Clone, Debug)]
pub struct Sp<T> {
    pub inner: T,
    pub info: Span,
}

impl<T> Sp<T> {
    #[inline]
    pub fn inner(self) -> T {
        self.inner
    }
    #[inline]
    pub fn inner_ref(&self) -> &T {
        &self.inner
    }
    pub fn map<F, U>(self, f: F) -> Sp<U>
    where
        F: FnOnce(T) -> U,
    {
        self.info.clone().make(f(self.inner))
    }
    pub fn try_map<F, U, E>(self, f: F) -> Result<Sp<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(self.info.clone().make(f(self.inner)?))
    }
}

impl<T: PartialEq> PartialEq for Sp<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq(&other.inner)
    }
}

impl<T: Eq> Eq for Sp<T> {}

impl<T: Hash> Hash for Sp<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<T: Display> Display for Sp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.inner, self.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn span_displays_with_path() {
        let span = Span::head_of("lib/main.json");
        assert_eq!(format!("{}", span), "lib/main.json:0-0");
        assert_eq!(format!("{}", Span::new(3, 7)), "3-7");
    }

    #[test]
    fn sp_compares_by_inner() {
        let a = Span::dummy().make(42);
        let b = Span::head_of("elsewhere.json").make(42);
        assert_eq!(a, b);
    }
}
