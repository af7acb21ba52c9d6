//! Config field path used to point diagnostics at a location in `docsite.toml`.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A dotted path to a config field, e.g. `theme.sidebar[1].items[0].link`.
///
/// Static paths are built with [`FieldPath::new`] in const context;
/// array entries are addressed with [`FieldPath::index`] and
/// [`FieldPath::field`].
///
/// # Example
///
/// ```ignore
/// const TITLE: FieldPath = FieldPath::new("site.title");
/// let link = FieldPath::new("theme.nav").index(2).field("link");
/// assert_eq!(link.as_str(), "theme.nav[2].link");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Address an element of the array at this path.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    /// Address a named field below this path.
    pub fn field(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path() {
        let path = FieldPath::new("theme.sidebar")
            .index(1)
            .field("items")
            .index(0)
            .field("link");
        assert_eq!(path.as_str(), "theme.sidebar[1].items[0].link");
    }

    #[test]
    fn test_static_path_is_borrowed() {
        const TITLE: FieldPath = FieldPath::new("site.title");
        assert_eq!(TITLE.as_str(), "site.title");
        assert!(matches!(TITLE.0, Cow::Borrowed(_)));
    }
}
