use std::fmt;

/// The location of a node inside a question tree, e.g. `"toppings.extras.allergies"`.
///
/// Paths only exist for diagnostics: errors and log events name the offending
/// node by its path. Answers themselves are stored under plain names, scoped by
/// the composite that owns them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    /// Dot-separated path string, e.g. "toppings.extras".
    path: String,
}

impl NodePath {
    /// Create a new path from a dot-separated string.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the tree root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Append a named child segment to this path, returning a new path.
    pub fn child(&self, name: &str) -> Self {
        if name.is_empty() {
            self.clone()
        } else if self.path.is_empty() {
            Self::new(name)
        } else {
            Self::new(format!("{}.{}", self.path, name))
        }
    }

    /// Path of the `index`-th sibling, using its name when it has one.
    ///
    /// Unnamed nodes (display nodes, mostly) are addressed as `#index`.
    pub fn node(&self, name: Option<&str>, index: usize) -> Self {
        match name {
            Some(name) if !name.is_empty() => self.child(name),
            _ => self.child(&format!("#{index}")),
        }
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Get the segments of this path as an iterator.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.').filter(|s| !s.is_empty())
    }

    /// Nesting depth of the node (number of segments).
    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>")
        } else {
            write!(f, "{}", self.path)
        }
    }
}

impl From<&str> for NodePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NodePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child() {
        let path = NodePath::new("toppings").child("extras");
        assert_eq!(path.as_str(), "toppings.extras");
    }

    #[test]
    fn child_from_root() {
        let path = NodePath::root().child("burger");
        assert_eq!(path.as_str(), "burger");
    }

    #[test]
    fn unnamed_node_uses_index() {
        let path = NodePath::new("intro").node(None, 2);
        assert_eq!(path.as_str(), "intro.#2");

        let named = NodePath::root().node(Some("books"), 5);
        assert_eq!(named.as_str(), "books");
    }

    #[test]
    fn segments_and_depth() {
        let path = NodePath::new("toppings.extras.allergies");
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, vec!["toppings", "extras", "allergies"]);
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn display() {
        assert_eq!(NodePath::new("a.b").to_string(), "a.b");
        assert_eq!(NodePath::root().to_string(), "<root>");
    }
}
