//! Child-index paths into a [`Tree`](super::Tree).

use std::fmt;

/// Path from a tree's root to one of its nodes.
///
/// Each entry is a child index: `[0, 2]` means "first child of the root,
/// then that node's third child". The empty path addresses the root.
///
/// A position is only meaningful for the tree snapshot it was computed
/// on. Any structural edit of that tree may invalidate it.
///
/// ```
/// use u_treegp::tree::Position;
///
/// let p = Position::root().child(0).child(2);
/// assert_eq!(p.indices(), &[0, 2]);
/// assert_eq!(p.to_string(), "/0/2");
/// assert!(Position::root().is_prefix_of(&p));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position(Vec<usize>);

impl Position {
    /// The empty path, addressing the root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges between the root and the addressed node.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Returns a new position one level deeper, at child `index`.
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    /// Position of the parent node, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, head) = self.0.split_last()?;
        Some(Self(head.to_vec()))
    }

    /// `true` if `self` addresses `other` or one of its ancestors.
    pub fn is_prefix_of(&self, other: &Position) -> bool {
        other.0.starts_with(&self.0)
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl From<Vec<usize>> for Position {
    fn from(path: Vec<usize>) -> Self {
        Self(path)
    }
}

impl From<&[usize]> for Position {
    fn from(path: &[usize]) -> Self {
        Self(path.to_vec())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}
