//! The [`Tree`] value type.

use super::position::Position;
use crate::error::{Error, Result};
use std::fmt;

/// A finite, rooted, ordered tree.
///
/// Every node carries a payload of type `T` and a kind tag of type `K`.
/// The kind tag is independent of the payload; typed grammars use it to
/// restrict sampling to, say, boolean-valued or numeric subtrees. Untyped
/// trees leave it as `()`.
///
/// A tree owns its children outright. Cloning is a full deep copy, and
/// every operation that moves a subtree from one tree into another either
/// clones it or moves an owned value, so two trees never share structure.
///
/// ```
/// use u_treegp::tree::{Position, Tree};
///
/// let mut t: Tree<&str> = Tree::with_children("plus", vec![Tree::new("x"), Tree::new("one")]);
/// assert_eq!(t.to_string(), "plus(x(),one(),)");
///
/// t.replace(&Position::from(vec![1]), &Tree::new("x")).unwrap();
/// assert_eq!(t.to_string(), "plus(x(),x(),)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree<T, K = ()> {
    node: T,
    kind: K,
    children: Vec<Tree<T, K>>,
}

impl<T, K: Default> Tree<T, K> {
    /// Creates a leaf with the default kind.
    pub fn new(node: T) -> Self {
        Self::typed(node, K::default())
    }

    /// Creates a node with the default kind and the given children.
    pub fn with_children(node: T, children: Vec<Tree<T, K>>) -> Self {
        Self::typed_with_children(node, K::default(), children)
    }
}

impl<T, K> Tree<T, K> {
    /// Creates a leaf tagged with `kind`.
    pub fn typed(node: T, kind: K) -> Self {
        Self {
            node,
            kind,
            children: Vec::new(),
        }
    }

    pub fn typed_with_children(node: T, kind: K, children: Vec<Tree<T, K>>) -> Self {
        Self {
            node,
            kind,
            children,
        }
    }

    /// Appends `child` as the last child of this node.
    pub fn add_child(&mut self, child: Tree<T, K>) {
        self.children.push(child);
    }

    /// Builder form of [`add_child`](Self::add_child).
    pub fn child(mut self, child: Tree<T, K>) -> Self {
        self.children.push(child);
        self
    }

    pub fn node(&self) -> &T {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut T {
        &mut self.node
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Immediate children, in insertion order.
    pub fn children(&self) -> &[Tree<T, K>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, root included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Tree::size).sum::<usize>()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Tree::depth).max().unwrap_or(0)
    }

    /// Returns the subtree at `position`.
    ///
    /// The root position returns `self`.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if any index along the path exceeds the
    /// number of children at that level.
    pub fn get_subtree(&self, position: &Position) -> Result<&Self> {
        let mut current = self;
        for (depth, &index) in position.indices().iter().enumerate() {
            let len = current.children.len();
            current = current
                .children
                .get(index)
                .ok_or_else(|| out_of_bounds(position, depth, index, len))?;
        }
        Ok(current)
    }

    /// Mutable counterpart of [`get_subtree`](Self::get_subtree).
    ///
    /// # Errors
    /// Same as [`get_subtree`](Self::get_subtree).
    pub fn get_subtree_mut(&mut self, position: &Position) -> Result<&mut Self> {
        let mut current = self;
        for (depth, &index) in position.indices().iter().enumerate() {
            let len = current.children.len();
            current = current
                .children
                .get_mut(index)
                .ok_or_else(|| out_of_bounds(position, depth, index, len))?;
        }
        Ok(current)
    }

    /// Installs `subtree` at `position` and returns the subtree it displaced.
    ///
    /// At the root position the whole tree is swapped out: payload, kind
    /// and children all come from `subtree`.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] as for [`get_subtree`](Self::get_subtree);
    /// the tree is left untouched in that case.
    pub fn put(&mut self, position: &Position, subtree: Tree<T, K>) -> Result<Self> {
        let slot = self.get_subtree_mut(position)?;
        Ok(std::mem::replace(slot, subtree))
    }

    /// Visits every node in pre-order: the node itself, then each child
    /// subtree from left to right.
    ///
    /// The visitor receives the node and its position. The order is exact
    /// and deterministic for a given tree.
    pub fn visit<F>(&self, mut visitor: F)
    where
        F: FnMut(&Tree<T, K>, &Position),
    {
        let mut position = Position::root();
        self.accept(&mut position, &mut visitor);
    }

    fn accept<F>(&self, position: &mut Position, visitor: &mut F)
    where
        F: FnMut(&Tree<T, K>, &Position),
    {
        visitor(self, position);
        for (i, child) in self.children.iter().enumerate() {
            position.push(i);
            child.accept(position, visitor);
            position.pop();
        }
    }
}

impl<T: Clone, K: Clone> Tree<T, K> {
    /// Replaces the subtree at `position` with a deep copy of `newtree`.
    ///
    /// `newtree` is never linked into `self`: later edits to either tree
    /// do not show up in the other.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] as for [`get_subtree`](Self::get_subtree).
    pub fn replace(&mut self, position: &Position, newtree: &Tree<T, K>) -> Result<()> {
        self.put(position, newtree.clone())?;
        Ok(())
    }
}

fn out_of_bounds(position: &Position, depth: usize, index: usize, len: usize) -> Error {
    Error::OutOfBounds {
        position: position.to_string(),
        depth,
        index,
        len,
    }
}

/// Renders `payload(child,child,)`. The format carries no meaning beyond
/// showing the shape.
impl<T: fmt::Display, K> fmt::Display for Tree<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.node)?;
        for child in &self.children {
            write!(f, "{child},")?;
        }
        f.write_str(")")
    }
}
