//! Region quadtree storing a value for every position in a square.
//!
//! Large areas with a uniform value are stored as a single leaf. Writing a
//! different value into a leaf splits it into four quadrants (splitting each
//! axis at the floored midpoint of its range), and a write that leaves every
//! non-trivial quadrant of a branch holding the same value merges that branch
//! back into a leaf. Since a square with an odd side length does not split
//! evenly, some quadrants may have zero width or height. These _trivial_
//! quadrants contain no positions, so they are ignored when deciding whether
//! to merge.
//!
//! Merging only happens along the path of a write; there is no background
//! compaction.

use std::fmt;
use thiserror::Error;

mod node;

use crate::cells::CellState;
use crate::rect::Rect2;
use crate::vec2::IVec2;
pub use node::Node;

/// Result type returned by fallible quadtree routines.
pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

/// Error encountered when accessing a quadtree.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum QuadtreeError {
    #[error("position {pos} is out of range for quadtree covering {rect}")]
    OutOfRange { pos: IVec2, rect: Rect2 },
}

/// Region quadtree covering `[0, size) × [0, size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadtree<T = CellState> {
    root: Node<T>,
}

impl<T: Clone + PartialEq + fmt::Display> fmt::Display for Quadtree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn fmt_node<T: Clone + PartialEq + fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            node: &Node<T>,
            indent: usize,
        ) -> fmt::Result {
            write!(f, "{:indent$}", "", indent = indent * 2)?;
            match node {
                Node::Leaf { rect, value } => writeln!(f, "Leaf {} = {}", rect, value),
                Node::Branch { rect, children } => {
                    writeln!(f, "Branch {}", rect)?;
                    for child in children.iter() {
                        fmt_node(f, child, indent + 1)?;
                    }
                    Ok(())
                }
            }
        }
        fmt_node(f, &self.root, 0)
    }
}

impl<T: Clone + PartialEq> Quadtree<T> {
    /// Creates a quadtree with every position set to `default_value`.
    pub fn new(size: usize, default_value: T) -> Self {
        Self {
            root: Node::leaf(Rect2::square(size), default_value),
        }
    }

    /// Returns the side length of the square covered by the quadtree.
    pub fn size(&self) -> usize {
        self.rect().end().x as usize
    }
    /// Returns the square covered by the quadtree.
    pub fn rect(&self) -> Rect2 {
        self.root.rect()
    }
    /// Returns the root node.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Returns the value at `pos`.
    pub fn get(&self, pos: IVec2) -> QuadtreeResult<&T> {
        self.root.get(pos).ok_or(QuadtreeError::OutOfRange {
            pos,
            rect: self.rect(),
        })
    }

    /// Sets the value at `pos`, splitting and merging nodes as needed.
    ///
    /// If `pos` is out of range, the quadtree is left unchanged.
    pub fn set(&mut self, pos: IVec2, value: T) -> QuadtreeResult<()> {
        let rect = self.rect();
        if !rect.contains(pos) {
            return Err(QuadtreeError::OutOfRange { pos, rect });
        }
        let placeholder = Node::leaf(rect, value.clone());
        let old_root = std::mem::replace(&mut self.root, placeholder);
        self.root = old_root.set(pos, value);
        Ok(())
    }

    /// Returns the total number of nodes in the quadtree.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
    /// Returns the number of leaf nodes in the quadtree.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
    /// Returns the number of levels of branches in the quadtree.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
