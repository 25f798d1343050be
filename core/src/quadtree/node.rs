//! Quadtree nodes.
//!
//! Writes consume a node and return the node that should take its place, so a
//! parent never needs to know whether a write split or collapsed its child.

use log::trace;

use crate::rect::Rect2;
use crate::vec2::IVec2;

/// Node of a `Quadtree`, covering a rectangle of positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {
    /// Node whose entire rectangle holds a single value.
    Leaf {
        /// Rectangle covered by the node.
        rect: Rect2,
        /// Value of every position in the rectangle.
        value: T,
    },
    /// Node split into four quadrants, indexed as described in
    /// `Rect2::quadrant_index()`.
    Branch {
        /// Rectangle covered by the node.
        rect: Rect2,
        /// Quadrants, some of which may be trivial.
        children: Box<[Node<T>; 4]>,
    },
}

impl<T: Clone + PartialEq> Node<T> {
    /// Creates a leaf node.
    pub fn leaf(rect: Rect2, value: T) -> Self {
        Self::Leaf { rect, value }
    }

    /// Returns the rectangle covered by the node.
    pub fn rect(&self) -> Rect2 {
        match self {
            Self::Leaf { rect, .. } | Self::Branch { rect, .. } => *rect,
        }
    }
    /// Returns true if the node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
    /// Returns true if the node covers no positions.
    pub fn is_trivial(&self) -> bool {
        self.rect().is_trivial()
    }
    /// Returns the value of a leaf node, or `None` for a branch node.
    pub fn leaf_value(&self) -> Option<&T> {
        match self {
            Self::Leaf { value, .. } => Some(value),
            Self::Branch { .. } => None,
        }
    }
    /// Returns the children of a branch node, or `None` for a leaf node.
    pub fn children(&self) -> Option<&[Node<T>; 4]> {
        match self {
            Self::Leaf { .. } => None,
            Self::Branch { children, .. } => Some(&**children),
        }
    }

    /// Returns the value at `pos`, or `None` if `pos` is outside the node.
    pub fn get(&self, pos: IVec2) -> Option<&T> {
        let rect = self.rect();
        if !rect.contains(pos) {
            return None;
        }
        match self {
            Self::Leaf { value, .. } => Some(value),
            Self::Branch { children, .. } => children[rect.quadrant_index(pos)].get(pos),
        }
    }

    /// Sets the value at `pos` and returns the node that should replace this
    /// one.
    ///
    /// `pos` must be inside the node.
    pub fn set(self, pos: IVec2, new_value: T) -> Self {
        debug_assert!(self.rect().contains(pos), "{} is outside {}", pos, self.rect());
        match self {
            Self::Leaf { rect, value } => {
                if rect.is_unit() {
                    Self::leaf(rect, new_value)
                } else if value == new_value {
                    Self::leaf(rect, value)
                } else {
                    trace!("Splitting leaf at {}", rect);
                    Self::split(rect, value).set(pos, new_value)
                }
            }
            Self::Branch { rect, children } => {
                let index = rect.quadrant_index(pos);
                let children: [Node<T>; 4] = *children;
                let mut i = 0;
                let children = children.map(|child| {
                    let child = if i == index {
                        child.set(pos, new_value.clone())
                    } else {
                        child
                    };
                    i += 1;
                    child
                });
                Self::collapse(rect, Box::new(children), new_value)
            }
        }
    }

    /// Returns a branch whose four quadrants are leaves holding `value`.
    fn split(rect: Rect2, value: T) -> Self {
        let [q0, q1, q2, q3] = rect.quadrants();
        Self::Branch {
            rect,
            children: Box::new([
                Self::leaf(q0, value.clone()),
                Self::leaf(q1, value.clone()),
                Self::leaf(q2, value.clone()),
                Self::leaf(q3, value),
            ]),
        }
    }

    /// Returns a single leaf holding `value` if every non-trivial child is a
    /// leaf holding `value`, or a branch of `children` otherwise.
    fn collapse(rect: Rect2, children: Box<[Node<T>; 4]>, value: T) -> Self {
        let uniform = children.iter().all(Self::is_leaf)
            && children
                .iter()
                .filter(|child| !child.is_trivial())
                .all(|child| child.leaf_value() == Some(&value));
        if uniform {
            trace!("Collapsing branch at {}", rect);
            Self::leaf(rect, value)
        } else {
            Self::Branch { rect, children }
        }
    }

    /// Returns the total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { children, .. } => {
                1 + children.iter().map(Self::node_count).sum::<usize>()
            }
        }
    }
    /// Returns the number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { children, .. } => children.iter().map(Self::leaf_count).sum(),
        }
    }
    /// Returns the length of the longest path from this node to a leaf; zero
    /// for a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Branch { children, .. } => {
                1 + children.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}
