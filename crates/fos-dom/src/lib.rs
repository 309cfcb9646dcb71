//! fOS DOM - Document Object Model
//!
//! Arena DOM tree carrying the resolved style snapshot and generated
//! content the accessibility layer reads.

mod document;
mod node;
mod tree;
pub mod style;

pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use style::{ComputedStyle, Display, GeneratedContent, PseudoElement, SizeValue, Visibility};
pub use tree::{Ancestors, Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for a missing link
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0:?}")]
    NotFound(NodeId),

    #[error("Cannot append {child:?} to {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Invalid node type for operation: {0:?}")]
    InvalidNodeType(NodeId),
}
