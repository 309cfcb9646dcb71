//! Host Tree Access
//!
//! The read-only view of a document the name computation needs. The engine
//! never creates or mutates nodes; everything goes through this trait.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use fos_dom::{ComputedStyle, DomTree, Node, NodeId, PseudoElement};

/// Tree/style provider consumed by the name computation
pub trait AccessibleTree {
    /// Opaque node handle
    type Node: Copy + Eq + Hash + Debug;

    /// Document root, used to scan for reverse references
    fn root(&self) -> Self::Node;

    fn is_element(&self, node: Self::Node) -> bool;

    /// Literal text of a text node (`None` for anything else)
    fn text(&self, node: Self::Node) -> Option<&str>;

    /// Lowercase tag name of an element
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Children in document order
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Resolved style of an element (`None` for non-elements)
    fn computed_style(&self, node: Self::Node) -> Option<ComputedStyle>;

    /// CSS generated text attached to an element
    fn generated_content(&self, node: Self::Node, pseudo: PseudoElement) -> Option<&str>;

    fn compare_document_position(&self, a: Self::Node, b: Self::Node) -> Ordering;

    fn has_attribute(&self, node: Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn has_tag(&self, node: Self::Node, tag: &str) -> bool {
        self.tag_name(node) == Some(tag)
    }

    /// Ancestors, nearest first (excluding `node`)
    fn ancestors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_ {
        std::iter::successors(self.parent(node), move |&n| self.parent(n))
    }

    /// Nearest inclusive ancestor whose tag is one of `tags`
    fn closest(&self, node: Self::Node, tags: &[&str]) -> Option<Self::Node> {
        std::iter::once(node)
            .chain(self.ancestors(node))
            .find(|&n| self.tag_name(n).is_some_and(|t| tags.contains(&t)))
    }

    /// Whether `node` is `ancestor` or lies below it
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool {
        ancestor == node || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Preorder walk below `node` (excluding it)
    fn descendants(&self, node: Self::Node) -> Vec<Self::Node> {
        let mut out = Vec::new();
        let mut stack: Vec<Self::Node> = self.children(node).into_iter().rev().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).into_iter().rev());
        }
        out
    }

    /// Resolve a whitespace-separated IDREF attribute. Dangling and repeated
    /// ids are dropped.
    fn id_refs(&self, node: Self::Node, attr: &str) -> Vec<Self::Node> {
        let Some(value) = self.attribute(node, attr) else {
            return Vec::new();
        };
        let mut targets = Vec::new();
        for id in value.split_ascii_whitespace() {
            match self.element_by_id(id) {
                Some(target) if !targets.contains(&target) => targets.push(target),
                Some(_) => {}
                None => tracing::debug!("Skipping dangling {} reference to #{}", attr, id),
            }
        }
        targets
    }
}

impl AccessibleTree for DomTree {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        DomTree::root(self)
    }

    fn is_element(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(Node::is_element)
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.get(node).and_then(Node::as_text)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        DomTree::tag_name(self, node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        DomTree::attribute(self, node, name)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        DomTree::parent(self, node)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        DomTree::children(self, node).map(|(id, _)| id).collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn computed_style(&self, node: NodeId) -> Option<ComputedStyle> {
        self.style(node).copied()
    }

    fn generated_content(&self, node: NodeId, pseudo: PseudoElement) -> Option<&str> {
        DomTree::generated_content(self, node, pseudo)
    }

    fn compare_document_position(&self, a: NodeId, b: NodeId) -> Ordering {
        DomTree::compare_document_position(self, a, b)
    }
}
