//! DOM Tree (arena-based allocation)

use std::cmp::Ordering;

use crate::style::{ComputedStyle, PseudoElement};
use crate::{DomError, DomResult, ElementData, Node, NodeId};

/// Arena-based DOM tree. Slot 0 is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree (document included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree holds nothing but the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let parent_node = self.get(parent).ok_or(DomError::NotFound(parent))?;
        if !parent_node.is_container() {
            return Err(DomError::InvalidNodeType(parent));
        }
        let child_node = self.get(child).ok_or(DomError::NotFound(child))?;
        if child == NodeId::ROOT || child_node.parent.is_valid() || self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.link_last_child(parent, child);
        Ok(child)
    }

    /// Create an element and attach it as the last child of `parent`.
    /// `parent` must be an element or the root.
    pub(crate) fn append_new_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let child = self.create_element(tag);
        self.link_last_child(parent, child);
        child
    }

    fn link_last_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last = self.nodes[parent.index()].last_child;
        if prev_last.is_valid() {
            self.nodes[prev_last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        let node = &mut self.nodes[child.index()];
        node.parent = parent;
        node.prev_sibling = prev_last;
        node.next_sibling = NodeId::NONE;
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Iterate over direct children
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate over ancestors, nearest first (excluding `id`)
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Preorder walk of the subtree below `id` (excluding `id`)
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = self.children(id).map(|(child, _)| child).collect::<Vec<_>>();
        Descendants {
            tree: self,
            stack: stack.into_iter().rev().collect(),
        }
    }

    /// Whether `descendant` is `ancestor` or lies below it
    pub fn contains(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        ancestor == descendant || self.ancestors(descendant).any(|a| a == ancestor)
    }

    /// Element data
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        let node = self.nodes.get_mut(id.index()).ok_or(DomError::NotFound(id))?;
        node.as_element_mut().ok_or(DomError::InvalidNodeType(id))
    }

    /// Lowercase tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    /// Attribute value of an element
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.get_attr(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> DomResult<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.element_mut(id)?.remove_attr(name))
    }

    /// Resolved style snapshot of an element
    pub fn style(&self, id: NodeId) -> Option<&ComputedStyle> {
        self.element(id).map(|e| &e.style)
    }

    /// Apply a declaration list (`display: none; width: 0px`) to the snapshot
    pub fn set_style(&mut self, id: NodeId, declarations: &str) -> DomResult<()> {
        self.element_mut(id)?.style.apply_declarations(declarations);
        Ok(())
    }

    /// Generated text of a pseudo-element
    pub fn generated_content(&self, id: NodeId, pseudo: PseudoElement) -> Option<&str> {
        self.element(id).and_then(|e| e.generated.get(pseudo))
    }

    pub fn set_generated_content(
        &mut self,
        id: NodeId,
        pseudo: PseudoElement,
        text: impl Into<String>,
    ) -> DomResult<()> {
        self.element_mut(id)?.generated.set(pseudo, Some(text.into()));
        Ok(())
    }

    /// First attached element with the given `id`, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.descendants(self.root())
            .find(|&n| self.element(n).and_then(ElementData::id) == Some(id))
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .filter_map(|n| self.get(n).and_then(Node::as_text))
            .collect()
    }

    /// Order two nodes by preorder position. Detached subtrees sort after
    /// attached ones, by allocation order.
    pub fn compare_document_position(&self, a: NodeId, b: NodeId) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let path_a = self.path_from_top(a);
        let path_b = self.path_from_top(b);
        if path_a[0] != path_b[0] {
            return path_a[0].cmp(&path_b[0]);
        }

        let shared = path_a.iter().zip(&path_b).take_while(|(x, y)| x == y).count();
        match (path_a.get(shared), path_b.get(shared)) {
            // One is an ancestor of the other
            (None, _) => Ordering::Less,
            (_, None) => Ordering::Greater,
            (Some(&sa), Some(&sb)) => {
                let mut cursor = self.get(sa).map_or(NodeId::NONE, |n| n.next_sibling);
                while cursor.is_valid() {
                    if cursor == sb {
                        return Ordering::Less;
                    }
                    cursor = self.get(cursor).map_or(NodeId::NONE, |n| n.next_sibling);
                }
                Ordering::Greater
            }
        }
    }

    fn path_from_top(&self, id: NodeId) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = self.ancestors(id).collect();
        path.reverse();
        path.push(id);
        path
    }
}

/// Iterator over children, yielding `(id, node)`
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Iterator over ancestors
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.parent(id);
        Some(id)
    }
}

/// Preorder iterator
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children: Vec<NodeId> = self.tree.children(id).map(|(child, _)| child).collect();
        self.stack.extend(children.into_iter().rev());
        Some(id)
    }
}
