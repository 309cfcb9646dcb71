//! Document - High-level document API

use crate::{DomResult, DomTree, NodeId};

/// HTML Document with the usual `html > head + body` skeleton
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with `html`, `head` and `body`
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.append_new_element(tree.root(), "html");
        let head = tree.append_new_element(html, "head");
        let body = tree.append_new_element(html, "body");

        Self {
            tree,
            head_element: head,
            body_element: body,
        }
    }

    pub fn head(&self) -> NodeId {
        self.head_element
    }

    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id)
    }

    /// Create a text node and append it to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> DomResult<NodeId> {
        let id = self.tree.create_text(text);
        self.tree.append_child(parent, id)
    }

    /// Document title (text of `head > title`)
    pub fn title(&self) -> String {
        self.tree
            .children(self.head_element)
            .find(|(id, _)| self.tree.tag_name(*id) == Some("title"))
            .map(|(id, _)| self.tree.text_content(id).trim().to_string())
            .unwrap_or_default()
    }
}
