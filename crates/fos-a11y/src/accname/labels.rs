//! Attribute and host-language labelling: rules 2B, 2C, 2D and 2I.

use std::iter;

use super::embedded::is_embedded_control;
use super::text::text_content;
use super::{Context, NameComputer};
use crate::aria::input_type;
use crate::host::AccessibleTree;

/// Elements that `<label>` can be associated with
const LABELABLE: &[&str] = &["button", "meter", "output", "progress", "select", "textarea"];

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl<T: AccessibleTree> NameComputer<'_, T> {
    /// `aria-labelledby`: the referenced elements' names joined by spaces.
    ///
    /// Ignored once a label reference is being followed, so a label's own
    /// `aria-labelledby` never chains further.
    pub fn rule_2b(&self, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        if !self.tree.is_element(node) || context.in_label_traversal() {
            return None;
        }
        let targets = self.tree.id_refs(node, "aria-labelledby");
        if targets.is_empty() {
            return None;
        }

        let derived = context
            .explicit_label_reference()
            .with_visited(iter::once(node).chain(targets.iter().copied()));
        let parts: Vec<String> = targets
            .iter()
            .filter_map(|&target| non_empty(&self.compute_node(target, &derived)))
            .collect();

        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// `aria-label`, unless the node is a control embedded in another name
    pub fn rule_2c(&self, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        let label = non_empty(self.tree.attribute(node, "aria-label")?)?;
        if context.inherited.part_of_name && is_embedded_control(self.tree, node) {
            return None;
        }
        Some(label)
    }

    /// Native labelling from the host language
    pub fn rule_2d(&self, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        let tag = self.tree.tag_name(node)?;
        if context.inherited.part_of_name && is_embedded_control(self.tree, node) {
            return None;
        }

        match tag {
            "input" => self.input_label(node, context),
            // An empty alt is an explicit empty name
            "img" | "area" => self.tree.attribute(node, "alt").map(|alt| alt.trim().to_string()),
            "fieldset" => self.caption(node, "legend", context),
            "table" => self.caption(node, "caption", context),
            "figure" => self.caption(node, "figcaption", context),
            "svg" => self
                .first_child_tagged(node, "title")
                .and_then(|title| non_empty(&text_content(self.tree, title))),
            t if LABELABLE.contains(&t) => self.associated_labels(node, context),
            _ => None,
        }
    }

    /// `title`, then `placeholder` on text entry fields
    pub fn rule_2i(&self, node: T::Node, _context: &Context<T::Node>) -> Option<String> {
        if let Some(title) = self.tree.attribute(node, "title").and_then(non_empty) {
            return Some(title);
        }
        if self.tree.has_tag(node, "input") || self.tree.has_tag(node, "textarea") {
            return self.tree.attribute(node, "placeholder").and_then(non_empty);
        }
        None
    }

    fn input_label(&self, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        let attr = |name: &str| self.tree.attribute(node, name).and_then(non_empty);

        match input_type(self.tree, node).as_str() {
            "button" => attr("value"),
            "submit" => Some(attr("value").unwrap_or_else(|| self.config.submit_label.clone())),
            "reset" => Some(attr("value").unwrap_or_else(|| self.config.reset_label.clone())),
            "image" => Some(
                attr("alt")
                    .or_else(|| attr("value"))
                    .or_else(|| attr("title"))
                    .unwrap_or_else(|| self.config.image_submit_label.clone()),
            ),
            "hidden" => None,
            _ => self.associated_labels(node, context),
        }
    }

    /// `<label for>` elements in document order, then the wrapping label
    fn associated_labels(&self, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        let tree = self.tree;
        let mut labels = Vec::new();

        if let Some(id) = tree.attribute(node, "id").map(str::trim).filter(|id| !id.is_empty()) {
            labels.extend(tree.descendants(tree.root()).into_iter().filter(|&n| {
                tree.has_tag(n, "label") && tree.attribute(n, "for").is_some_and(|f| f.trim() == id)
            }));
        }
        if let Some(wrapping) = tree.ancestors(node).find(|&n| tree.has_tag(n, "label")) {
            if !tree.has_attribute(wrapping, "for") && !labels.contains(&wrapping) {
                labels.push(wrapping);
            }
        }

        let mut parts = Vec::new();
        for label in labels {
            if context.is_visited(label) {
                tracing::trace!("Skipping label {:?} already on the reference path", label);
                continue;
            }
            let derived = context.label_reference().with_visited([node, label]);
            if let Some(text) = non_empty(&self.compute_node(label, &derived)) {
                parts.push(text);
            }
        }

        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Name of the first `tag` child, followed as a label reference
    fn caption(&self, node: T::Node, tag: &str, context: &Context<T::Node>) -> Option<String> {
        let child = self.first_child_tagged(node, tag)?;
        if context.is_visited(child) {
            return None;
        }
        let derived = context.label_reference().with_visited([node, child]);
        non_empty(&self.compute_node(child, &derived))
    }

    fn first_child_tagged(&self, node: T::Node, tag: &str) -> Option<T::Node> {
        self.tree
            .children(node)
            .into_iter()
            .find(|&child| self.tree.has_tag(child, tag))
    }
}
