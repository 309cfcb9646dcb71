//! Name from content: rules 2F, 2G and 2H, plus the eligibility table.

use std::collections::{HashMap, VecDeque};
use std::iter;

use fos_dom::PseudoElement;

use super::hidden::is_hidden;
use super::text::{Fragment, join_fragments};
use super::{Context, NameComputer};
use crate::aria::{AriaRole, input_type, role_of};
use crate::host::AccessibleTree;

/// `input` types whose content may name them, whatever their role
const NAME_FROM_CONTENT_INPUT_TYPES: &[&str] =
    &["button", "submit", "reset", "image", "checkbox", "radio"];

/// Whether the text subtree of `node` may serve as its name.
///
/// Explicit roles are looked up first, then the implicit role, which already
/// encodes the structural cases (`td` inside a table, `option` inside a
/// `select`/`datalist`, `a` with `href`).
pub fn allows_name_from_content<T: AccessibleTree>(tree: &T, node: T::Node) -> bool {
    if !tree.is_element(node) {
        return false;
    }
    if tree.has_tag(node, "input")
        && !NAME_FROM_CONTENT_INPUT_TYPES.contains(&input_type(tree, node).as_str())
    {
        return false;
    }
    role_of(tree, node).is_some_and(AriaRole::allows_name_from_content)
}

impl<'a, T: AccessibleTree> NameComputer<'a, T> {
    /// Name from the node's own content. When the node was reached through a
    /// label reference, nodes connected to it by further label references are
    /// merged in as well.
    pub fn rule_2f(&self, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        if !self.tree.is_element(node) {
            return None;
        }
        if context.is_label_reference {
            return Some(self.merge_connected(node, context));
        }
        if !allows_name_from_content(self.tree, node) {
            return None;
        }
        Some(self.gather_content(node, &context.part_of_name()))
    }

    /// Literal text of a text node
    pub fn rule_2g(&self, node: T::Node, _context: &Context<T::Node>) -> Option<String> {
        self.tree.text(node).map(str::to_string)
    }

    /// Descendant of a name-from-content computation: its content, without
    /// the connected-node merge
    pub fn rule_2h(&self, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        if !context.inherited.part_of_name || !self.tree.is_element(node) {
            return None;
        }
        let has_generated = [PseudoElement::Before, PseudoElement::After]
            .into_iter()
            .any(|pseudo| self.tree.generated_content(node, pseudo).is_some());
        if self.tree.children(node).is_empty() && !has_generated {
            return None;
        }
        Some(self.gather_content(node, &context.part_of_name()))
    }

    /// `::before`, every child through the full rule chain, then `::after`.
    /// Children already on the reference path contribute nothing.
    fn gather_content(&self, node: T::Node, context: &Context<T::Node>) -> String {
        let generated = |pseudo: PseudoElement| {
            self.config
                .include_generated_content
                .then(|| self.tree.generated_content(node, pseudo))
                .flatten()
                .map(|text| Fragment::Generated(text.to_string()))
        };

        let mut fragments: Vec<Fragment> = generated(PseudoElement::Before).into_iter().collect();
        for child in self.tree.children(node) {
            if context.is_visited(child) {
                tracing::trace!("Skipping {:?}, already on the reference path", child);
                continue;
            }
            fragments.push(Fragment::Content(self.compute_node(child, context)));
        }
        fragments.extend(generated(PseudoElement::After));

        join_fragments(fragments)
    }

    /// Content of `node` and of every node linked to it by `aria-labelledby`
    /// in either direction, in document order. Hidden nodes are not linked
    /// unless hiding is ignored.
    fn merge_connected(&self, node: T::Node, context: &Context<T::Node>) -> String {
        let tree = self.tree;
        let referrers = self.labelledby_referrers();
        let mut members = vec![node];
        let mut queue = VecDeque::from([node]);

        while let Some(current) = queue.pop_front() {
            for candidate in self.label_neighbours(current, &referrers, context) {
                if members
                    .iter()
                    .any(|&m| tree.contains(m, candidate) || tree.contains(candidate, m))
                {
                    continue;
                }
                if context.is_visited(candidate) {
                    tracing::trace!("Cycle guard: not following {:?}", candidate);
                    continue;
                }
                if !context.inherited.ignore_hiddenness && is_hidden(tree, candidate, context) {
                    tracing::trace!("Not merging hidden {:?}", candidate);
                    continue;
                }
                members.push(candidate);
                queue.push_back(candidate);
            }
        }

        members.sort_by(|&a, &b| tree.compare_document_position(a, b));
        let inner = context.with_visited(members.iter().copied()).part_of_name();
        join_fragments(
            members
                .into_iter()
                .map(|m| Fragment::Content(self.gather_content(m, &inner))),
        )
    }

    /// Every element carrying `aria-labelledby`, keyed by each id it names
    fn labelledby_referrers(&self) -> HashMap<&'a str, Vec<T::Node>> {
        let tree = self.tree;
        let mut referrers: HashMap<&str, Vec<T::Node>> = HashMap::new();
        for n in tree.descendants(tree.root()) {
            if let Some(refs) = tree.attribute(n, "aria-labelledby") {
                for id in refs.split_ascii_whitespace() {
                    referrers.entry(id).or_default().push(n);
                }
            }
        }
        referrers
    }

    /// Nodes one label edge away from `node`: targets of `aria-labelledby`
    /// on it or inside it, and elements whose `aria-labelledby` names it.
    /// References made by nodes already on the path are not edges.
    fn label_neighbours(
        &self,
        node: T::Node,
        referrers: &HashMap<&str, Vec<T::Node>>,
        context: &Context<T::Node>,
    ) -> Vec<T::Node> {
        let tree = self.tree;
        let mut neighbours = Vec::new();

        for origin in iter::once(node).chain(tree.descendants(node)) {
            if origin != node && context.is_visited(origin) {
                continue;
            }
            neighbours.extend(tree.id_refs(origin, "aria-labelledby"));
        }

        if let Some(id) = tree.attribute(node, "id").map(str::trim).filter(|id| !id.is_empty()) {
            neighbours.extend(referrers.get(id).into_iter().flatten().copied());
        }

        neighbours
    }
}
