//! Rule 2E: controls embedded in another element's name contribute their
//! value instead of their label.

use super::text::{collapse_whitespace, text_content};
use super::{Context, NameComputer};
use crate::aria::{AriaRole, role_of};
use crate::host::AccessibleTree;

/// Textbox, combobox, listbox or range control
pub(crate) fn is_embedded_control<T: AccessibleTree>(tree: &T, node: T::Node) -> bool {
    role_of(tree, node).is_some_and(|role| {
        role.is_textbox() || role.is_range() || matches!(role, AriaRole::Combobox | AriaRole::Listbox)
    })
}

impl<T: AccessibleTree> NameComputer<'_, T> {
    pub fn rule_2e(&self, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        if !context.inherited.part_of_name && !context.is_label_reference {
            return None;
        }
        let role = role_of(self.tree, node)?;

        if role.is_textbox() {
            Some(self.textbox_value(node))
        } else if self.tree.has_tag(node, "select") {
            Some(self.selected_options(node))
        } else if matches!(role, AriaRole::Combobox | AriaRole::Listbox) {
            Some(self.chosen_value(node))
        } else if role.is_range() {
            Some(self.range_value(node))
        } else {
            None
        }
    }

    fn textbox_value(&self, node: T::Node) -> String {
        if self.tree.has_tag(node, "input") {
            self.tree.attribute(node, "value").unwrap_or_default().to_string()
        } else {
            text_content(self.tree, node)
        }
    }

    /// Text of the selected options, or of the first option when nothing is
    /// marked selected
    fn selected_options(&self, node: T::Node) -> String {
        let options: Vec<_> = self
            .tree
            .descendants(node)
            .into_iter()
            .filter(|&n| self.tree.has_tag(n, "option"))
            .collect();
        let selected: Vec<_> = options
            .iter()
            .copied()
            .filter(|&o| self.tree.has_attribute(o, "selected"))
            .collect();
        let chosen: Vec<_> = if selected.is_empty() {
            options.into_iter().take(1).collect()
        } else {
            selected
        };

        self.join_texts(chosen)
    }

    fn chosen_value(&self, node: T::Node) -> String {
        if let Some(value) = self.tree.attribute(node, "value").filter(|v| !v.trim().is_empty()) {
            return collapse_whitespace(value);
        }
        let chosen: Vec<_> = self
            .tree
            .descendants(node)
            .into_iter()
            .filter(|&n| {
                self.tree
                    .attribute(n, "aria-selected")
                    .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
            })
            .collect();

        self.join_texts(chosen)
    }

    fn range_value(&self, node: T::Node) -> String {
        ["aria-valuetext", "aria-valuenow", "value"]
            .into_iter()
            .find_map(|attr| {
                self.tree
                    .attribute(node, attr)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
            })
            .unwrap_or_default()
            .to_string()
    }

    fn join_texts(&self, nodes: Vec<T::Node>) -> String {
        nodes
            .into_iter()
            .map(|n| text_content(self.tree, n))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
