//! Rule 2A: hidden nodes get an empty name.

use std::iter;

use fos_dom::Visibility;

use super::{Context, NameComputer};
use crate::focus::is_focusable;
use crate::host::AccessibleTree;

/// Whether `node` counts as hidden for naming purposes.
///
/// Text nodes are never hidden here; their hiddenness comes from the
/// element they are gathered through.
pub fn is_hidden<T: AccessibleTree>(tree: &T, node: T::Node, context: &Context<T::Node>) -> bool {
    if !tree.is_element(node) {
        return false;
    }

    // Options summarised by their own select stay visible
    if tree.has_tag(node, "option")
        && tree.closest(node, &["select"]).is_some()
        && context.inherited.part_of_name
    {
        return false;
    }

    if let Some(style) = tree.computed_style(node) {
        if style.width.is_zero() && style.height.is_zero() && !is_focusable(tree, node) {
            return true;
        }
        if style.visibility == Visibility::Hidden {
            return true;
        }
    }

    let mut self_and_ancestors = iter::once(node).chain(tree.ancestors(node));
    if self_and_ancestors.any(|n| has_hidden_marker(tree, n)) {
        return true;
    }

    // display is not inherited, so every ancestor has to be checked
    iter::once(node)
        .chain(tree.ancestors(node))
        .any(|n| tree.computed_style(n).is_some_and(|s| s.display.is_none()))
}

fn has_hidden_marker<T: AccessibleTree>(tree: &T, node: T::Node) -> bool {
    tree.has_attribute(node, "hidden")
        || tree
            .attribute(node, "aria-hidden")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

impl<T: AccessibleTree> NameComputer<'_, T> {
    fn rule_2a_condition(&self, node: T::Node, context: &Context<T::Node>) -> bool {
        !context.inherited.ignore_hiddenness
            && is_hidden(self.tree, node, context)
            && !context.direct_label_reference
    }

    /// Empty name for a hidden node, unless hiding is ignored or the node is
    /// the direct target of a label reference.
    pub fn rule_2a(&self, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        self.rule_2a_condition(node, context).then(String::new)
    }
}
