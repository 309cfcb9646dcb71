//! Focusability
//!
//! Whether an element can receive focus on its own. Used by the hidden
//! check: a zero-sized element that is focusable still counts as rendered.

use crate::aria::input_type;
use crate::host::AccessibleTree;

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// Negative: focusable by script or click, skipped by Tab
    Programmatic(i32),
    /// Zero or positive: part of the sequential focus order
    Sequential(i32),
}

impl TabIndex {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Some(Self::Programmatic(n)),
            Ok(n) => Some(Self::Sequential(n)),
            Err(_) => None,
        }
    }

    pub fn is_sequential(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

/// Whether `node` can be focused independently of its ancestors
pub fn is_focusable<T: AccessibleTree>(tree: &T, node: T::Node) -> bool {
    let Some(tag) = tree.tag_name(node) else {
        return false;
    };
    if tree.attribute(node, "tabindex").and_then(TabIndex::parse).is_some() {
        return true;
    }
    if tree
        .attribute(node, "contenteditable")
        .is_some_and(|v| v.is_empty() || v.eq_ignore_ascii_case("true"))
    {
        return true;
    }
    let disabled = tree.has_attribute(node, "disabled");
    match tag {
        "a" | "area" => tree.has_attribute(node, "href"),
        "button" | "select" | "textarea" => !disabled,
        "input" => !disabled && input_type(tree, node) != "hidden",
        "iframe" | "summary" => true,
        _ => false,
    }
}
