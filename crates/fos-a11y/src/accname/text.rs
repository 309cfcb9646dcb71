//! Whitespace handling for gathered text.

use crate::host::AccessibleTree;

/// One piece of gathered text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fragment {
    /// `::before` / `::after` text; joins its neighbours without a space
    Generated(String),
    /// Text from a child node or a connected label
    Content(String),
}

/// Collapse runs of HTML whitespace to one space and trim the ends
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join fragments: one space between content fragments, none next to
/// generated content. Empty fragments are dropped.
pub(crate) fn join_fragments(fragments: impl IntoIterator<Item = Fragment>) -> String {
    let mut out = String::new();
    let mut prev_generated = false;
    for fragment in fragments {
        let (text, generated) = match fragment {
            Fragment::Generated(t) => (collapse_whitespace(&t), true),
            Fragment::Content(t) => (collapse_whitespace(&t), false),
        };
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() && !generated && !prev_generated {
            out.push(' ');
        }
        out.push_str(&text);
        prev_generated = generated;
    }
    out
}

/// Concatenated text of every text node below `node`, collapsed. Used where
/// a value is read verbatim (option text, `<title>`) rather than computed.
pub(crate) fn text_content<T: AccessibleTree>(tree: &T, node: T::Node) -> String {
    let raw: String = tree
        .descendants(node)
        .into_iter()
        .filter_map(|n| tree.text(n))
        .collect();
    collapse_whitespace(&raw)
}
