//! Accessible Name Computation
//!
//! Computes the accessible name of a node by trying an ordered chain of
//! rules (2A to 2I of the AccName algorithm). The first rule that produces a
//! value wins; rules that gather text recurse back into the chain with a
//! derived [`Context`].
//!
//! ```
//! use fos_a11y::compute_name;
//! use fos_dom::Document;
//!
//! let mut doc = Document::new();
//! let button = doc.append_element(doc.body(), "button").unwrap();
//! doc.append_text(button, "  Save  ").unwrap();
//!
//! assert_eq!(compute_name(&doc.tree, button, None), "Save");
//! ```

mod content;
mod context;
mod embedded;
mod hidden;
mod labels;
mod text;

use std::cell::RefCell;

use serde::Serialize;

use crate::config::NameConfig;
use crate::host::AccessibleTree;

pub use content::allows_name_from_content;
pub use context::{Context, Inherited};
pub use hidden::is_hidden;

/// One step of the rule chain, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rule {
    /// Hidden and not referenced: empty name
    #[serde(rename = "2A")]
    HiddenNotReferenced,
    /// `aria-labelledby`
    #[serde(rename = "2B")]
    LabelledBy,
    /// `aria-label`
    #[serde(rename = "2C")]
    AriaLabel,
    /// Native labelling (label, alt, legend, caption, input values)
    #[serde(rename = "2D")]
    HostLanguageLabel,
    /// Value of a control embedded in another name
    #[serde(rename = "2E")]
    EmbeddedControl,
    /// Name from content
    #[serde(rename = "2F")]
    NameFromContent,
    /// Text node
    #[serde(rename = "2G")]
    TextNode,
    /// Content of a descendant inside a name-from-content computation
    #[serde(rename = "2H")]
    RecursiveContent,
    /// `title` / `placeholder`
    #[serde(rename = "2I")]
    Tooltip,
}

impl Rule {
    /// Fixed evaluation order
    pub const CHAIN: [Rule; 9] = [
        Rule::HiddenNotReferenced,
        Rule::LabelledBy,
        Rule::AriaLabel,
        Rule::HostLanguageLabel,
        Rule::EmbeddedControl,
        Rule::NameFromContent,
        Rule::TextNode,
        Rule::RecursiveContent,
        Rule::Tooltip,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::HiddenNotReferenced => "2A",
            Self::LabelledBy => "2B",
            Self::AriaLabel => "2C",
            Self::HostLanguageLabel => "2D",
            Self::EmbeddedControl => "2E",
            Self::NameFromContent => "2F",
            Self::TextNode => "2G",
            Self::RecursiveContent => "2H",
            Self::Tooltip => "2I",
        }
    }
}

/// A computed name with the rules and nodes that contributed to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibleName<N> {
    pub name: String,
    /// Rules that produced a value anywhere in the recursion, innermost
    /// production first
    pub rules_applied: Vec<Rule>,
    /// Nodes whose rule produced non-empty text, in the same order
    #[serde(skip)]
    pub nodes_used: Vec<N>,
}

#[derive(Debug)]
struct Trace<N> {
    rules: Vec<Rule>,
    nodes: Vec<N>,
}

impl<N> Default for Trace<N> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            nodes: Vec::new(),
        }
    }
}

impl<N: PartialEq> Trace<N> {
    fn record(&mut self, rule: Rule, node: N, produced: &str) {
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
        if !produced.trim().is_empty() && !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
    }
}

/// Drives one or more name queries against a host tree
pub struct NameComputer<'a, T: AccessibleTree> {
    tree: &'a T,
    config: NameConfig,
    /// Only present while a traced query runs
    trace: RefCell<Option<Trace<T::Node>>>,
}

impl<'a, T: AccessibleTree> NameComputer<'a, T> {
    pub fn new(tree: &'a T) -> Self {
        Self {
            tree,
            config: NameConfig::default(),
            trace: RefCell::new(None),
        }
    }

    pub fn with_config(mut self, config: NameConfig) -> Self {
        self.config = config;
        self
    }

    /// Accessible name of `node`, trimmed
    pub fn compute(&self, node: T::Node, context: &Context<T::Node>) -> String {
        tracing::debug!("Computing accessible name for {:?}", node);
        self.compute_node(node, context).trim().to_string()
    }

    /// Accessible name of `node` with a default context, plus the rules and
    /// nodes that produced it
    pub fn compute_traced(&self, node: T::Node) -> AccessibleName<T::Node> {
        self.trace.replace(Some(Trace::default()));
        let name = self.compute(node, &Context::default());
        let trace = self.trace.take().unwrap_or_default();
        AccessibleName {
            name,
            rules_applied: trace.rules,
            nodes_used: trace.nodes,
        }
    }

    /// Run the rule chain without top-level trimming
    pub(crate) fn compute_node(&self, node: T::Node, context: &Context<T::Node>) -> String {
        for rule in Rule::CHAIN {
            if let Some(name) = self.apply(rule, node, context) {
                tracing::trace!("Rule {} produced {:?} for {:?}", rule.code(), name, node);
                if let Some(trace) = self.trace.borrow_mut().as_mut() {
                    trace.record(rule, node, &name);
                }
                return name;
            }
        }
        String::new()
    }

    /// Evaluate a single rule; `None` means the rule does not apply
    pub fn apply(&self, rule: Rule, node: T::Node, context: &Context<T::Node>) -> Option<String> {
        match rule {
            Rule::HiddenNotReferenced => self.rule_2a(node, context),
            Rule::LabelledBy => self.rule_2b(node, context),
            Rule::AriaLabel => self.rule_2c(node, context),
            Rule::HostLanguageLabel => self.rule_2d(node, context),
            Rule::EmbeddedControl => self.rule_2e(node, context),
            Rule::NameFromContent => self.rule_2f(node, context),
            Rule::TextNode => self.rule_2g(node, context),
            Rule::RecursiveContent => self.rule_2h(node, context),
            Rule::Tooltip => self.rule_2i(node, context),
        }
    }
}

/// Accessible name of `node`. `None` uses the default context.
pub fn compute_name<T: AccessibleTree>(
    tree: &T,
    node: T::Node,
    context: Option<Context<T::Node>>,
) -> String {
    NameComputer::new(tree).compute(node, &context.unwrap_or_default())
}
