//! Computation context threaded through every recursive call.
//!
//! Inherited fields travel down the recursion unchanged unless a rule
//! overrides them; call-local fields are reset for every child call. Every
//! override builds a new value, so sibling branches never see each other's
//! visited set.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

/// Fields every recursive call inherits
#[derive(Debug, Clone)]
pub struct Inherited<N> {
    /// Skip the hidden check (set when a node is reached through a label
    /// reference)
    pub ignore_hiddenness: bool,
    /// Inside a name-from-content subtree computation
    pub part_of_name: bool,
    /// Nodes reached through label references on the active path
    visited: Arc<HashSet<N>>,
}

impl<N> Default for Inherited<N> {
    fn default() -> Self {
        Self {
            ignore_hiddenness: false,
            part_of_name: false,
            visited: Arc::new(HashSet::new()),
        }
    }
}

/// Context for one call of the name computation
#[derive(Debug, Clone)]
pub struct Context<N> {
    pub inherited: Inherited<N>,
    /// This call follows a label reference
    pub is_label_reference: bool,
    /// This node is the explicit target of the label reference being
    /// followed; it is named even when hidden
    pub direct_label_reference: bool,
}

impl<N> Default for Context<N> {
    fn default() -> Self {
        Self {
            inherited: Inherited::default(),
            is_label_reference: false,
            direct_label_reference: false,
        }
    }
}

impl<N: Copy + Eq + Hash> Context<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `node` has already been reached through a reference
    pub fn is_visited(&self, node: N) -> bool {
        self.inherited.visited.contains(&node)
    }

    /// Inside a label-reference traversal (something has been followed)
    pub fn in_label_traversal(&self) -> bool {
        !self.inherited.visited.is_empty()
    }

    /// Context for a child call: inherited fields carried, call-local reset
    pub fn for_child(&self) -> Self {
        Self {
            inherited: self.inherited.clone(),
            ..Self::default()
        }
    }

    /// Child context inside a name-from-content computation
    pub fn part_of_name(&self) -> Self {
        let mut ctx = self.for_child();
        ctx.inherited.part_of_name = true;
        ctx
    }

    /// Context for following a native label association (`<label for>`,
    /// `<legend>`); the target's content is gathered but hiding still applies
    pub fn label_reference(&self) -> Self {
        let mut ctx = self.for_child();
        ctx.is_label_reference = true;
        ctx
    }

    /// Context for following `aria-labelledby`: the target is named even
    /// when hidden, and so are its hidden descendants
    pub fn explicit_label_reference(&self) -> Self {
        let mut ctx = self.label_reference();
        ctx.direct_label_reference = true;
        ctx.inherited.ignore_hiddenness = true;
        ctx
    }

    /// Copy with `nodes` added to the visited set
    pub fn with_visited(&self, nodes: impl IntoIterator<Item = N>) -> Self {
        let mut visited = (*self.inherited.visited).clone();
        visited.extend(nodes);
        let mut ctx = self.clone();
        ctx.inherited.visited = Arc::new(visited);
        ctx
    }
}
