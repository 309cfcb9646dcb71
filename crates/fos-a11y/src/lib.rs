//! fOS Accessibility
//!
//! Accessible name computation for the fOS engine.
//!
//! Features:
//! - Ordered rule chain (AccName 2A to 2I)
//! - Cycle-safe label reference following
//! - Name-from-content eligibility from ARIA roles
//! - Rule/node trace for diffing against other implementations

pub mod accname;
pub mod aria;
pub mod config;
pub mod focus;
pub mod host;

pub use accname::{
    AccessibleName, Context, NameComputer, Rule, allows_name_from_content, compute_name, is_hidden,
};
pub use aria::{AriaRole, explicit_role, implicit_role, role_of};
pub use config::NameConfig;
pub use focus::{TabIndex, is_focusable};
pub use host::AccessibleTree;

use fos_dom::DomTree;

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("No element with id {0:?}")]
    UnknownId(String),

    #[error("Invalid ARIA role: {0}")]
    InvalidRole(String),
}

/// Accessible name of the element with the given `id`
pub fn name_for_id(tree: &DomTree, id: &str) -> Result<String, A11yError> {
    let node = tree
        .get_element_by_id(id)
        .ok_or_else(|| A11yError::UnknownId(id.to_string()))?;
    Ok(compute_name(tree, node, None))
}
