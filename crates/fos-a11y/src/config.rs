//! Name Computation Configuration

/// Options for the accessible name computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameConfig {
    /// Name of an `<input type="submit">` without a value
    pub submit_label: String,

    /// Name of an `<input type="reset">` without a value
    pub reset_label: String,

    /// Name of an `<input type="image">` without alt, value or title
    pub image_submit_label: String,

    /// Read `::before` / `::after` text when gathering content
    pub include_generated_content: bool,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            submit_label: "Submit".to_string(),
            reset_label: "Reset".to_string(),
            image_submit_label: "Submit Query".to_string(),
            include_generated_content: true,
        }
    }
}
