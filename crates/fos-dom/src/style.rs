//! Resolved Styles
//!
//! Snapshot of the already-cascaded values an element carries. Nothing here
//! resolves selectors; values are assigned by whoever builds the tree.

/// Display property values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    Grid,
    Table,
    TableRow,
    TableCell,
    ListItem,
    None,
    Contents,
}

impl Display {
    /// User-agent default for a tag
    pub fn initial_for(tag: &str) -> Self {
        match tag {
            "head" | "script" | "style" | "title" | "template" | "meta" | "link" | "datalist" => {
                Self::None
            }
            "a" | "abbr" | "b" | "bdi" | "bdo" | "cite" | "code" | "data" | "dfn" | "em" | "i"
            | "kbd" | "label" | "mark" | "q" | "s" | "samp" | "small" | "span" | "strong"
            | "sub" | "sup" | "time" | "u" | "var" | "img" | "svg" | "br" | "wbr" => Self::Inline,
            "button" | "input" | "select" | "textarea" | "meter" | "progress" | "output" => {
                Self::InlineBlock
            }
            "table" => Self::Table,
            "tr" => Self::TableRow,
            "td" | "th" => Self::TableCell,
            "li" => Self::ListItem,
            _ => Self::Block,
        }
    }

    /// Parse a CSS keyword
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value.trim().to_ascii_lowercase().as_str() {
            "block" => Self::Block,
            "inline" => Self::Inline,
            "inline-block" => Self::InlineBlock,
            "flex" => Self::Flex,
            "grid" => Self::Grid,
            "table" => Self::Table,
            "table-row" => Self::TableRow,
            "table-cell" => Self::TableCell,
            "list-item" => Self::ListItem,
            "none" => Self::None,
            "contents" => Self::Contents,
            _ => return None,
        })
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

/// Visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

impl Visibility {
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value.trim().to_ascii_lowercase().as_str() {
            "visible" => Self::Visible,
            "hidden" => Self::Hidden,
            "collapse" => Self::Collapse,
            _ => return None,
        })
    }
}

/// Used size of a box (auto or CSS pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SizeValue {
    #[default]
    Auto,
    Px(f32),
}

impl SizeValue {
    /// Only an explicit zero length counts; `auto` is never zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Px(v) if v == 0.0)
    }

    /// Parse `auto`, `12px`, `6em`, `75%` or a bare number. Units are
    /// stripped, not converted.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("auto") {
            return Some(Self::Auto);
        }
        let number = ["px", "em", "%"]
            .iter()
            .find_map(|unit| value.strip_suffix(unit))
            .unwrap_or(value);
        number.trim().parse::<f32>().ok().map(Self::Px)
    }
}

/// The resolved values the accessibility layer reads
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComputedStyle {
    pub display: Display,
    pub visibility: Visibility,
    pub width: SizeValue,
    pub height: SizeValue,
}

impl ComputedStyle {
    /// Defaults an element gets before any author style
    pub fn for_tag(tag: &str) -> Self {
        Self {
            display: Display::initial_for(tag),
            ..Self::default()
        }
    }

    /// Apply a `prop: value; prop: value` declaration list, ignoring
    /// properties this snapshot does not track.
    pub fn apply_declarations(&mut self, declarations: &str) {
        for decl in declarations.split(';') {
            let Some((prop, value)) = decl.split_once(':') else {
                continue;
            };
            match prop.trim().to_ascii_lowercase().as_str() {
                "display" => {
                    if let Some(d) = Display::parse(value) {
                        self.display = d;
                    }
                }
                "visibility" => {
                    if let Some(v) = Visibility::parse(value) {
                        self.visibility = v;
                    }
                }
                "width" => {
                    if let Some(w) = SizeValue::parse(value) {
                        self.width = w;
                    }
                }
                "height" => {
                    if let Some(h) = SizeValue::parse(value) {
                        self.height = h;
                    }
                }
                other => tracing::trace!("Ignoring declaration for {}", other),
            }
        }
    }
}

/// Pseudo-elements that can carry generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoElement {
    Before,
    After,
}

/// Generated `content` text attached to an element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedContent {
    pub before: Option<String>,
    pub after: Option<String>,
}

impl GeneratedContent {
    pub fn get(&self, pseudo: PseudoElement) -> Option<&str> {
        match pseudo {
            PseudoElement::Before => self.before.as_deref(),
            PseudoElement::After => self.after.as_deref(),
        }
    }

    pub fn set(&mut self, pseudo: PseudoElement, text: Option<String>) {
        match pseudo {
            PseudoElement::Before => self.before = text,
            PseudoElement::After => self.after = text,
        }
    }
}
