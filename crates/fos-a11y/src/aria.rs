//! ARIA Roles
//!
//! Explicit and implicit roles, and which of them take their name from
//! content.

use std::str::FromStr;

use crate::A11yError;
use crate::host::AccessibleTree;

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Landmark roles
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // Widget roles
    Alert,
    AlertDialog,
    Button,
    Checkbox,
    Combobox,
    Dialog,
    GridCell,
    Link,
    Listbox,
    Log,
    Marquee,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    ProgressBar,
    Radio,
    RadioGroup,
    ScrollBar,
    SearchBox,
    Slider,
    SpinButton,
    Status,
    Switch,
    Tab,
    TabList,
    TabPanel,
    TextBox,
    Timer,
    ToolTip,
    Tree,
    TreeGrid,
    TreeItem,

    // Document structure
    Article,
    Cell,
    ColumnHeader,
    Definition,
    Directory,
    Document,
    Feed,
    Figure,
    Group,
    Heading,
    Img,
    List,
    ListItem,
    Math,
    Meter,
    Note,
    Presentation,
    Row,
    RowGroup,
    RowHeader,
    Separator,
    Table,
    Term,
    Toolbar,

    Application,
    Generic,
}

impl FromStr for AriaRole {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            "alert" => Self::Alert,
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "combobox" => Self::Combobox,
            "dialog" => Self::Dialog,
            "gridcell" => Self::GridCell,
            "link" => Self::Link,
            "listbox" => Self::Listbox,
            "log" => Self::Log,
            "marquee" => Self::Marquee,
            "menu" => Self::Menu,
            "menubar" => Self::MenuBar,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "option" => Self::Option,
            "progressbar" => Self::ProgressBar,
            "radio" => Self::Radio,
            "radiogroup" => Self::RadioGroup,
            "scrollbar" => Self::ScrollBar,
            "searchbox" => Self::SearchBox,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "status" => Self::Status,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "tablist" => Self::TabList,
            "tabpanel" => Self::TabPanel,
            "textbox" => Self::TextBox,
            "timer" => Self::Timer,
            "tooltip" => Self::ToolTip,
            "tree" => Self::Tree,
            "treegrid" => Self::TreeGrid,
            "treeitem" => Self::TreeItem,
            "article" => Self::Article,
            "cell" => Self::Cell,
            "columnheader" => Self::ColumnHeader,
            "definition" => Self::Definition,
            "directory" => Self::Directory,
            "document" => Self::Document,
            "feed" => Self::Feed,
            "figure" => Self::Figure,
            "group" => Self::Group,
            "heading" => Self::Heading,
            "img" => Self::Img,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "math" => Self::Math,
            "meter" => Self::Meter,
            "note" => Self::Note,
            "none" | "presentation" => Self::Presentation,
            "row" => Self::Row,
            "rowgroup" => Self::RowGroup,
            "rowheader" => Self::RowHeader,
            "separator" => Self::Separator,
            "table" => Self::Table,
            "term" => Self::Term,
            "toolbar" => Self::Toolbar,
            "application" => Self::Application,
            "generic" => Self::Generic,
            _ => return Err(A11yError::InvalidRole(s.to_string())),
        })
    }
}

impl AriaRole {
    /// Parse a single role token
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Parse a `role` attribute: the first recognised token of the
    /// space-separated fallback list wins.
    pub fn parse_list(value: &str) -> Option<Self> {
        value.split_ascii_whitespace().find_map(Self::parse)
    }

    /// Roles whose name may be computed from their content
    pub fn allows_name_from_content(self) -> bool {
        matches!(
            self,
            Self::Button
                | Self::Cell
                | Self::Checkbox
                | Self::ColumnHeader
                | Self::GridCell
                | Self::Heading
                | Self::Link
                | Self::MenuItem
                | Self::MenuItemCheckbox
                | Self::MenuItemRadio
                | Self::Option
                | Self::Radio
                | Self::Row
                | Self::RowHeader
                | Self::Switch
                | Self::Tab
                | Self::ToolTip
                | Self::TreeItem
        )
    }

    /// Controls whose value stands in for their name inside another label
    pub fn is_range(self) -> bool {
        matches!(
            self,
            Self::Slider | Self::SpinButton | Self::ProgressBar | Self::ScrollBar | Self::Meter
        )
    }

    pub fn is_textbox(self) -> bool {
        matches!(self, Self::TextBox | Self::SearchBox)
    }
}

/// `input` types that are rendered as text entry
const TEXT_INPUT_TYPES: &[&str] = &["text", "search", "email", "tel", "url", "password"];

/// Lowercased `type` of an `input`, defaulting to `text`
pub(crate) fn input_type<T: AccessibleTree>(tree: &T, node: T::Node) -> String {
    tree.attribute(node, "type")
        .map(|t| t.trim().to_ascii_lowercase())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "text".to_string())
}

/// Role from the `role` attribute, if it names a known role
pub fn explicit_role<T: AccessibleTree>(tree: &T, node: T::Node) -> Option<AriaRole> {
    tree.attribute(node, "role").and_then(AriaRole::parse_list)
}

/// Role the element has natively, from its tag and context
pub fn implicit_role<T: AccessibleTree>(tree: &T, node: T::Node) -> Option<AriaRole> {
    let tag = tree.tag_name(node)?;
    Some(match tag {
        "a" | "area" if tree.has_attribute(node, "href") => AriaRole::Link,
        "button" | "summary" => AriaRole::Button,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => AriaRole::Heading,
        "td" if tree.closest(node, &["table"]).is_some() => AriaRole::Cell,
        "th" if tree.closest(node, &["table"]).is_some() => AriaRole::ColumnHeader,
        "tr" if tree.closest(node, &["table"]).is_some() => AriaRole::Row,
        "option" if tree.closest(node, &["select", "datalist"]).is_some() => AriaRole::Option,
        "input" => match input_type(tree, node).as_str() {
            "button" | "submit" | "reset" | "image" => AriaRole::Button,
            "checkbox" => AriaRole::Checkbox,
            "radio" => AriaRole::Radio,
            "range" => AriaRole::Slider,
            "number" => AriaRole::SpinButton,
            t if TEXT_INPUT_TYPES.contains(&t) => AriaRole::TextBox,
            _ => return None,
        },
        "textarea" => AriaRole::TextBox,
        "select" => AriaRole::Combobox,
        "meter" => AriaRole::Meter,
        "progress" => AriaRole::ProgressBar,
        "img" => AriaRole::Img,
        "li" => AriaRole::ListItem,
        "ul" | "ol" => AriaRole::List,
        "table" => AriaRole::Table,
        "nav" => AriaRole::Navigation,
        "main" => AriaRole::Main,
        "dialog" => AriaRole::Dialog,
        _ => return None,
    })
}

/// Explicit role if present and recognised, otherwise the implicit one
pub fn role_of<T: AccessibleTree>(tree: &T, node: T::Node) -> Option<AriaRole> {
    explicit_role(tree, node).or_else(|| implicit_role(tree, node))
}
