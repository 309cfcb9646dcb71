//! Accessible name computation tests
//!
//! Builds small documents by hand and checks the computed names for each rule
//! of the chain, the name-from-content table, and reference cycles.

use anyhow::Result;
use fos_a11y::{
    A11yError, AccessibleName, Context, NameComputer, NameConfig, Rule, allows_name_from_content,
    compute_name, name_for_id,
};
use fos_dom::{Document, NodeId, PseudoElement};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Append `<tag id="id">` under `parent`
fn element_with_id(doc: &mut Document, parent: NodeId, tag: &str, id: &str) -> Result<NodeId> {
    let node = doc.append_element(parent, tag)?;
    doc.tree.set_attribute(node, "id", id)?;
    Ok(node)
}

// ============================================================================
// NAME FROM CONTENT (2F)
// ============================================================================

#[test]
fn test_role_button_named_from_content() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let div = element_with_id(&mut doc, body, "div", "foo")?;
    doc.tree.set_attribute(div, "role", "button")?;
    doc.append_text(div, "\n          Hello world\n        ")?;

    let computer = NameComputer::new(&doc.tree);
    assert_eq!(computer.rule_2f(div, &Context::new()), Some("Hello world".to_string()));
    assert_eq!(compute_name(&doc.tree, div, None), "Hello world");
    Ok(())
}

#[test]
fn test_label_subtree_joined_with_single_spaces() -> Result<()> {
    init_tracing();
    let mut doc = Document::new();
    let body = doc.body();
    let label = element_with_id(&mut doc, body, "label", "foo")?;
    doc.append_text(label, "\n  ")?;
    let outer = doc.append_element(label, "div")?;
    doc.append_text(outer, "\n    Hello\n    ")?;
    let middle = doc.append_element(outer, "div")?;
    let inner = doc.append_element(middle, "div")?;
    doc.append_text(inner, "\n        world\n      ")?;
    doc.append_text(label, "\n  ")?;
    let bang = doc.append_element(label, "div")?;
    doc.append_text(bang, "!")?;

    let computer = NameComputer::new(&doc.tree);
    let context = Context::new().label_reference();
    assert_eq!(computer.rule_2f(label, &context), Some("Hello world !".to_string()));
    Ok(())
}

#[test]
fn test_generated_content_hugs_text() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let foo = element_with_id(&mut doc, body, "div", "foo")?;
    doc.append_text(foo, "\n  world\n  ")?;
    let wrapper = doc.append_element(foo, "div")?;
    let style = doc.append_element(wrapper, "style")?;
    doc.append_text(style, "#foo:before { content: 'Hello'; }")?;
    doc.tree.set_generated_content(foo, PseudoElement::Before, "Hello")?;
    doc.tree.set_generated_content(foo, PseudoElement::After, "!")?;

    let computer = NameComputer::new(&doc.tree);
    let context = Context::new().label_reference();
    assert_eq!(computer.rule_2f(foo, &context), Some("Helloworld!".to_string()));
    Ok(())
}

#[test]
fn test_connected_labels_merged_in_document_order() -> Result<()> {
    init_tracing();
    let mut doc = Document::new();
    let body = doc.body();
    let foo = element_with_id(&mut doc, body, "div", "foo")?;
    doc.append_text(foo, "\n  Hello\n  ")?;
    let to_bar = doc.append_element(foo, "div")?;
    doc.tree.set_attribute(to_bar, "aria-labelledby", "bar")?;
    let bar = element_with_id(&mut doc, body, "div", "bar")?;
    doc.append_text(bar, "\n  world\n  ")?;
    let to_foo = doc.append_element(bar, "div")?;
    doc.tree.set_attribute(to_foo, "aria-labelledby", "foo")?;

    let computer = NameComputer::new(&doc.tree);
    let context = Context::new().label_reference();
    assert_eq!(computer.rule_2f(foo, &context), Some("Hello world".to_string()));
    // Same set of nodes from the other side, still in document order
    assert_eq!(computer.rule_2f(bar, &context), Some("Hello world".to_string()));
    Ok(())
}

#[test]
fn test_hidden_referrer_not_merged_through_native_label() -> Result<()> {
    init_tracing();
    let mut doc = Document::new();
    let body = doc.body();
    let label = element_with_id(&mut doc, body, "label", "lbl")?;
    doc.tree.set_attribute(label, "for", "x")?;
    doc.append_text(label, "Name")?;
    let input = element_with_id(&mut doc, body, "input", "x")?;
    let note = doc.append_element(body, "div")?;
    doc.tree.set_style(note, "display: none")?;
    doc.tree.set_attribute(note, "aria-labelledby", "lbl")?;
    doc.append_text(note, "secret")?;

    assert_eq!(compute_name(&doc.tree, note, None), "");
    assert_eq!(compute_name(&doc.tree, input, None), "Name");

    // aria-labelledby ignores hiding, so the same node is merged there
    let other = doc.append_element(body, "input")?;
    doc.tree.set_attribute(other, "aria-labelledby", "lbl")?;
    assert_eq!(compute_name(&doc.tree, other, None), "Name secret");
    Ok(())
}

#[test]
fn test_hidden_child_of_native_label_skipped() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let label = doc.append_element(body, "label")?;
    doc.tree.set_attribute(label, "for", "email")?;
    doc.append_text(label, "Email")?;
    let hint = doc.append_element(label, "span")?;
    doc.tree.set_style(hint, "visibility: hidden")?;
    doc.append_text(hint, "(required)")?;
    let input = element_with_id(&mut doc, body, "input", "email")?;

    assert_eq!(compute_name(&doc.tree, input, None), "Email");
    Ok(())
}

#[test]
fn test_hidden_descendants_skipped() -> Result<()> {
    let mut doc = Document::new();
    let button = doc.append_element(doc.body(), "button")?;
    doc.append_text(button, "Close")?;
    let icon = doc.append_element(button, "span")?;
    doc.tree.set_attribute(icon, "aria-hidden", "true")?;
    doc.append_text(icon, "×")?;

    assert_eq!(compute_name(&doc.tree, button, None), "Close");
    Ok(())
}

#[test]
fn test_nested_inline_content_and_alt() -> Result<()> {
    let mut doc = Document::new();
    let link = doc.append_element(doc.body(), "a")?;
    doc.tree.set_attribute(link, "href", "/docs")?;
    doc.append_text(link, "Read ")?;
    let em = doc.append_element(link, "em")?;
    doc.append_text(em, "the docs")?;
    let img = doc.append_element(link, "img")?;
    doc.tree.set_attribute(img, "alt", "(PDF)")?;

    assert_eq!(compute_name(&doc.tree, link, None), "Read the docs (PDF)");
    Ok(())
}

// ============================================================================
// ELIGIBILITY TABLE
// ============================================================================

#[test]
fn test_eligibility_by_role() -> Result<()> {
    let mut doc = Document::new();
    let button = doc.append_element(doc.body(), "div")?;
    doc.tree.set_attribute(button, "role", "button")?;
    let presentation = doc.append_element(doc.body(), "div")?;
    doc.tree.set_attribute(presentation, "role", "presentation")?;
    let heading = doc.append_element(doc.body(), "h1")?;
    let unknown = doc.append_element(doc.body(), "div")?;
    doc.tree.set_attribute(unknown, "role", "not-a-role")?;

    assert!(allows_name_from_content(&doc.tree, button));
    assert!(!allows_name_from_content(&doc.tree, presentation));
    assert!(allows_name_from_content(&doc.tree, heading));
    assert!(!allows_name_from_content(&doc.tree, unknown));
    Ok(())
}

#[test]
fn test_eligibility_structural_cases() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();

    let table = doc.append_element(body, "table")?;
    let cell = doc.append_element(table, "td")?;
    let loose_cell = doc.append_element(body, "td")?;
    assert!(allows_name_from_content(&doc.tree, cell));
    assert!(!allows_name_from_content(&doc.tree, loose_cell));

    let loose_option = doc.append_element(body, "option")?;
    let select = doc.append_element(body, "select")?;
    let select_option = doc.append_element(select, "option")?;
    let datalist = doc.append_element(body, "datalist")?;
    let datalist_option = doc.append_element(datalist, "option")?;
    assert!(!allows_name_from_content(&doc.tree, loose_option));
    assert!(allows_name_from_content(&doc.tree, select_option));
    assert!(allows_name_from_content(&doc.tree, datalist_option));

    let input_button = doc.append_element(body, "input")?;
    doc.tree.set_attribute(input_button, "type", "button")?;
    let input_other = doc.append_element(body, "input")?;
    doc.tree.set_attribute(input_other, "type", "other")?;
    assert!(allows_name_from_content(&doc.tree, input_button));
    assert!(!allows_name_from_content(&doc.tree, input_other));

    let anchor = doc.append_element(body, "a")?;
    let link = doc.append_element(body, "a")?;
    doc.tree.set_attribute(link, "href", "#")?;
    assert!(!allows_name_from_content(&doc.tree, anchor));
    assert!(allows_name_from_content(&doc.tree, link));
    Ok(())
}

// ============================================================================
// HIDDEN NODES (2A) AND LABEL REFERENCES (2B)
// ============================================================================

#[test]
fn test_hidden_node_named_only_through_reference() -> Result<()> {
    let mut doc = Document::new();
    let section = doc.append_element(doc.body(), "section")?;
    doc.tree.set_style(section, "display: none")?;
    let secret = element_with_id(&mut doc, section, "span", "secret")?;
    doc.append_text(secret, "Secret")?;
    let button = doc.append_element(doc.body(), "button")?;
    doc.tree.set_attribute(button, "aria-labelledby", "secret")?;
    doc.append_text(button, "Ignored")?;

    assert_eq!(compute_name(&doc.tree, secret, None), "");
    assert_eq!(compute_name(&doc.tree, button, None), "Secret");
    Ok(())
}

#[test]
fn test_mutual_labelledby_cycle_terminates() -> Result<()> {
    init_tracing();
    let mut doc = Document::new();
    let body = doc.body();
    let a = element_with_id(&mut doc, body, "div", "a")?;
    doc.tree.set_attribute(a, "aria-labelledby", "b")?;
    doc.append_text(a, "Alpha")?;
    let b = element_with_id(&mut doc, body, "div", "b")?;
    doc.tree.set_attribute(b, "aria-labelledby", "a")?;
    doc.append_text(b, "Beta")?;

    assert_eq!(compute_name(&doc.tree, a, None), "Beta");
    assert_eq!(compute_name(&doc.tree, b, None), "Alpha");
    Ok(())
}

#[test]
fn test_self_reference_uses_own_content() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let label = element_with_id(&mut doc, body, "span", "label")?;
    doc.append_text(label, "Delete")?;
    let button = element_with_id(&mut doc, body, "button", "del")?;
    doc.tree.set_attribute(button, "aria-labelledby", "del label")?;
    doc.append_text(button, "×")?;

    assert_eq!(compute_name(&doc.tree, button, None), "× Delete");
    Ok(())
}

#[test]
fn test_dangling_reference_falls_through() -> Result<()> {
    let mut doc = Document::new();
    let button = doc.append_element(doc.body(), "button")?;
    doc.tree.set_attribute(button, "aria-labelledby", "nowhere")?;
    doc.append_text(button, "Fallback")?;

    assert_eq!(compute_name(&doc.tree, button, None), "Fallback");
    Ok(())
}

// ============================================================================
// ARIA-LABEL (2C) AND NATIVE LABELS (2D)
// ============================================================================

#[test]
fn test_aria_label_beats_native_label() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let label = doc.append_element(body, "label")?;
    doc.tree.set_attribute(label, "for", "q")?;
    doc.append_text(label, "Query")?;
    let input = element_with_id(&mut doc, body, "input", "q")?;

    assert_eq!(compute_name(&doc.tree, input, None), "Query");

    doc.tree.set_attribute(input, "aria-label", "Search the site")?;
    assert_eq!(compute_name(&doc.tree, input, None), "Search the site");
    Ok(())
}

#[test]
fn test_hidden_label_does_not_name_control() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let label = doc.append_element(body, "label")?;
    doc.tree.set_attribute(label, "for", "q")?;
    doc.tree.set_attribute(label, "hidden", "")?;
    doc.append_text(label, "Query")?;
    let input = element_with_id(&mut doc, body, "input", "q")?;
    doc.tree.set_attribute(input, "title", "Search")?;

    assert_eq!(compute_name(&doc.tree, input, None), "Search");
    Ok(())
}

#[test]
fn test_table_and_figure_captions() -> Result<()> {
    let mut doc = Document::new();
    let table = doc.append_element(doc.body(), "table")?;
    let caption = doc.append_element(table, "caption")?;
    doc.append_text(caption, "Quarterly results")?;
    let figure = doc.append_element(doc.body(), "figure")?;
    doc.append_element(figure, "img")?;
    let figcaption = doc.append_element(figure, "figcaption")?;
    doc.append_text(figcaption, "A chart")?;

    assert_eq!(compute_name(&doc.tree, table, None), "Quarterly results");
    assert_eq!(compute_name(&doc.tree, figure, None), "A chart");
    Ok(())
}

#[test]
fn test_submit_without_value_uses_config() -> Result<()> {
    let mut doc = Document::new();
    let submit = doc.append_element(doc.body(), "input")?;
    doc.tree.set_attribute(submit, "type", "submit")?;

    assert_eq!(compute_name(&doc.tree, submit, None), "Submit");

    let config = NameConfig {
        submit_label: "Envoyer".to_string(),
        ..NameConfig::default()
    };
    let computer = NameComputer::new(&doc.tree).with_config(config);
    assert_eq!(computer.compute(submit, &Context::new()), "Envoyer");
    Ok(())
}

// ============================================================================
// EMBEDDED CONTROLS (2E)
// ============================================================================

#[test]
fn test_embedded_textbox_value_in_label() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let label = doc.append_element(body, "label")?;
    doc.tree.set_attribute(label, "for", "repeat")?;
    doc.append_text(label, "Flash the screen ")?;
    let times = doc.append_element(label, "input")?;
    doc.tree.set_attribute(times, "value", "5")?;
    doc.tree.set_attribute(times, "aria-label", "Count")?;
    doc.append_text(label, " times")?;
    let checkbox = element_with_id(&mut doc, body, "input", "repeat")?;
    doc.tree.set_attribute(checkbox, "type", "checkbox")?;

    assert_eq!(compute_name(&doc.tree, checkbox, None), "Flash the screen 5 times");
    Ok(())
}

#[test]
fn test_embedded_select_in_wrapping_label() -> Result<()> {
    let mut doc = Document::new();
    let label = doc.append_element(doc.body(), "label")?;
    doc.append_text(label, "Colour")?;
    let select = doc.append_element(label, "select")?;
    let red = doc.append_element(select, "option")?;
    doc.append_text(red, "Red")?;
    let blue = doc.append_element(select, "option")?;
    doc.append_text(blue, "Blue")?;
    doc.tree.set_attribute(blue, "selected", "")?;
    let checkbox = doc.append_element(label, "input")?;
    doc.tree.set_attribute(checkbox, "type", "checkbox")?;

    // The select is named by its label; the checkbox sees the select's value
    assert_eq!(compute_name(&doc.tree, select, None), "Colour");
    assert_eq!(compute_name(&doc.tree, checkbox, None), "Colour Blue");
    Ok(())
}

#[test]
fn test_hidden_option_read_inside_its_select() -> Result<()> {
    let mut doc = Document::new();
    let select = doc.append_element(doc.body(), "select")?;
    doc.tree.set_attribute(select, "role", "button")?;
    let one = doc.append_element(select, "option")?;
    doc.append_text(one, "One")?;
    let two = doc.append_element(select, "option")?;
    doc.tree.set_style(two, "display: none")?;
    doc.append_text(two, "Two")?;

    // Queried on its own the option is hidden
    assert_eq!(compute_name(&doc.tree, two, None), "");
    assert_eq!(
        compute_name(&doc.tree, two, Some(Context::new().part_of_name())),
        "Two"
    );
    // Gathered as content of the select, it is read
    assert_eq!(compute_name(&doc.tree, select, None), "One Two");

    // Outside a select there is no exemption
    let datalist = doc.append_element(doc.body(), "datalist")?;
    let stray = doc.append_element(datalist, "option")?;
    doc.tree.set_style(stray, "display: none")?;
    doc.append_text(stray, "Three")?;
    assert_eq!(
        compute_name(&doc.tree, stray, Some(Context::new().part_of_name())),
        ""
    );
    Ok(())
}

// ============================================================================
// TOOLTIP FALLBACK (2I)
// ============================================================================

#[test]
fn test_title_and_placeholder_fallback() -> Result<()> {
    let mut doc = Document::new();
    let input = doc.append_element(doc.body(), "input")?;
    doc.tree.set_attribute(input, "placeholder", "Email")?;
    let div = doc.append_element(doc.body(), "div")?;
    doc.tree.set_attribute(div, "title", "Toolbar")?;
    doc.append_text(div, "content is not a name here")?;

    assert_eq!(compute_name(&doc.tree, input, None), "Email");
    assert_eq!(compute_name(&doc.tree, div, None), "Toolbar");
    Ok(())
}

// ============================================================================
// ENTRY POINTS AND TRACE
// ============================================================================

#[test]
fn test_idempotent() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let label = element_with_id(&mut doc, body, "span", "l")?;
    doc.append_text(label, "  Save   draft ")?;
    let button = doc.append_element(body, "button")?;
    doc.tree.set_attribute(button, "aria-labelledby", "l")?;

    let first = compute_name(&doc.tree, button, None);
    let second = compute_name(&doc.tree, button, None);
    assert_eq!(first, "Save draft");
    assert_eq!(first, second);

    let computer = NameComputer::new(&doc.tree);
    assert_eq!(computer.compute_traced(button), computer.compute_traced(button));
    Ok(())
}

#[test]
fn test_explicit_context_is_honoured() -> Result<()> {
    let mut doc = Document::new();
    let span = doc.append_element(doc.body(), "span")?;
    doc.append_text(span, "Plain span")?;

    assert_eq!(compute_name(&doc.tree, span, None), "");
    assert_eq!(
        compute_name(&doc.tree, span, Some(Context::new().label_reference())),
        "Plain span"
    );
    Ok(())
}

#[test]
fn test_name_for_id() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let button = element_with_id(&mut doc, body, "button", "save")?;
    doc.append_text(button, "Save")?;

    assert_eq!(name_for_id(&doc.tree, "save")?, "Save");

    let err = name_for_id(&doc.tree, "missing").unwrap_err();
    assert!(matches!(err, A11yError::UnknownId(ref id) if id == "missing"));
    assert_eq!(err.to_string(), "No element with id \"missing\"");
    Ok(())
}

#[test]
fn test_trace_serializes_rule_codes() -> Result<()> {
    let mut doc = Document::new();
    let body = doc.body();
    let label = element_with_id(&mut doc, body, "span", "l")?;
    let text = doc.append_text(label, "Save")?;
    let button = doc.append_element(body, "button")?;
    doc.tree.set_attribute(button, "aria-labelledby", "l")?;

    let traced: AccessibleName<NodeId> = NameComputer::new(&doc.tree).compute_traced(button);
    assert_eq!(
        traced.rules_applied,
        vec![Rule::TextNode, Rule::NameFromContent, Rule::LabelledBy]
    );
    assert_eq!(traced.nodes_used, vec![text, label, button]);

    let json = serde_json::to_value(&traced)?;
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Save",
            "rules_applied": ["2G", "2F", "2B"],
        })
    );
    Ok(())
}
