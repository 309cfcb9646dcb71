//! Example: accessible names for a small hand-built form
//!
//! Run with `RUST_LOG=fos_a11y=trace` to see every rule that fires.

use fos_a11y::{NameComputer, name_for_id};
use fos_dom::{Document, PseudoElement};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut doc = Document::new();
    let body = doc.body();

    // <h2 id="heading">Billing</h2>
    let heading = doc.append_element(body, "h2")?;
    doc.tree.set_attribute(heading, "id", "heading")?;
    doc.append_text(heading, "Billing")?;

    // <label for="name">Name</label> <input id="name">
    let label = doc.append_element(body, "label")?;
    doc.tree.set_attribute(label, "for", "name")?;
    doc.append_text(label, "Name")?;
    let input = doc.append_element(body, "input")?;
    doc.tree.set_attribute(input, "id", "name")?;

    // <button id="pay">Pay</button> with a generated arrow
    let button = doc.append_element(body, "button")?;
    doc.tree.set_attribute(button, "id", "pay")?;
    doc.append_text(button, "Pay")?;
    doc.tree.set_generated_content(button, PseudoElement::After, " →")?;

    for id in ["heading", "name", "pay"] {
        println!("#{id}: {:?}", name_for_id(&doc.tree, id)?);
    }

    doc.tree.set_attribute(input, "aria-labelledby", "heading name")?;
    let traced = NameComputer::new(&doc.tree).compute_traced(input);
    println!("#name via aria-labelledby: {:?}", traced.name);
    println!("{}", serde_json::to_string_pretty(&traced)?);

    Ok(())
}
