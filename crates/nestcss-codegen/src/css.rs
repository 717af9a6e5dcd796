//! CSS rule generator.
//!
//! Walks one style node and emits `selector{prop:value;...}` blocks: first the
//! node's own declarations, then every nested block under its composed
//! selector.

use crate::selector::compose_selector;
use nestcss_tree::{Scalar, StyleNode, StyleValue};

/// Generate the rule blocks for a node and everything nested under it.
///
/// A `None` parent emits an empty selector in front of the node's own
/// declarations. `to_css_text` never does this, since every top-level node has
/// its selector key as parent.
pub fn generate_rules(node: &StyleNode, parent_selector: Option<&str>) -> String {
    let mut out = String::new();
    write_rules(node, parent_selector, &mut out);
    out
}

/// Like [`generate_rules`], appending to `out`.
pub fn write_rules(node: &StyleNode, parent_selector: Option<&str>, out: &mut String) {
    let mut properties: Vec<(&str, &Scalar)> = Vec::new();
    let mut children: Vec<(&str, &StyleNode)> = Vec::new();

    for (key, value) in node.iter() {
        match value {
            StyleValue::Property(value) => properties.push((key, value)),
            StyleValue::Nested(child) => children.push((key, child)),
        }
    }

    if !properties.is_empty() {
        let selector = parent_selector.unwrap_or("");
        log::trace!("rule `{selector}` with {} declaration(s)", properties.len());

        out.push_str(selector);
        out.push('{');
        for (name, value) in &properties {
            out.push_str(name);
            out.push(':');
            out.push_str(&value.to_string());
            out.push(';');
        }
        out.push('}');
    }

    for (key, child) in children {
        let composed = compose_selector(key, parent_selector);
        write_rules(child, Some(&composed), out);
    }
}
