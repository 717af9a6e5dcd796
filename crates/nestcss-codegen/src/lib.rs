//! nestcss Code Generator
//!
//! Compiles a nested style tree into flat CSS text. Each node's declarations
//! become one rule block under its composed selector, followed by the blocks of
//! its nested selectors. Nothing is inserted between blocks.
//!
//! ```text
//! StyleTree → to_css_text() → "a{color:red;}a:hover{color:blue;}"
//! ```
//!
//! ```
//! use nestcss_codegen::to_css_text;
//! use nestcss_tree::{StyleNode, StyleTree};
//!
//! let tree = StyleTree::new().rule(
//!     "a",
//!     StyleNode::new()
//!         .property("color", "red")
//!         .nested("&:hover", StyleNode::new().property("color", "blue")),
//! );
//! assert_eq!(to_css_text(&tree), "a{color:red;}a:hover{color:blue;}");
//! ```

pub mod css;
pub mod selector;

pub use css::{generate_rules, write_rules};
pub use selector::compose_selector;

use nestcss_tree::StyleTree;

/// Compile a style tree into CSS text.
///
/// Top-level selectors are emitted in tree order. The tree is only read.
pub fn to_css_text(tree: &StyleTree) -> String {
    let mut out = String::new();
    write_css_text(tree, &mut out);
    out
}

/// Compile a style tree, appending the CSS text to `out`.
pub fn write_css_text(tree: &StyleTree, out: &mut String) {
    let start = out.len();

    for (selector, node) in tree.iter() {
        css::write_rules(node, Some(selector), out);
    }

    log::debug!(
        "compiled {} rule group(s) into {} byte(s) of CSS",
        tree.len(),
        out.len() - start
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestcss_tree::{from_json, StyleNode};
    use pretty_assertions::assert_eq;

    fn compile(json: &str) -> String {
        to_css_text(&from_json(json).unwrap())
    }

    // =========================================================================
    // Core properties
    // =========================================================================

    #[test]
    fn test_flat_block() {
        assert_eq!(
            compile(r#"{"a": {"color": "red", "x": 1}}"#),
            "a{color:red;x:1;}"
        );
    }

    #[test]
    fn test_nesting_space_join() {
        assert_eq!(
            compile(r#"{"a": {"b": {"color": "red"}}}"#),
            "a b{color:red;}"
        );
    }

    #[test]
    fn test_ampersand_hover() {
        assert_eq!(
            compile(r#"{"a": {"&:hover": {"color": "red"}}}"#),
            "a:hover{color:red;}"
        );
    }

    #[test]
    fn test_ampersand_first_occurrence_only() {
        assert_eq!(
            compile(r#"{"a": {"& + &": {"color": "red"}}}"#),
            "a + &{color:red;}"
        );
    }

    #[test]
    fn test_properties_before_children() {
        assert_eq!(
            compile(r#"{"a": {"color": "red", "b": {"x": 1}}}"#),
            "a{color:red;}a b{x:1;}"
        );
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(to_css_text(&StyleTree::new()), "");
        assert_eq!(compile("{}"), "");
    }

    #[test]
    fn test_empty_node_contributes_nothing() {
        assert_eq!(compile(r#"{"a": {}, "b": {"x": 1}}"#), "b{x:1;}");
    }

    #[test]
    fn test_top_level_order_preserved() {
        assert_eq!(
            compile(r#"{"z": {"x": 1}, "a": {"y": 2}}"#),
            "z{x:1;}a{y:2;}"
        );
    }

    #[test]
    fn test_repeated_calls_identical() {
        let tree = from_json(
            r#"{".btn": {"padding": 4, "&:hover": {"color": "red"}, "span": {"x": 1}}}"#,
        )
        .unwrap();
        let first = to_css_text(&tree);
        let second = to_css_text(&tree);
        assert_eq!(first, second);
        assert_eq!(first, ".btn{padding:4;}.btn:hover{color:red;}.btn span{x:1;}");
    }

    // =========================================================================
    // Edge cases
    // =========================================================================

    #[test]
    fn test_top_level_key_emitted_verbatim() {
        // Root selectors are not trimmed in their own block; composition trims them.
        assert_eq!(
            compile(r#"{" a ": {"x": 1, "b": {"y": 2}}}"#),
            " a {x:1;}a b{y:2;}"
        );
    }

    #[test]
    fn test_empty_selector_keys() {
        assert_eq!(compile(r#"{"": {"x": 1, "": {"y": 2}}}"#), "{x:1;} {y:2;}");
    }

    #[test]
    fn test_empty_property_name_and_value() {
        assert_eq!(compile(r#"{"a": {"": ""}}"#), "a{:;}");
    }

    #[test]
    fn test_mixed_tree() {
        let css = compile(
            r##"{
                ".card": {
                    "padding": "8px",
                    ".title": {"font-weight": 700, "&:hover": {"color": "blue"}},
                    ".dark &": {"background": "#111"}
                },
                "body": {"margin": 0}
            }"##,
        );
        assert_eq!(
            css,
            ".card{padding:8px;}.card .title{font-weight:700;}.card .title:hover{color:blue;}.dark .card{background:#111;}body{margin:0;}"
        );
    }

    #[test]
    fn test_write_css_text_appends() {
        let tree = StyleTree::new().rule("a", StyleNode::new().property("x", 1));
        let mut out = String::from("b{y:2;}");
        write_css_text(&tree, &mut out);
        assert_eq!(out, "b{y:2;}a{x:1;}");
        assert_eq!(to_css_text(&tree), "a{x:1;}");
    }

    #[test]
    fn test_input_not_mutated() {
        let tree = StyleTree::new().rule(
            "a",
            StyleNode::new().nested("b", StyleNode::new().property("x", 1)),
        );
        let before = tree.clone();
        let _ = to_css_text(&tree);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_concurrent_callers() {
        let tree = std::sync::Arc::new(
            StyleTree::new().rule("a", StyleNode::new().property("x", 1)),
        );
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tree = std::sync::Arc::clone(&tree);
                std::thread::spawn(move || to_css_text(&tree))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "a{x:1;}");
        }
    }
}
