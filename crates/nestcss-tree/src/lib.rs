//! nestcss style tree
//!
//! Typed model for nested style descriptions, plus the boundary that turns
//! untyped JSON into it. Property values and nested selector blocks are
//! distinguished once, here, so the compiler only ever sees the tagged
//! [`StyleValue`] variants.
//!
//! # Example
//!
//! ```
//! let tree = nestcss_tree::from_json(r#"{"a": {"color": "red"}}"#).unwrap();
//! assert_eq!(tree.len(), 1);
//! ```

pub mod convert;
pub mod node;

pub use convert::from_json_value;
pub use node::{format_number, Scalar, StyleNode, StyleTree, StyleValue};

/// Style tree error, with position information when parsed from JSON text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Style tree error at line {line}, column {column}: {message}")]
pub struct TreeError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl TreeError {
    /// An error with no source position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: 0,
            column: 0,
        }
    }
}

impl From<serde_json::Error> for TreeError {
    fn from(e: serde_json::Error) -> Self {
        let mut message = e.to_string();
        // serde_json appends its own position; we carry it in the fields instead.
        if let Some(idx) = message.rfind(" at line ") {
            message.truncate(idx);
        }
        Self {
            message,
            line: e.line(),
            column: e.column(),
        }
    }
}

/// Parse JSON source text into a style tree.
///
/// Key order in the document is kept at every depth.
pub fn from_json(source: &str) -> Result<StyleTree, TreeError> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    from_json_value(value)
}
