//! Conversion from untyped JSON values into the typed style tree.
//!
//! This is the only place where a value's runtime type decides whether it is a
//! property or a nested block. Strings and numbers become properties, objects
//! become nested nodes, and everything else is rejected with the key path that
//! led to it.

use crate::node::{Scalar, StyleNode, StyleTree, StyleValue};
use crate::TreeError;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::{Map, Value};

/// Convert a parsed JSON document into a style tree.
pub fn from_json_value(value: Value) -> Result<StyleTree, TreeError> {
    let root = match value {
        Value::Object(root) => root,
        other => {
            return Err(TreeError::new(format!(
                "expected an object of rule groups, found {}",
                describe(&other)
            )))
        }
    };

    let mut tree = StyleTree::new();
    for (selector, node) in root {
        let entries = match node {
            Value::Object(entries) => entries,
            other => {
                return Err(TreeError::new(format!(
                    "`{selector}`: expected a style node object, found {}",
                    describe(&other)
                )))
            }
        };
        let mut path = vec![selector.clone()];
        let node = convert_node(entries, &mut path)?;
        tree.insert(selector, node);
    }

    log::debug!("loaded style tree with {} rule group(s)", tree.len());
    Ok(tree)
}

fn convert_node(
    entries: Map<String, Value>,
    path: &mut Vec<String>,
) -> Result<StyleNode, TreeError> {
    let mut node = StyleNode::new();

    for (key, value) in entries {
        let converted = match value {
            Value::String(s) => StyleValue::Property(Scalar::Text(s)),
            Value::Number(n) => match n.as_f64() {
                Some(n) => StyleValue::Property(Scalar::Number(n)),
                None => {
                    return Err(TreeError::new(format!(
                        "`{}`: number {n} is not representable",
                        join_path(path, &key)
                    )))
                }
            },
            Value::Object(children) => {
                path.push(key.clone());
                let child = convert_node(children, path)?;
                path.pop();
                StyleValue::Nested(child)
            }
            other => {
                return Err(TreeError::new(format!(
                    "`{}`: expected a number, a string, or a nested style node, found {}",
                    join_path(path, &key),
                    describe(&other)
                )))
            }
        };
        node.insert(key, converted);
    }

    Ok(node)
}

fn join_path(path: &[String], key: &str) -> String {
    let mut joined = path.join(" > ");
    joined.push_str(" > ");
    joined.push_str(key);
    joined
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// serde integration
// ---------------------------------------------------------------------------

impl<'de> Deserialize<'de> for StyleTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_json_value(value).map_err(|e| D::Error::custom(e.message))
    }
}
