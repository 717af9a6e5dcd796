//! Style tree data model.
//!
//! A [`StyleTree`] maps top-level selectors to [`StyleNode`]s. Each node maps
//! keys to either a property value ([`Scalar`]) or a nested node whose key is a
//! selector fragment. Both maps keep insertion order, which is the order rules
//! and declarations are emitted in.

use indexmap::IndexMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

/// The top-level set of rule groups, keyed by selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTree {
    pub rules: IndexMap<String, StyleNode>,
}

impl StyleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level rule group, consuming and returning the tree.
    pub fn rule(mut self, selector: impl Into<String>, node: StyleNode) -> Self {
        self.insert(selector, node);
        self
    }

    /// Insert a rule group. An existing selector keeps its position and gets the new node.
    pub fn insert(&mut self, selector: impl Into<String>, node: StyleNode) -> Option<StyleNode> {
        self.rules.insert(selector.into(), node)
    }

    pub fn get(&self, selector: &str) -> Option<&StyleNode> {
        self.rules.get(selector)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate `(selector, node)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleNode)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, StyleNode)> for StyleTree {
    fn from_iter<I: IntoIterator<Item = (String, StyleNode)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One level of declarations and nested selector blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleNode {
    pub entries: IndexMap<String, StyleValue>,
}

impl StyleNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property declaration:
    /// ```
    /// use nestcss_tree::StyleNode;
    ///
    /// let node = StyleNode::new().property("color", "red").property("z-index", 2);
    /// assert_eq!(node.len(), 2);
    /// ```
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(name, StyleValue::Property(value.into()));
        self
    }

    /// Add a nested selector block.
    pub fn nested(mut self, selector: impl Into<String>, node: StyleNode) -> Self {
        self.insert(selector, StyleValue::Nested(node));
        self
    }

    /// Insert an entry. Last write wins; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) -> Option<StyleValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, StyleValue)> for StyleNode {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A node entry: either a property value or a nested selector block.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// The key is a CSS property name.
    Property(Scalar),

    /// The key is a child selector fragment.
    Nested(StyleNode),
}

impl From<Scalar> for StyleValue {
    fn from(value: Scalar) -> Self {
        StyleValue::Property(value)
    }
}

impl From<StyleNode> for StyleValue {
    fn from(node: StyleNode) -> Self {
        StyleValue::Nested(node)
    }
}

// ---------------------------------------------------------------------------
// Scalar values
// ---------------------------------------------------------------------------

/// A leaf property value. Emitted as-is, never quoted or escaped.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => f.write_str(&format_number(*n)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Format a number the way a JS engine stringifies it.
///
/// Positional notation for decimal exponents in `-7..21`, otherwise
/// `d.ddde±x`. `-0` prints as `0`, non-finite values as `NaN` / `Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e-7`.
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return format!("{n}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{n}");
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exponent + 1;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }

    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.push_str(&"0".repeat((point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat((-point) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.abs().to_string());
    }
    out
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value as f64)
    }
}
