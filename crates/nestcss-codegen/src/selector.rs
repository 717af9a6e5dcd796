//! Selector composition.
//!
//! Joins a nested selector fragment onto its ancestor's selector, either by
//! substituting the parent for `&` or with a descendant combinator (a space).

/// Compose a child selector fragment with an optional parent selector.
///
/// Both sides are trimmed. If the fragment contains `&`, only the first `&`
/// is replaced with the parent and nothing else is added. Otherwise the result
/// is `"<parent> <fragment>"`. A missing parent is treated as the empty string.
///
/// ```
/// use nestcss_codegen::compose_selector;
///
/// assert_eq!(compose_selector("&:hover", Some("a")), "a:hover");
/// assert_eq!(compose_selector(" b ", Some(" a ")), "a b");
/// assert_eq!(compose_selector("& + &", Some("a")), "a + &");
/// ```
pub fn compose_selector(selector: &str, parent_selector: Option<&str>) -> String {
    let selector = trim_selector(selector);
    let parent = parent_selector.map(trim_selector).unwrap_or("");

    if selector.contains('&') {
        // Single replacement: later `&`s stay literal.
        return selector.replacen('&', parent, 1);
    }

    format!("{parent} {selector}")
}

/// Trim Unicode whitespace plus the byte order mark, which JS `trim` also strips.
fn trim_selector(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
