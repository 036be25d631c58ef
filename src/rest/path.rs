//! Path template interpolation.
//!
//! Resource kinds declare their URLs as short templates. Three styles are
//! understood and may be mixed:
//!
//! - named placeholders: `/projects/{parent_id}/user_assignments/{id}`
//! - positional placeholders: `/contacts/%s`
//! - bare prefixes: `/clients/`, where the id is simply appended
//!
//! # Example
//!
//! ```rust
//! use harvest_api::rest::build_path;
//!
//! assert_eq!(build_path("/clients/", &[("id", "42")]), "/clients/42");
//! assert_eq!(build_path("/contacts/%s", &[("id", "7")]), "/contacts/7");
//! assert_eq!(
//!     build_path("/invoices/{parent_id}/payments/{id}", &[("parent_id", "3"), ("id", "")]),
//!     "/invoices/3/payments/",
//! );
//! ```

use std::fmt::Display;

const POSITIONAL: &str = "%s";

/// Builds a URL path from a template by interpolating ids.
///
/// Each `(name, value)` pair fills `{name}` if the template has it, otherwise
/// the next unfilled `%s`. Values that find no placeholder at all are
/// appended to the end, in order. The template is rendered in one pass, so
/// text inside an inserted value is never substituted.
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &[(&str, V)]) -> String {
    let mut positional = ids
        .iter()
        .filter(|(name, _)| !template.contains(&format!("{{{name}}}")))
        .map(|(_, value)| value.to_string());

    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        if let Some(tail) = rest.strip_prefix(POSITIONAL) {
            match positional.next() {
                Some(value) => result.push_str(&value),
                None => result.push_str(POSITIONAL),
            }
            rest = tail;
        } else if let Some((value, tail)) = named_at(rest, ids) {
            result.push_str(&value);
            rest = tail;
        } else {
            let mut chars = rest.chars();
            let Some(ch) = chars.next() else { break };
            result.push(ch);
            rest = chars.as_str();
        }
    }

    result.extend(positional);
    result
}

/// Matches a known `{name}` placeholder at the start of `rest`.
fn named_at<'t, V: Display>(rest: &'t str, ids: &[(&str, V)]) -> Option<(String, &'t str)> {
    let inner = rest.strip_prefix('{')?;
    let end = inner.find('}')?;
    let name = &inner[..end];
    ids.iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, value)| (value.to_string(), &inner[end + 1..]))
}

/// Returns `true` if the template contains any placeholder.
#[must_use]
pub fn has_placeholders(template: &str) -> bool {
    template.contains(POSITIONAL) || (template.contains('{') && template.contains('}'))
}
