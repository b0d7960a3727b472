//! `<name>` placeholder substitution from session variables.

use crate::vars::SessionVariables;

/// Replace each `<name>` whose name is a known variable with its value.
///
/// Unknown placeholders stay as typed so they can be edited after prefill.
pub fn fill_placeholders(template: &str, vars: &SessionVariables) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start + 1..];
        let Some(end) = candidate.find('>') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &candidate[..end];
        match vars.get(name) {
            Some(value) if is_placeholder_name(name) => {
                out.push_str(value);
                rest = &candidate[end + 1..];
            }
            _ => {
                out.push('<');
                rest = candidate;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Placeholder names never contain whitespace or angle brackets.
fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(|c: char| c.is_whitespace() || c == '<' || c == '>')
}
