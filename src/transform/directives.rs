//! Removal of the leading `"use client"` directive.

const CLIENT_DIRECTIVES: &[&str] = &["\"use client\"", "'use client'"];

/// Strips a `"use client"` directive that is the first statement of `source`.
///
/// Leading whitespace and comments before the directive are kept. The directive
/// itself, an optional `;` and the whitespace that follows are removed.
/// Sources without a leading directive are returned unchanged.
#[must_use]
pub fn strip_client_directive(source: &str) -> String {
    let start = skip_trivia(source);
    let rest = &source[start..];

    let Some(directive) = CLIENT_DIRECTIVES.iter().find(|d| rest.starts_with(**d)) else {
        return source.to_string();
    };

    let after = &rest[directive.len()..];
    let after = after.trim_start_matches([' ', '\t']);
    let after = after.strip_prefix(';').unwrap_or(after);
    let after = after.trim_start();

    format!("{}{after}", &source[..start])
}

/// Byte offset of the first character that is neither whitespace nor comment.
fn skip_trivia(source: &str) -> usize {
    let mut offset = 0;
    loop {
        let rest = &source[offset..];
        let trimmed = rest.trim_start();
        offset += rest.len() - trimmed.len();

        if trimmed.starts_with("//") {
            offset += trimmed.find('\n').map_or(trimmed.len(), |end| end + 1);
        } else if let Some(body) = trimmed.strip_prefix("/*") {
            offset += body.find("*/").map_or(trimmed.len(), |end| end + 4);
        } else {
            return offset;
        }
    }
}
