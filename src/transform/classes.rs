//! Pure rewrites of Tailwind class strings.
//!
//! Both transforms work token by token on a whitespace-split class string and
//! re-join the tokens with single spaces. A token is read as
//! `<variants:><utility></modifier>`, e.g. `dark:hover:bg-primary/90`, where
//! the variant separator is the last `:` outside `[...]` brackets.

use crate::constants::COLOR_CLASS_PREFIXES;
use crate::registry::ColorPalette;

/// A class token split into its variant chain, utility and opacity modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassToken<'a> {
    /// Variant chain without the trailing colon, e.g. `dark:hover`
    pub variant: Option<&'a str>,
    pub utility: &'a str,
    /// Text after the first `/` outside brackets, e.g. `90`
    pub modifier: Option<&'a str>,
}

impl<'a> ClassToken<'a> {
    #[must_use]
    pub fn parse(token: &'a str) -> Self {
        let (variant, rest) = match last_top_level(token, ':') {
            Some(index) => (Some(&token[..index]), &token[index + 1..]),
            None => (None, token),
        };
        let (utility, modifier) = match first_top_level(rest, '/') {
            Some(index) => (&rest[..index], Some(&rest[index + 1..])),
            None => (rest, None),
        };
        Self {
            variant,
            utility,
            modifier,
        }
    }

    /// Renders the token with another utility, keeping variants and modifier.
    fn render(&self, leading_variant: Option<&str>, utility: &str) -> String {
        let mut out = String::new();
        for variant in [leading_variant, self.variant].into_iter().flatten() {
            out.push_str(variant);
            out.push(':');
        }
        out.push_str(utility);
        if let Some(modifier) = self.modifier {
            out.push('/');
            out.push_str(modifier);
        }
        out
    }
}

fn last_top_level(token: &str, needle: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut found = None;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            c if c == needle && depth == 0 => found = Some(index),
            _ => {}
        }
    }
    found
}

fn first_top_level(token: &str, needle: char) -> Option<usize> {
    let mut depth = 0usize;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            c if c == needle && depth == 0 => return Some(index),
            _ => {}
        }
    }
    None
}

/// Converts CSS-variable color utilities to static light/dark pairs.
///
/// `bg-primary` with a palette mapping `primary` to `("white", "black")`
/// becomes `bg-white dark:bg-black`. A standalone ` border ` token is first
/// expanded to ` border border-border `. Tokens whose color is missing from
/// either mode pass through unchanged.
#[must_use]
pub fn apply_color_mapping(classes: &str, palette: &ColorPalette) -> String {
    let expanded = classes.replace(" border ", " border border-border ");

    expanded
        .split_whitespace()
        .map(|token| map_color_token(token, palette))
        .collect::<Vec<_>>()
        .join(" ")
}

fn map_color_token(token: &str, palette: &ColorPalette) -> String {
    let parsed = ClassToken::parse(token);
    let Some(prefix) = COLOR_CLASS_PREFIXES.iter().find(|p| parsed.utility.starts_with(**p)) else {
        return token.to_string();
    };
    let Some((light, dark)) = palette.lookup(&parsed.utility[prefix.len()..]) else {
        return token.to_string();
    };

    format!(
        "{} {}",
        parsed.render(None, &format!("{prefix}{light}")),
        parsed.render(Some("dark"), &format!("{prefix}{dark}"))
    )
}

/// Prepends a Tailwind prefix to the utility segment of every token.
///
/// `hover:bg-red-500` with prefix `tw-` becomes `hover:tw-bg-red-500`.
#[must_use]
pub fn apply_prefix(classes: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return classes.split_whitespace().collect::<Vec<_>>().join(" ");
    }

    classes
        .split_whitespace()
        .map(|token| match last_top_level(token, ':') {
            Some(index) => format!("{}{prefix}{}", &token[..=index], &token[index + 1..]),
            None => format!("{prefix}{token}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
