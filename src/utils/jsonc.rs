//! Lenient decoding for tsconfig-style JSON.
//!
//! `tsconfig.json` and `jsconfig.json` routinely carry comments and trailing
//! commas, which `serde_json` rejects. These helpers strip both while leaving
//! string contents untouched.

use serde::de::DeserializeOwned;

/// Strips `//` and `/* */` comments and trailing commas from JSON text.
#[must_use]
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    while let Some(c) = chars.next() {
        if in_line_comment {
            if c == '\n' {
                in_line_comment = false;
                result.push(c);
            }
            continue;
        }

        if in_block_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block_comment = false;
            }
            continue;
        }

        if in_string {
            result.push(c);
            if c == '"' {
                in_string = false;
            } else if c == '\\' {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                in_line_comment = true;
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                in_block_comment = true;
            }
            '}' | ']' => {
                drop_trailing_comma(&mut result);
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

fn drop_trailing_comma(buffer: &mut String) {
    let trimmed_len = buffer.trim_end().len();
    if buffer[..trimmed_len].ends_with(',') {
        buffer.remove(trimmed_len - 1);
    }
}

/// Decodes JSON that may contain comments and trailing commas.
pub fn from_jsonc_str<T: DeserializeOwned>(content: &str) -> serde_json::Result<T> {
    serde_json::from_str(&strip_json_comments(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_strip_json_comments() {
        let input = r#"{
            // This is a comment
            "key": "value", /* inline comment */
            "key2": "value2"
        }"#;
        let result = strip_json_comments(input);
        assert!(!result.contains("//"));
        assert!(!result.contains("/*"));
        assert!(result.contains("\"key\""));
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let input = r#"{ "paths": { "@/*": ["./src/*"] }, "url": "https://x.dev//a" }"#;
        let value: Value = from_jsonc_str(input).unwrap();
        assert_eq!(value["paths"]["@/*"][0], "./src/*");
        assert_eq!(value["url"], "https://x.dev//a");
    }

    #[test]
    fn test_trailing_commas_removed() {
        let input = "{\n  \"compilerOptions\": {\n    \"paths\": { \"@/*\": [\"./src/*\",], },\n  },\n}";
        let value: Value = from_jsonc_str(input).unwrap();
        assert_eq!(value["compilerOptions"]["paths"]["@/*"][0], "./src/*");
    }
}
