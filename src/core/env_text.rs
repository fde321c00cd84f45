//! Dotenv-style text helpers for the apply round trip.
//!
//! The parse/apply endpoints exchange env files as plain text; these
//! helpers build and split that text without touching the filesystem.

use crate::error::{Error, Result};

/// Parse dotenv text into key/value pairs.
///
/// Skips empty lines and comments. Values are trimmed and surrounding
/// quotes are stripped.
pub fn parse(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            pairs.push((key.to_string(), value.to_string()));
        }
    }

    pairs
}

/// Build dotenv text from key/value pairs.
///
/// Quotes values containing spaces or special characters.
pub fn build<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut output = String::new();

    for (key, value) in pairs {
        if value.contains(' ') || value.contains('#') || value.contains('=') {
            output.push_str(&format!("{}=\"{}\"\n", key, value));
        } else {
            output.push_str(&format!("{}={}\n", key, value));
        }
    }

    output
}

/// Parse a single `KEY=VALUE` argument.
///
/// # Errors
///
/// Returns `Error::InvalidPair` when the argument has no `=`, an empty
/// key, or a key that is not a valid environment variable name.
pub fn parse_pair(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| Error::InvalidPair(arg.to_string()))?;

    let key = key.trim();
    if key.is_empty() || !is_valid_key(key) {
        return Err(Error::InvalidPair(arg.to_string()));
    }

    Ok((key.to_string(), value.trim().to_string()))
}

/// Check that a key is a valid environment variable name.
///
/// Letters, digits and underscores; must not start with a digit.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "# comment\n\nFOO=bar\n  \nBAZ=qux\n";
        let pairs = parse(text);
        assert_eq!(
            pairs,
            vec![
                ("FOO".to_string(), "bar".to_string()),
                ("BAZ".to_string(), "qux".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_strips_quotes() {
        let pairs = parse("A=\"quoted value\"\nB='single'\n");
        assert_eq!(pairs[0].1, "quoted value");
        assert_eq!(pairs[1].1, "single");
    }

    #[test]
    fn test_parse_keeps_equals_in_value() {
        let pairs = parse("TOKEN=abc=def==\n");
        assert_eq!(pairs[0], ("TOKEN".to_string(), "abc=def==".to_string()));
    }

    #[test]
    fn test_build_quotes_special_values() {
        let text = build([("A", "plain"), ("B", "has space"), ("C", "x=y")]);
        assert_eq!(text, "A=plain\nB=\"has space\"\nC=\"x=y\"\n");
    }

    #[test]
    fn test_build_parse_roundtrip() {
        let text = build([("FOO", "bar"), ("MSG", "hello world")]);
        let pairs = parse(&text);
        assert_eq!(
            pairs,
            vec![
                ("FOO".to_string(), "bar".to_string()),
                ("MSG".to_string(), "hello world".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_pair_valid() {
        let (k, v) = parse_pair("FOO=bar baz").unwrap();
        assert_eq!(k, "FOO");
        assert_eq!(v, "bar baz");
    }

    #[test]
    fn test_parse_pair_missing_equals() {
        assert!(parse_pair("FOO").is_err());
    }

    #[test]
    fn test_parse_pair_bad_key() {
        assert!(parse_pair("1FOO=x").is_err());
        assert!(parse_pair("FO-O=x").is_err());
        assert!(parse_pair("=x").is_err());
    }

    #[test]
    fn test_parse_pair_empty_value_allowed() {
        let (k, v) = parse_pair("FOO=").unwrap();
        assert_eq!(k, "FOO");
        assert_eq!(v, "");
    }
}
