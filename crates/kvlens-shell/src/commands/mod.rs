//! Command grammar.
//!
//! Bucket names may contain spaces: a `bucket=` name runs up to the first
//! whitespace-led ` key=`, and a `use=` name is the rest of the line.

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use kvlens_core::config::Grammar;
use regex::Regex;
use std::sync::LazyLock;

static USE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^use=(.*)$").expect("valid use= pattern"));
static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^key=(.*)$").expect("valid key= pattern"));
static BUCKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^bucket=(.+?)(?:\s+key=(.*))?$").expect("valid bucket= pattern")
});

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // List every bucket name
    ShowBuckets,
    // Select a bucket for bare key queries; `None` clears the selection
    Use(Option<String>),
    // Prefix query against the selected bucket
    Key(String),
    // Prefix query against a named bucket (empty prefix = whole bucket)
    Query { bucket: String, prefix: String },
    // End the session
    Quit,
}

impl Command {
    /// Parse one input line under `grammar`.
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// line returns `Err("")` as a sentinel meaning "prompt again".
    pub fn parse(input: &str, grammar: Grammar) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        if input == "show buckets" {
            return Ok(Command::ShowBuckets);
        }
        if input == "quit" {
            return Ok(Command::Quit);
        }

        if grammar == Grammar::Full {
            if let Some(caps) = USE_RE.captures(input) {
                let name = caps[1].trim();
                return Ok(Command::Use((!name.is_empty()).then(|| name.to_string())));
            }
            if let Some(caps) = KEY_RE.captures(input) {
                return Ok(Command::Key(caps[1].to_string()));
            }
        }

        if let Some(caps) = BUCKET_RE.captures(input) {
            return Ok(Command::Query {
                bucket: caps[1].to_string(),
                prefix: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            });
        }

        Err(format!("Command not found: {input}"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn query(bucket: &str, prefix: &str) -> Command {
        Command::Query {
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
        }
    }

    #[rstest]
    #[case::show("show buckets", Command::ShowBuckets)]
    #[case::show_padded("  show buckets \n", Command::ShowBuckets)]
    #[case::quit("quit", Command::Quit)]
    #[case::use_bucket("use=users", Command::Use(Some("users".to_string())))]
    #[case::use_clear("use=", Command::Use(None))]
    #[case::key("key=u1", Command::Key("u1".to_string()))]
    #[case::key_empty("key=", Command::Key(String::new()))]
    #[case::bucket_key("bucket=users key=u1", query("users", "u1"))]
    #[case::bucket_key_spaces("bucket=users   key=a b", query("users", "a b"))]
    #[case::bucket_key_empty("bucket=users key=", query("users", ""))]
    #[case::bucket_only("bucket=users", query("users", ""))]
    #[case::bucket_with_space("bucket=my users", query("my users", ""))]
    #[case::bucket_with_space_key("bucket=my users key=u1", query("my users", "u1"))]
    #[case::use_with_space("use=my users", Command::Use(Some("my users".to_string())))]
    fn parses_full_grammar(#[case] input: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(input, Grammar::Full), Ok(expected));
    }

    #[rstest]
    #[case("use=users")]
    #[case("key=u1")]
    fn basic_grammar_rejects_selection(#[case] input: &str) {
        assert_eq!(
            Command::parse(input, Grammar::Basic),
            Err(format!("Command not found: {input}"))
        );
    }

    #[test]
    fn basic_grammar_keeps_direct_queries() {
        assert_eq!(
            Command::parse("bucket=users key=u", Grammar::Basic),
            Ok(query("users", "u"))
        );
        assert_eq!(Command::parse("show buckets", Grammar::Basic), Ok(Command::ShowBuckets));
    }

    #[test]
    fn empty_returns_sentinel_err() {
        assert_eq!(Command::parse("", Grammar::Full), Err(String::new()));
        assert_eq!(Command::parse("   \n", Grammar::Full), Err(String::new()));
    }

    #[test]
    fn unknown_names_the_input() {
        let err = Command::parse("frobnicate", Grammar::Full).unwrap_err();
        assert_eq!(err, "Command not found: frobnicate");
        assert!(Command::parse("bucket=", Grammar::Full).is_err());
    }
}
