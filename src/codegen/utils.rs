//! Quoting and naming helpers shared by the statement and lookup renderers.

use convert_case::{Case, Casing};
use regex::Regex;
use std::sync::OnceLock;

/// Options controlling how literal values are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Double embedded single quotes in text literals.
    pub escape_quotes: bool,
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("identifier pattern is valid")
    })
}

fn bare_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("bare word pattern is valid"))
}

/// Whether a table or column name can be backtick-quoted as-is
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_pattern().is_match(name)
}

/// Quote an identifier with backticks
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name)
}

/// Leave plain words bare, backtick-quote anything else (e.g. hyphenated names)
pub fn bare_or_quoted_identifier(name: &str) -> String {
    if bare_word_pattern().is_match(name) {
        name.to_string()
    } else {
        quote_identifier(name)
    }
}

/// Escape a string for use inside a single-quoted SQL literal
pub fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Render a single-quoted SQL text literal
pub fn quote_literal(s: &str, opts: &RenderOptions) -> String {
    if opts.escape_quotes {
        format!("'{}'", escape_sql_string(s))
    } else {
        format!("'{}'", s)
    }
}

/// Normalize a table name for lookups (`instructor-logins` == `instructor_logins`)
pub fn normalize_table_name(name: &str) -> String {
    name.to_case(Case::Snake)
}
