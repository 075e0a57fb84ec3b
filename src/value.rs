//! Cell values for seed rows.
//!
//! A row is an ordered list of [`SqlValue`]s matching the target table's
//! column order. Nothing checks the arity or the types; a mismatched row
//! produces SQL that the database rejects.

use crate::codegen::utils::{quote_literal, RenderOptions};
use crate::lookup::Lookup;
use std::fmt;

/// One cell of a seed row
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Single-quoted text (names, codes, timestamps)
    Text(String),
    /// Numeric literal, kept in its textual form so `100.00` stays `100.00`
    Number(String),
    Bool(bool),
    Null,
    /// Foreign key resolved at execution time through a subquery
    Lookup(Lookup),
}

/// A row of cell values in column order
pub type Row = Vec<SqlValue>;

impl SqlValue {
    pub fn text(s: impl Into<String>) -> Self {
        SqlValue::Text(s.into())
    }

    pub fn number(s: impl Into<String>) -> Self {
        SqlValue::Number(s.into())
    }

    /// Render this value as a SQL expression
    pub fn render(&self, opts: &RenderOptions) -> String {
        match self {
            SqlValue::Text(s) => quote_literal(s, opts),
            SqlValue::Number(n) => n.clone(),
            SqlValue::Bool(b) => b.to_string(),
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Lookup(lookup) => lookup.render(opts),
        }
    }

    /// Tables referenced by this value's lookup, if any
    pub fn referenced_tables(&self) -> Vec<&str> {
        match self {
            SqlValue::Lookup(lookup) => lookup.referenced_tables(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&RenderOptions::default()))
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl From<Lookup> for SqlValue {
    fn from(lookup: Lookup) -> Self {
        SqlValue::Lookup(lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::nations_id;

    #[test]
    fn test_render_scalars() {
        let opts = RenderOptions::default();

        assert_eq!(SqlValue::text("Fall 2021").render(&opts), "'Fall 2021'");
        assert_eq!(SqlValue::number("100.00").render(&opts), "100.00");
        assert_eq!(SqlValue::number("3.0").render(&opts), "3.0");
        assert_eq!(SqlValue::Bool(false).render(&opts), "false");
        assert_eq!(SqlValue::Null.render(&opts), "NULL");
    }

    #[test]
    fn test_render_lookup() {
        let value = SqlValue::from(nations_id("US"));

        assert_eq!(
            value.to_string(),
            "(SELECT nations_id FROM nations WHERE nations_code = 'US' LIMIT 1)"
        );
        assert_eq!(value.referenced_tables(), vec!["nations"]);
    }

    #[test]
    fn test_text_is_not_escaped_by_default() {
        let value = SqlValue::text("O'Hara");

        assert_eq!(value.to_string(), "'O'Hara'");
        assert_eq!(
            value.render(&RenderOptions { escape_quotes: true }),
            "'O''Hara'"
        );
    }
}
