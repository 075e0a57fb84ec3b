//! Natural-key resolvers.
//!
//! A [`Lookup`] renders to a parenthesized `SELECT <id> FROM <table> WHERE ...
//! LIMIT 1` subquery that is spliced into a `VALUES` clause, so seed rows can
//! reference each other by code or name instead of guessing auto-increment ids.
//! A lookup that matches nothing yields `NULL` when the script runs; nothing
//! detects that here.

use crate::codegen::utils::{bare_or_quoted_identifier, quote_literal, RenderOptions};
use crate::error::{FillerError, Result};
use std::fmt;

/// Right-hand side of a lookup filter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Single-quoted text
    Text(String),
    /// Inserted verbatim (numbers)
    Raw(String),
    /// Nested subquery
    Lookup(Box<Lookup>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: FilterValue,
}

/// Subquery resolving a natural key to a primary key
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    pub table: String,
    pub id_column: String,
    pub filters: Vec<Filter>,
}

/// Resolve `column = 'value'` in `table` to its `id_column`
pub fn resolve(table: &str, id_column: &str, column: &str, value: &str) -> Lookup {
    Lookup::new(table, id_column).where_text(column, value)
}

impl Lookup {
    pub fn new(table: impl Into<String>, id_column: impl Into<String>) -> Self {
        Lookup {
            table: table.into(),
            id_column: id_column.into(),
            filters: Vec::new(),
        }
    }

    /// Add a `column = 'value'` filter
    pub fn where_text(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            value: FilterValue::Text(value.into()),
        });
        self
    }

    /// Add an unquoted `column = value` filter
    pub fn where_raw(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            value: FilterValue::Raw(value.into()),
        });
        self
    }

    /// Add a `column = (SELECT ...)` filter
    pub fn where_lookup(mut self, column: impl Into<String>, lookup: Lookup) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            value: FilterValue::Lookup(Box::new(lookup)),
        });
        self
    }

    /// Render the subquery, without trailing newline or semicolon
    pub fn render(&self, opts: &RenderOptions) -> String {
        let mut sql = format!(
            "(SELECT {} FROM {}",
            bare_or_quoted_identifier(&self.id_column),
            bare_or_quoted_identifier(&self.table)
        );

        for (i, filter) in self.filters.iter().enumerate() {
            sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            sql.push_str(&bare_or_quoted_identifier(&filter.column));
            sql.push_str(" = ");
            match &filter.value {
                FilterValue::Text(s) => sql.push_str(&quote_literal(s, opts)),
                FilterValue::Raw(s) => sql.push_str(s),
                FilterValue::Lookup(nested) => sql.push_str(&nested.render(opts)),
            }
        }

        sql.push_str(" LIMIT 1)");
        sql
    }

    /// Every table this lookup reads, outermost first
    pub fn referenced_tables(&self) -> Vec<&str> {
        let mut tables = vec![self.table.as_str()];
        for filter in &self.filters {
            if let FilterValue::Lookup(nested) = &filter.value {
                for table in nested.referenced_tables() {
                    if !tables.contains(&table) {
                        tables.push(table);
                    }
                }
            }
        }
        tables
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&RenderOptions::default()))
    }
}

// schooldb resolvers

pub fn nations_id(code: &str) -> Lookup {
    resolve("nations", "nations_id", "nations_code", code)
}

pub fn states_id(code: &str) -> Lookup {
    resolve("states", "states_id", "states_code", code)
}

pub fn cityzip_pairs_id(city: &str, zipcore: &str) -> Lookup {
    resolve("cityzip_pairs", "cityzip_pairs_id", "cityzip_pairs_city", city)
        .where_text("cityzip_pairs_zipcore", zipcore)
}

pub fn addresses_id(line_1: &str) -> Lookup {
    resolve("addresses", "addresses_id", "addresses_line_1", line_1)
}

pub fn institutions_id(alt_name: &str) -> Lookup {
    resolve("institutions", "institutions_id", "institutions_alt_name", alt_name)
}

pub fn semesters_id(name: &str, institution_alt_name: &str) -> Lookup {
    resolve("semesters", "semesters_id", "semesters_name", name)
        .where_lookup("semesters_institutions_id_fk", institutions_id(institution_alt_name))
}

pub fn persons_id(legal_name: &str) -> Lookup {
    resolve("persons", "persons_id", "persons_legal_name", legal_name)
}

/// Membership tables (students, instructors, employees) share one shape:
/// a person at an institution.
fn membership_id(table: &str, legal_name: &str, institution_alt_name: &str) -> Lookup {
    Lookup::new(table, format!("{}_id", table))
        .where_lookup(format!("{}_persons_id_fk", table), persons_id(legal_name))
        .where_lookup(
            format!("{}_institutions_id_fk", table),
            institutions_id(institution_alt_name),
        )
}

pub fn students_id(legal_name: &str, institution_alt_name: &str) -> Lookup {
    membership_id("students", legal_name, institution_alt_name)
}

pub fn instructors_id(legal_name: &str, institution_alt_name: &str) -> Lookup {
    membership_id("instructors", legal_name, institution_alt_name)
}

pub fn employees_id(legal_name: &str, institution_alt_name: &str) -> Lookup {
    membership_id("employees", legal_name, institution_alt_name)
}

pub fn departments_id(title: &str, institution_alt_name: &str) -> Lookup {
    resolve("departments", "depts_id", "depts_title", title)
        .where_lookup("depts_institutions_id_fk", institutions_id(institution_alt_name))
}

/// Course numbers are compared unquoted.
pub fn courses_id(department_title: &str, institution_alt_name: &str, number: &str) -> Lookup {
    Lookup::new("courses", "courses_id")
        .where_lookup(
            "courses_depts_id_fk",
            departments_id(department_title, institution_alt_name),
        )
        .where_raw("courses_number", number)
}

pub fn tracks_id(title: &str, institution_alt_name: &str) -> Lookup {
    resolve("tracks", "tracks_id", "tracks_title", title)
        .where_lookup("tracks_institutions_id_fk", institutions_id(institution_alt_name))
}

pub fn locations_id(title: &str) -> Lookup {
    resolve("locations", "locations_id", "locations_title", title)
}

pub fn schedules_id(start_24hr: &str, end_24hr: &str) -> Lookup {
    resolve("schedules", "schedules_id", "schedules_start_24hr", start_24hr)
        .where_text("schedules_end_24hr", end_24hr)
}

pub fn tasks_id(title: &str) -> Lookup {
    resolve("tasks", "tasks_id", "tasks_title", title)
}

pub fn enrollments_id(
    legal_name: &str,
    institution_alt_name: &str,
    start_24hr: &str,
    end_24hr: &str,
) -> Lookup {
    Lookup::new("enrollments", "enrollments_id")
        .where_lookup("enrollments_schedules_id_fk", schedules_id(start_24hr, end_24hr))
        .where_lookup(
            "enrollments_students_id_fk",
            students_id(legal_name, institution_alt_name),
        )
}

/// Call a schooldb resolver by name, e.g. `("students_id", ["Luis Rico", "BU"])`
pub fn resolve_named(name: &str, args: &[String]) -> Result<Lookup> {
    let expected = match name {
        "nations_id" | "states_id" | "addresses_id" | "institutions_id" | "persons_id"
        | "locations_id" | "tasks_id" => 1,
        "cityzip_pairs_id" | "semesters_id" | "students_id" | "instructors_id"
        | "employees_id" | "departments_id" | "tracks_id" | "schedules_id" => 2,
        "courses_id" => 3,
        "enrollments_id" => 4,
        _ => return Err(FillerError::UnknownResolver(name.to_string())),
    };

    if args.len() != expected {
        return Err(FillerError::ResolverArity {
            name: name.to_string(),
            expected,
            actual: args.len(),
        });
    }

    let a: Vec<&str> = args.iter().map(String::as_str).collect();
    let lookup = match name {
        "nations_id" => nations_id(a[0]),
        "states_id" => states_id(a[0]),
        "addresses_id" => addresses_id(a[0]),
        "institutions_id" => institutions_id(a[0]),
        "persons_id" => persons_id(a[0]),
        "locations_id" => locations_id(a[0]),
        "tasks_id" => tasks_id(a[0]),
        "cityzip_pairs_id" => cityzip_pairs_id(a[0], a[1]),
        "semesters_id" => semesters_id(a[0], a[1]),
        "students_id" => students_id(a[0], a[1]),
        "instructors_id" => instructors_id(a[0], a[1]),
        "employees_id" => employees_id(a[0], a[1]),
        "departments_id" => departments_id(a[0], a[1]),
        "tracks_id" => tracks_id(a[0], a[1]),
        "schedules_id" => schedules_id(a[0], a[1]),
        "courses_id" => courses_id(a[0], a[1], a[2]),
        _ => enrollments_id(a[0], a[1], a[2], a[3]),
    };

    Ok(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nations_id_exact_output() {
        assert_eq!(
            nations_id("US").to_string(),
            "(SELECT nations_id FROM nations WHERE nations_code = 'US' LIMIT 1)"
        );
    }

    #[test]
    fn test_resolve_is_single_filter() {
        let lookup = resolve("tasks", "tasks_id", "tasks_title", "HRM 101 QUIZ 1");

        assert_eq!(lookup.filters.len(), 1);
        assert_eq!(
            lookup.to_string(),
            "(SELECT tasks_id FROM tasks WHERE tasks_title = 'HRM 101 QUIZ 1' LIMIT 1)"
        );
    }

    #[test]
    fn test_cityzip_pairs_id_two_filters() {
        assert_eq!(
            cityzip_pairs_id("Tampa", "33609").to_string(),
            "(SELECT cityzip_pairs_id FROM cityzip_pairs WHERE cityzip_pairs_city = 'Tampa' \
             AND cityzip_pairs_zipcore = '33609' LIMIT 1)"
        );
    }

    #[test]
    fn test_students_id_composes_person_and_institution() {
        assert_eq!(
            students_id("Luis Rico", "BU").to_string(),
            "(SELECT students_id FROM students WHERE students_persons_id_fk = \
             (SELECT persons_id FROM persons WHERE persons_legal_name = 'Luis Rico' LIMIT 1) \
             AND students_institutions_id_fk = \
             (SELECT institutions_id FROM institutions WHERE institutions_alt_name = 'BU' LIMIT 1) \
             LIMIT 1)"
        );
    }

    #[test]
    fn test_courses_id_number_is_unquoted() {
        let sql = courses_id("HRM", "BU", "101").to_string();

        assert!(sql.starts_with("(SELECT courses_id FROM courses WHERE courses_depts_id_fk = (SELECT depts_id FROM departments"));
        assert!(sql.ends_with(" AND courses_number = 101 LIMIT 1)"));
    }

    #[test]
    fn test_referenced_tables_include_nested() {
        let lookup = enrollments_id("Casey Bro", "BU", "0800", "0950");

        assert_eq!(
            lookup.referenced_tables(),
            vec!["enrollments", "schedules", "students", "persons", "institutions"]
        );
    }

    #[test]
    fn test_every_lookup_is_bounded_select() {
        let lookups = vec![
            nations_id("US"),
            states_id("PA"),
            addresses_id("1111 Lake Dr"),
            semesters_id("Fall 2021", "BU"),
            instructors_id("Amy Ante", "BU"),
            employees_id("Mike Mol", "BU"),
            tracks_id("HRM TRACK", "BU"),
            locations_id("Building A"),
            schedules_id("0800", "0950"),
        ];

        for lookup in lookups {
            let sql = lookup.to_string();
            assert!(sql.starts_with("(SELECT "), "{}", sql);
            assert!(sql.ends_with(" LIMIT 1)"), "{}", sql);
            assert!(sql.contains(&format!(" FROM {} WHERE ", lookup.table)), "{}", sql);
            assert!(!sql.ends_with(';') && !sql.ends_with('\n'));
        }
    }

    #[test]
    fn test_hyphenated_names_are_quoted() {
        let lookup = resolve("student-logins", "student-logins_id", "student-logins_string", "x");

        assert_eq!(
            lookup.to_string(),
            "(SELECT `student-logins_id` FROM `student-logins` WHERE `student-logins_string` = 'x' LIMIT 1)"
        );
    }

    #[test]
    fn test_resolve_named() {
        let args = vec!["HRM".to_string(), "BU".to_string(), "201".to_string()];
        assert_eq!(resolve_named("courses_id", &args).unwrap(), courses_id("HRM", "BU", "201"));

        let err = resolve_named("courses_id", &args[..2]).unwrap_err();
        assert!(matches!(err, FillerError::ResolverArity { expected: 3, actual: 2, .. }));

        let err = resolve_named("grades_id", &[]).unwrap_err();
        assert!(matches!(err, FillerError::UnknownResolver(_)));
    }
}
