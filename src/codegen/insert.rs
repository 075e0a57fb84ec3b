/// `INSERT` statement generation for a single table.

use super::types::TableDef;
use super::utils::{quote_identifier, RenderOptions};
use crate::value::Row;

/// Render one `INSERT` statement per row, each terminated by `;\n`.
///
/// Rows are not checked against the column list; a short or long row
/// produces a statement the database will reject.
pub fn generate_inserts(table: &TableDef, rows: &[Row], opts: &RenderOptions) -> String {
    let prefix = format!(
        "INSERT INTO {} ({}) VALUES (",
        quote_identifier(&table.name),
        table
            .columns
            .iter()
            .map(|c| quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut output = String::new();
    for row in rows {
        let values: Vec<String> = row.iter().map(|v| v.render(opts)).collect();
        output.push_str(&prefix);
        output.push_str(&values.join(", "));
        output.push_str(");\n");
    }

    tracing::debug!(table = %table.name, rows = rows.len(), "generated inserts");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{nations_id, states_id};
    use crate::value::SqlValue;

    fn nations() -> TableDef {
        TableDef::new("nations", &["nations_name", "nations_code"])
    }

    #[test]
    fn test_single_nation_exact_output() {
        let rows = vec![vec![SqlValue::text("United States"), SqlValue::text("US")]];

        let sql = generate_inserts(&nations(), &rows, &RenderOptions::default());

        assert_eq!(
            sql,
            "INSERT INTO `nations` (`nations_name`, `nations_code`) VALUES ('United States', 'US');\n"
        );
    }

    #[test]
    fn test_empty_rows_produce_nothing() {
        assert_eq!(generate_inserts(&nations(), &[], &RenderOptions::default()), "");
    }

    #[test]
    fn test_lookup_and_bool_values() {
        let table = TableDef::new(
            "persons",
            &["persons_legal_name", "persons_nations_id_fk", "persons_is_defunct"],
        );
        let rows = vec![vec![
            SqlValue::text("Mike Mol"),
            nations_id("US").into(),
            SqlValue::Bool(false),
        ]];

        let sql = generate_inserts(&table, &rows, &RenderOptions::default());

        assert_eq!(
            sql,
            "INSERT INTO `persons` (`persons_legal_name`, `persons_nations_id_fk`, `persons_is_defunct`) \
             VALUES ('Mike Mol', (SELECT nations_id FROM nations WHERE nations_code = 'US' LIMIT 1), false);\n"
        );
    }

    #[test]
    fn test_one_statement_per_row() {
        let table = TableDef::new("states", &["states_name", "states_code", "states_nations_id_fk"]);
        let rows: Vec<Row> = ["PA", "NJ", "FL"]
            .iter()
            .map(|code| vec![SqlValue::text("x"), SqlValue::text(*code), states_id(code).into()])
            .collect();

        let sql = generate_inserts(&table, &rows, &RenderOptions::default());

        assert_eq!(sql.lines().count(), 3);
        for line in sql.lines() {
            assert!(line.starts_with(
                "INSERT INTO `states` (`states_name`, `states_code`, `states_nations_id_fk`) VALUES ("
            ));
            assert!(line.ends_with(");"));
        }
    }

    #[test]
    fn test_mismatched_row_is_not_rejected() {
        let rows = vec![vec![SqlValue::text("Peru")]];

        let sql = generate_inserts(&nations(), &rows, &RenderOptions::default());

        assert_eq!(
            sql,
            "INSERT INTO `nations` (`nations_name`, `nations_code`) VALUES ('Peru');\n"
        );
    }

    #[test]
    fn test_escape_quotes_option() {
        let rows = vec![vec![SqlValue::text("Cote d'Ivoire"), SqlValue::text("CI")]];

        let sql = generate_inserts(&nations(), &rows, &RenderOptions { escape_quotes: true });

        assert!(sql.contains("VALUES ('Cote d''Ivoire', 'CI');"));
    }
}
