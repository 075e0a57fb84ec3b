//! The schooldb schema: every table the seed script writes, in emission order.
//!
//! Column lists follow the target schema exactly, including its hyphenated
//! table and column names.

use crate::codegen::types::{Catalog, TableDef};

/// Default database name for `USE`
pub const DEFAULT_DATABASE: &str = "schooldb";

pub fn schooldb() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.push(TableDef::new("nations", &["nations_name", "nations_code"]).with_id("nations_id"));

    catalog.push(
        TableDef::new("states", &["states_name", "states_code", "states_nations_id_fk"])
            .with_id("states_id")
            .referencing(&["nations"]),
    );

    catalog.push(
        TableDef::new(
            "cityzip_pairs",
            &["cityzip_pairs_city", "cityzip_pairs_zipcore", "cityzip_pairs_states_id_fk"],
        )
        .with_id("cityzip_pairs_id")
        .referencing(&["states"]),
    );

    catalog.push(
        TableDef::new(
            "addresses",
            &["addresses_line_1", "addresses_cityzip_pairs_fk", "addresses_is_defunct"],
        )
        .with_id("addresses_id")
        .referencing(&["cityzip_pairs"]),
    );

    catalog.push(
        TableDef::new(
            "institutions",
            &[
                "institutions_legal_name",
                "institutions_operating_state_fk",
                "institutions_alt_name",
                "institutions_mailing_fk",
                "institutions_web_url",
                "institutions_has_undergraduate_programs",
                "institutions_has_postgraduate_programs",
                "institutions_is_defunct",
            ],
        )
        .with_id("institutions_id")
        .referencing(&["states", "addresses"]),
    );

    catalog.push(
        TableDef::new(
            "semesters",
            &[
                "semesters_name",
                "semesters_start",
                "semesters_finish",
                "semesters_institutions_id_fk",
            ],
        )
        .with_id("semesters_id")
        .referencing(&["institutions"]),
    );

    catalog.push(
        TableDef::new(
            "persons",
            &[
                "persons_legal_name",
                "persons_nations_id_fk",
                "persons_state-issued_id_states_id_fk",
                "persons_personal_email",
                "persons_mailing_address_fk",
                "persons_is_defunct",
            ],
        )
        .with_id("persons_id")
        .referencing(&["nations", "states", "addresses"]),
    );

    for role in ["students", "instructors", "employees"] {
        let persons_fk = format!("{}_persons_id_fk", role);
        let institutions_fk = format!("{}_institutions_id_fk", role);
        let is_defunct = format!("{}_is_defunct", role);
        catalog.push(
            TableDef::new(
                role,
                &[persons_fk.as_str(), institutions_fk.as_str(), is_defunct.as_str()],
            )
            .with_id(&format!("{}_id", role))
            .referencing(&["persons", "institutions"]),
        );
    }

    // The instructor login column lacks the `_fk` suffix in the schema
    catalog.push(
        TableDef::new(
            "instructor-logins",
            &[
                "instructor-logins_instructors_id",
                "instructor-logins_institutions_id_fk",
                "instructor-logins_string",
                "instructor-logins_is_defunct",
            ],
        )
        .referencing(&["instructors", "institutions"]),
    );

    catalog.push(
        TableDef::new(
            "student-logins",
            &[
                "student-logins_students_id_fk",
                "student-logins_institutions_id_fk",
                "student-logins_string",
                "student-logins_is_defunct",
            ],
        )
        .referencing(&["students", "institutions"]),
    );

    catalog.push(
        TableDef::new(
            "employee-logins",
            &[
                "employee-logins_employees_id_fk",
                "employee-logins_institutions_id_fk",
                "employee-logins_string",
                "employee-logins_is_defunct",
            ],
        )
        .referencing(&["employees", "institutions"]),
    );

    catalog.push(
        TableDef::new(
            "departments",
            &[
                "depts_title",
                "depts_institutions_id_fk",
                "depts_chairperson_instructors_fk",
                "depts_is_defunct",
            ],
        )
        .with_id("depts_id")
        .referencing(&["institutions", "instructors"]),
    );

    catalog.push(
        TableDef::new(
            "courses",
            &[
                "courses_title",
                "courses_credit_hours",
                "courses_depts_id_fk",
                "courses_number",
                "courses_undergraduates_eligible",
                "courses_postgraduates_eligible",
                "courses_is_defunct",
            ],
        )
        .with_id("courses_id")
        .referencing(&["departments"]),
    );

    catalog.push(
        TableDef::new(
            "courses-prerequisites",
            &["courses_id_fk", "courses_requires_courses_id_fk"],
        )
        .referencing(&["courses"]),
    );

    catalog.push(
        TableDef::new(
            "tracks",
            &[
                "tracks_title",
                "tracks_institutions_id_fk",
                "tracks_is_undergraduate_program",
                "tracks_is_postgraduate_program",
                "tracks_is_defunct",
            ],
        )
        .with_id("tracks_id")
        .referencing(&["institutions"]),
    );

    catalog.push(
        TableDef::new(
            "tracks-prerequisites",
            &[
                "tracks-prerequisites_tracks_id_fk",
                "tracks-prerequisites_requires_courses_id_fk",
            ],
        )
        .referencing(&["tracks", "courses"]),
    );

    catalog.push(
        TableDef::new(
            "courses-equivalencies",
            &["courses-equivalencies_a", "courses-equivalencies_b"],
        )
        .referencing(&["courses"]),
    );

    catalog.push(
        TableDef::new("locations", &["locations_title", "locations_is_defunct"])
            .with_id("locations_id"),
    );

    // schedules_meetings_are_virtual replaces the usual is_defunct flag here
    catalog.push(
        TableDef::new(
            "schedules",
            &[
                "schedules_start_24hr",
                "schedules_end_24hr",
                "schedules_dow",
                "schedules_start",
                "schedules_finish",
                "schedules_meetings_are_virtual",
                "schedules_semesters_id_fk",
            ],
        )
        .with_id("schedules_id")
        .referencing(&["semesters"]),
    );

    catalog.push(
        TableDef::new(
            "tasks",
            &[
                "tasks_title",
                "tasks_max_points_towards_gpa",
                "tasks_points_count_towards_gpa",
            ],
        )
        .with_id("tasks_id"),
    );

    catalog.push(
        TableDef::new(
            "courses-tasks",
            &[
                "courses-tasks_tasks_id_fk",
                "courses-tasks_courses_id_fk",
                "courses-tasks_points_coefficient",
            ],
        )
        .referencing(&["tasks", "courses"]),
    );

    catalog.push(
        TableDef::new(
            "enrollments",
            &[
                "enrollments_schedules_id_fk",
                "enrollments_instructors_id_fk",
                "enrollments_students_id_fk",
                "enrollments_courses_id_fk",
                "enrollments_is_auditing",
            ],
        )
        .with_id("enrollments_id")
        .referencing(&["schedules", "instructors", "students", "courses"]),
    );

    catalog.push(
        TableDef::new(
            "grades",
            &[
                "grades_enrollments_id_fk",
                "grades_points_towards_gpa",
                "grades_tasks_id_fk",
                "grades_date_created",
                "grades_date_last_updated",
            ],
        )
        .referencing(&["enrollments", "tasks"]),
    );

    // Financial tables will reference services later
    catalog.push(
        TableDef::new(
            "services",
            &[
                "services_instructors_id_fk",
                "services_students_id_fk",
                "services_schedules_id_fk",
                "services_semesters_id_fk",
            ],
        )
        .with_id("services_id")
        .referencing(&["instructors", "students", "schedules", "semesters"]),
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::dependency_graph::DependencyGraph;

    #[test]
    fn test_schooldb_has_every_table() {
        let catalog = schooldb();

        assert_eq!(catalog.len(), 26);
        assert_eq!(catalog.names().first().map(String::as_str), Some("nations"));
        assert_eq!(catalog.names().last().map(String::as_str), Some("services"));
        for table in catalog.tables() {
            assert!(table.validate().is_ok(), "{} failed validation", table.name);
        }
    }

    #[test]
    fn test_schooldb_order_respects_references() {
        let catalog = schooldb();
        let graph = DependencyGraph::build(&catalog).unwrap();

        graph.verify_order(&catalog.names()).unwrap();

        let names = catalog.names();
        let pos = |t: &str| names.iter().position(|n| n == t).unwrap();
        assert!(pos("nations") < pos("states"));
        assert!(pos("states") < pos("cityzip_pairs"));
        assert!(pos("cityzip_pairs") < pos("addresses"));
        assert!(pos("enrollments") < pos("grades"));
    }

    #[test]
    fn test_membership_tables() {
        let catalog = schooldb();
        let students = catalog.get("students").unwrap();

        assert_eq!(
            students.columns,
            vec![
                "students_persons_id_fk",
                "students_institutions_id_fk",
                "students_is_defunct"
            ]
        );
        assert_eq!(students.id_column.as_deref(), Some("students_id"));
    }
}
