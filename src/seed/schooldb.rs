//! Built-in sample rows for schooldb.
//!
//! Every foreign key is written as a natural-key lookup. Rows follow the
//! column order declared in [`crate::catalog::schooldb`].

use super::SeedData;
use crate::lookup::*;
use crate::value::{Row, SqlValue};

fn t(s: &str) -> SqlValue {
    SqlValue::text(s)
}

fn n(s: &str) -> SqlValue {
    SqlValue::number(s)
}

fn b(v: bool) -> SqlValue {
    SqlValue::Bool(v)
}

fn l(lookup: Lookup) -> SqlValue {
    SqlValue::Lookup(lookup)
}

/// The full schooldb dataset
pub fn seed_data() -> SeedData {
    let mut seed = SeedData::new();

    seed.insert("nations", nations());
    seed.insert("states", states());
    seed.insert("cityzip_pairs", cityzip_pairs());
    seed.insert("addresses", addresses());
    seed.insert("institutions", institutions());
    seed.insert("semesters", semesters());
    seed.insert("persons", persons());
    seed.insert("students", students());
    seed.insert("instructors", instructors());
    seed.insert("employees", employees());
    seed.insert("instructor-logins", instructor_logins());
    seed.insert("student-logins", student_logins());
    seed.insert("employee-logins", employee_logins());
    seed.insert("departments", departments());
    seed.insert("courses", courses());
    seed.insert("courses-prerequisites", courses_prerequisites());
    seed.insert("tracks", tracks());
    seed.insert("tracks-prerequisites", tracks_prerequisites());
    seed.insert("courses-equivalencies", Vec::new());
    seed.insert("locations", locations());
    seed.insert("schedules", schedules());
    seed.insert("tasks", tasks());
    seed.insert("courses-tasks", courses_tasks());
    seed.insert("enrollments", enrollments());
    seed.insert("grades", grades());
    seed.insert("services", Vec::new());

    seed
}

fn nations() -> Vec<Row> {
    [
        ("United States", "US"),
        ("Mexico", "MX"),
        ("Canada", "CA"),
        ("United Kingdom", "UK"),
        ("Japan", "JP"),
        ("Peru", "PE"),
    ]
    .iter()
    .map(|(name, code)| vec![t(name), t(code)])
    .collect()
}

fn states() -> Vec<Row> {
    [
        ("Pennsylvania", "PA"),
        ("New Jersey", "NJ"),
        ("Florida", "FL"),
        ("New York", "NY"),
        ("Texas", "TX"),
    ]
    .iter()
    .map(|(name, code)| vec![t(name), t(code), l(nations_id("US"))])
    .collect()
}

fn cityzip_pairs() -> Vec<Row> {
    [
        ("Indianland", "18088", "PA"),
        ("Berlinsville", "18088", "PA"),
        ("Nesquehoning", "18240", "PA"),
        ("Bloomsburg", "17815", "PA"),
        ("Tampa", "33609", "FL"),
        ("Tampa", "33611", "FL"),
        ("Houston", "77001", "TX"),
    ]
    .iter()
    .map(|(city, zip, state)| vec![t(city), t(zip), l(states_id(state))])
    .collect()
}

fn addresses() -> Vec<Row> {
    [
        ("1111 Lehigh Dr", "Indianland", "18088"),
        ("1111 Lake Dr", "Nesquehoning", "18240"),
        ("1111 University Dr", "Bloomsburg", "17815"),
        ("3828 W Platt St", "Tampa", "33609"),
        ("5217 Puritan Ave", "Tampa", "33611"),
        ("1111 Nowhere St", "Houston", "77001"),
        ("1111 Somewhere Pl", "Berlinsville", "18088"),
    ]
    .iter()
    .map(|(line, city, zip)| vec![t(line), l(cityzip_pairs_id(city, zip)), b(false)])
    .collect()
}

fn institutions() -> Vec<Row> {
    vec![vec![
        t("Bloomsburg University Of Pennsylvania"),
        l(states_id("PA")),
        t("BU"),
        l(addresses_id("1111 University Dr")),
        t("https://bloomu.edu"),
        b(true),
        b(true),
        b(false),
    ]]
}

fn semesters() -> Vec<Row> {
    vec![vec![
        t("Fall 2021"),
        t("2021-09-01 08:00:00"),
        t("2021-12-23 21:00:00"),
        l(institutions_id("BU")),
    ]]
}

fn persons() -> Vec<Row> {
    [
        ("James Capozzoli", "US", "PA", "manykwh@localhost", "1111 Lehigh Dr", false),
        ("Mike Mol", "US", "PA", "mikethemol@localhost", "1111 Lake Dr", false),
        ("Cindy Carma", "US", "PA", "cindycarma@localhost", "1111 University Dr", false),
        ("Adam Appletosh", "US", "FL", "adamappletosh@localhost", "3828 W Platt St", false),
        ("Casey Bro", "US", "TX", "caseybro@localhost", "1111 Nowhere St", false),
        ("Margret Mi-yetta", "US", "PA", "margretmi@localhost", "1111 University Dr", false),
        ("Cassidy Clever", "US", "PA", "cash@localhost", "1111 University Dr", false),
        ("Yennifer Yaboozle", "PE", "FL", "yenny@localhost", "5217 Puritan Ave", false),
        ("Luis Rico", "US", "FL", "commonname@localhost", "5217 Puritan Ave", false),
        ("Selina Sikorsky", "US", "NJ", "helicopter@bearingfailure.com", "1111 Somewhere Pl", true),
        ("Diana Deerbourne", "US", "PA", "propolice@localhost", "1111 University Dr", false),
        ("Amy Ante", "US", "PA", "drante@localhost", "1111 University Dr", false),
    ]
    .iter()
    .map(|(name, nation, state, email, address, defunct)| {
        vec![
            t(name),
            l(nations_id(nation)),
            l(states_id(state)),
            t(email),
            l(addresses_id(address)),
            b(*defunct),
        ]
    })
    .collect()
}

const STUDENTS: [(&str, bool); 6] = [
    ("James Capozzoli", false),
    ("Adam Appletosh", false),
    ("Casey Bro", false),
    ("Yennifer Yaboozle", false),
    ("Luis Rico", false),
    ("Selina Sikorsky", true),
];

const INSTRUCTORS: [&str; 4] = ["Cindy Carma", "Cassidy Clever", "Margret Mi-yetta", "Amy Ante"];

fn students() -> Vec<Row> {
    STUDENTS
        .iter()
        .map(|(name, defunct)| vec![l(persons_id(name)), l(institutions_id("BU")), b(*defunct)])
        .collect()
}

fn instructors() -> Vec<Row> {
    INSTRUCTORS
        .iter()
        .map(|name| vec![l(persons_id(name)), l(institutions_id("BU")), b(false)])
        .collect()
}

fn employees() -> Vec<Row> {
    vec![vec![l(persons_id("Mike Mol")), l(institutions_id("BU")), b(false)]]
}

fn instructor_logins() -> Vec<Row> {
    [
        ("Cindy Carma", "ccarma@bu.notreal"),
        ("Cassidy Clever", "cclever@bu.notreal"),
        ("Margret Mi-yetta", "miata@bu.notreal"),
        ("Amy Ante", "aante@bu.notreal"),
    ]
    .iter()
    .map(|(name, login)| {
        vec![
            l(instructors_id(name, "BU")),
            l(institutions_id("BU")),
            t(login),
            b(false),
        ]
    })
    .collect()
}

fn student_logins() -> Vec<Row> {
    [
        ("James Capozzoli", "jac00178@huskies", false),
        ("Adam Appletosh", "aaa01234@huskies", false),
        ("Casey Bro", "ccc01234@huskies", false),
        ("Yennifer Yaboozle", "yyy01234@huskies", false),
        ("Luis Rico", "lr_01234@huskies", false),
        ("Selina Sikorsky", "sss01234@huskies", true),
    ]
    .iter()
    .map(|(name, login, defunct)| {
        vec![
            l(students_id(name, "BU")),
            l(institutions_id("BU")),
            t(login),
            b(*defunct),
        ]
    })
    .collect()
}

fn employee_logins() -> Vec<Row> {
    vec![vec![
        l(employees_id("Mike Mol", "BU")),
        l(institutions_id("BU")),
        t("mikemol@somewhe.re"),
        b(false),
    ]]
}

fn departments() -> Vec<Row> {
    [
        ("HRM", "Cindy Carma"),
        ("COMPSCI", "Cassidy Clever"),
        ("CHEM", "Margret Mi-yetta"),
    ]
    .iter()
    .map(|(title, chair)| {
        vec![
            t(title),
            l(institutions_id("BU")),
            l(instructors_id(chair, "BU")),
            b(false),
        ]
    })
    .collect()
}

fn courses() -> Vec<Row> {
    [
        ("Customer Service 1", "3.0", "HRM", "101", true),
        ("Customer Service 2", "3.0", "HRM", "201", true),
        ("Introduction to Java", "3.0", "COMPSCI", "101", true),
        ("Database Design I", "3.0", "COMPSCI", "110", true),
        ("Chemistry Lab for Sciences I", "4.0", "CHEM", "110", false),
    ]
    .iter()
    .map(|(title, hours, dept, number, postgrad)| {
        vec![
            t(title),
            n(hours),
            l(departments_id(dept, "BU")),
            t(number),
            b(true),
            b(*postgrad),
            b(false),
        ]
    })
    .collect()
}

fn courses_prerequisites() -> Vec<Row> {
    vec![vec![
        l(courses_id("HRM", "BU", "201")),
        l(courses_id("HRM", "BU", "101")),
    ]]
}

fn tracks() -> Vec<Row> {
    ["HRM TRACK", "Computer Science Bachelors"]
        .iter()
        .map(|title| vec![t(title), l(institutions_id("BU")), b(true), b(true), b(false)])
        .collect()
}

fn tracks_prerequisites() -> Vec<Row> {
    [
        ("HRM TRACK", "HRM", "201"),
        ("Computer Science Bachelors", "COMPSCI", "101"),
        ("Computer Science Bachelors", "COMPSCI", "110"),
    ]
    .iter()
    .map(|(track, dept, number)| {
        vec![l(tracks_id(track, "BU")), l(courses_id(dept, "BU", number))]
    })
    .collect()
}

fn locations() -> Vec<Row> {
    vec![vec![t("Building A"), b(false)]]
}

// The 3 credit hour classes each meet 330 minutes a week
fn schedules() -> Vec<Row> {
    [
        ("0800", "0950", "-M-W-F-", "2021-09-01 08:00:00", "2021-12-22 09:50:00"),
        ("1000", "1150", "-M-W-F-", "2021-09-01 10:00:00", "2021-12-22 11:50:00"),
        ("1300", "1450", "-M-W-F-", "2021-09-01 13:00:00", "2021-12-22 14:50:00"),
        ("1500", "1650", "-M-W-F-", "2021-09-01 15:00:00", "2021-12-22 16:50:00"),
        ("0800", "1045", "--T-T--", "2021-09-02 08:00:00", "2021-12-23 10:45:00"),
    ]
    .iter()
    .map(|(start, end, dow, first, last)| {
        vec![
            t(start),
            t(end),
            t(dow),
            t(first),
            t(last),
            b(false),
            l(semesters_id("Fall 2021", "BU")),
        ]
    })
    .collect()
}

fn tasks() -> Vec<Row> {
    ["HRM 101 QUIZ 1", "HRM 201 QUIZ 1", "COMPSCI 101 QUIZ 1"]
        .iter()
        .map(|title| vec![t(title), n("100"), b(true)])
        .collect()
}

fn courses_tasks() -> Vec<Row> {
    ["HRM 101 QUIZ 1", "HRM 201 QUIZ 1", "COMPSCI 101 QUIZ 1"]
        .iter()
        .map(|task| vec![l(tasks_id(task)), l(courses_id("HRM", "BU", "101")), n("1.0")])
        .collect()
}

fn enrollment(
    student: &str,
    instructor: &str,
    schedule: (&str, &str),
    course: (&str, &str),
    auditing: bool,
) -> Row {
    vec![
        l(schedules_id(schedule.0, schedule.1)),
        l(instructors_id(instructor, "BU")),
        l(students_id(student, "BU")),
        l(courses_id(course.0, "BU", course.1)),
        b(auditing),
    ]
}

const ENROLLMENT_ORDER: [&str; 6] = [
    "James Capozzoli",
    "Yennifer Yaboozle",
    "Adam Appletosh",
    "Casey Bro",
    "Luis Rico",
    "Selina Sikorsky",
];

fn enrollments() -> Vec<Row> {
    let mut rows = Vec::new();

    for student in ENROLLMENT_ORDER {
        rows.push(enrollment(student, "Cindy Carma", ("0800", "0950"), ("HRM", "101"), false));
    }
    for student in ENROLLMENT_ORDER {
        rows.push(enrollment(
            student,
            "Cassidy Clever",
            ("1000", "1150"),
            ("COMPSCI", "101"),
            false,
        ));
    }

    // Auditing lets a student take HRM 201 without its prerequisite
    rows.push(enrollment(
        "James Capozzoli",
        "Cindy Carma",
        ("0800", "1045"),
        ("HRM", "201"),
        true,
    ));

    rows
}

fn grades() -> Vec<Row> {
    let mut rows: Vec<Row> = ENROLLMENT_ORDER
        .iter()
        .map(|student| {
            vec![
                l(enrollments_id(student, "BU", "0800", "0950")),
                n("100.00"),
                l(tasks_id("HRM 101 QUIZ 1")),
                t("2021-09-05 08:00:00"),
                t("2021-09-08 21:00:00"),
            ]
        })
        .collect();

    let compsci_updated = ["21:09:33", "21:09:31", "21:09:30", "21:09:32", "21:09:38", "21:09:35"];
    for (student, updated) in ENROLLMENT_ORDER.iter().zip(compsci_updated) {
        rows.push(vec![
            l(enrollments_id(student, "BU", "1000", "1150")),
            n("100.00"),
            l(tasks_id("COMPSCI 101 QUIZ 1")),
            t("2021-09-05 10:00:00"),
            t(&format!("2021-09-08 {}", updated)),
        ]);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_row_counts() {
        let seed = seed_data();

        let expected = [
            ("nations", 6),
            ("states", 5),
            ("cityzip_pairs", 7),
            ("addresses", 7),
            ("institutions", 1),
            ("semesters", 1),
            ("persons", 12),
            ("students", 6),
            ("instructors", 4),
            ("employees", 1),
            ("instructor-logins", 4),
            ("student-logins", 6),
            ("employee-logins", 1),
            ("departments", 3),
            ("courses", 5),
            ("courses-prerequisites", 1),
            ("tracks", 2),
            ("tracks-prerequisites", 3),
            ("courses-equivalencies", 0),
            ("locations", 1),
            ("schedules", 5),
            ("tasks", 3),
            ("courses-tasks", 3),
            ("enrollments", 13),
            ("grades", 12),
            ("services", 0),
        ];

        for (table, count) in expected {
            assert_eq!(seed.rows(table).len(), count, "row count for {}", table);
        }
    }

    #[test]
    fn test_rows_match_column_arity() {
        let catalog = catalog::schooldb();
        let seed = seed_data();

        for (table, rows) in seed.tables() {
            let def = catalog.get(table).expect("seed table is in the catalog");
            for row in rows {
                assert_eq!(row.len(), def.columns.len(), "arity of a {} row", table);
            }
        }
    }

    #[test]
    fn test_auditing_enrollment_is_last() {
        let seed = seed_data();
        let last = seed.rows("enrollments").last().unwrap();

        assert_eq!(last[4], SqlValue::Bool(true));
        assert_eq!(last[0], SqlValue::Lookup(schedules_id("0800", "1045")));
    }

    #[test]
    fn test_course_number_is_text_in_rows() {
        let seed = seed_data();
        let first = &seed.rows("courses")[0];

        assert_eq!(first[1].to_string(), "3.0");
        assert_eq!(first[3].to_string(), "'101'");
    }
}
