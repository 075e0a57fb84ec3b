//! Integration tests for YAML seed files and schoolfill.yaml configuration

use schoolfill::codegen::generate_script;
use schoolfill::config::{CliOverrides, FillerConfig, ResolvedConfig};
use schoolfill::{load_seed_file, FillerError};
use std::fs;

const SEED_YAML: &str = r#"
database: schooldb_demo
rows:
  nations:
    - ["United States", "US"]
  states:
    - ["Texas", "TX", {lookup: nations_id, args: [US]}]
  institutions:
    - ["Rice University", {lookup: states_id, args: [TX]}, "RU", null, "https://rice.edu", true, true, false]
"#;

#[test]
fn test_seed_file_to_script() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("demo.yaml");
    fs::write(&seed_path, SEED_YAML).unwrap();

    let file = load_seed_file(&seed_path).expect("Failed to load seed file");
    let resolved = ResolvedConfig::resolve_with_env(
        &CliOverrides::default(),
        &FillerConfig::default(),
        |_| None,
    );
    let opts = resolved.script_options(file.database.as_deref());

    let script = generate_script(&file.catalog, &file.seed, &opts).unwrap();

    assert!(script.starts_with("USE `schooldb_demo`\nBEGIN;\n\n"));
    assert!(script.contains(
        "INSERT INTO `states` (`states_name`, `states_code`, `states_nations_id_fk`) \
         VALUES ('Texas', 'TX', (SELECT nations_id FROM nations WHERE nations_code = 'US' LIMIT 1));\n"
    ));
    assert!(script.contains(
        "VALUES ('Rice University', (SELECT states_id FROM states WHERE states_code = 'TX' LIMIT 1), \
         'RU', NULL, 'https://rice.edu', true, true, false);\n"
    ));
    assert_eq!(script.lines().filter(|l| l.starts_with("INSERT INTO ")).count(), 3);
}

#[test]
fn test_config_file_points_at_seed() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("seeds")).unwrap();
    fs::write(dir.path().join("seeds/demo.yaml"), SEED_YAML).unwrap();

    let config_path = dir.path().join("schoolfill.yaml");
    fs::write(
        &config_path,
        "database: schooldb_config\ntransaction: false\nescape_quotes: true\nseed: seeds/demo.yaml\n",
    )
    .unwrap();

    let config = FillerConfig::load(Some(&config_path)).unwrap();
    let resolved = ResolvedConfig::resolve_with_env(&CliOverrides::default(), &config, |_| None);
    let seed_path = resolved.seed.clone().expect("seed path from config");
    let file = load_seed_file(&seed_path).unwrap();

    let opts = resolved.script_options(file.database.as_deref());
    assert_eq!(opts.database, "schooldb_config");
    assert!(opts.render.escape_quotes);

    let script = generate_script(&file.catalog, &file.seed, &opts).unwrap();
    assert!(script.starts_with("USE `schooldb_config`\n\n"));
    assert!(!script.contains("COMMIT;"));
}

#[test]
fn test_escaped_quotes_from_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("quotes.yaml");
    fs::write(&seed_path, "rows:\n  nations:\n    - [\"Cote d'Ivoire\", \"CI\"]\n").unwrap();

    let file = load_seed_file(&seed_path).unwrap();
    let cli = CliOverrides {
        escape_quotes: true,
        ..Default::default()
    };
    let resolved = ResolvedConfig::resolve_with_env(&cli, &FillerConfig::default(), |_| None);

    let script = generate_script(&file.catalog, &file.seed, &resolved.script_options(None)).unwrap();

    assert!(script.contains("VALUES ('Cote d''Ivoire', 'CI');"));
}

#[test]
fn test_missing_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_seed_file(dir.path().join("absent.yaml")).unwrap_err();

    assert!(matches!(err, FillerError::Io { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_bundled_demo_seed() {
    let file = load_seed_file("config/seeds/demo.yaml").expect("Failed to load demo seed");
    let problems = schoolfill::codegen::check_row_references(&file.catalog, &file.seed);
    assert!(problems.is_empty(), "forward references: {:?}", problems);

    let opts = schoolfill::ScriptOptions::default();
    let script = generate_script(&file.catalog, &file.seed, &opts).unwrap();

    assert_eq!(file.seed.total_rows(), 9);
    assert!(script.contains(
        "INSERT INTO `courses` (`courses_title`, `courses_credit_hours`, `courses_depts_id_fk`, `courses_number`, \
         `courses_undergraduates_eligible`, `courses_postgraduates_eligible`, `courses_is_defunct`) \
         VALUES ('Algorithms', 3.0, "
    ));
}
