//! End-to-end sessions against an on-disk database.
//!
//! Each test seeds a temporary SQLite file from `tests/fixtures/hyperion.sql`,
//! opens it read-only through the public API and drives the prompt with a
//! scripted input.

use std::fs;
use std::path::{Path, PathBuf};

use rstest::{fixture, rstest};
use rusqlite::Connection;
use tempfile::TempDir;

use hyperion_lookup::db::SqliteBackend;
use hyperion_lookup::executor::QueryExecutor;
use hyperion_lookup::repl::Repl;

const FIXTURE_SQL: &str = include_str!("fixtures/hyperion.sql");

struct Session {
    dir: TempDir,
    db_path: PathBuf,
}

impl Session {
    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, script: &str) -> String {
        let backend = SqliteBackend::open(&self.db_path).expect("fixture database should open");
        let mut output = Vec::new();
        Repl::new(QueryExecutor::new(Box::new(backend)), script.as_bytes(), &mut output)
            .run()
            .expect("session should complete");
        String::from_utf8(output).unwrap()
    }
}

#[fixture]
fn session() -> Session {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("HyperionDev.db");
    Connection::open(&db_path).unwrap().execute_batch(FIXTURE_SQL).unwrap();
    Session { dir, db_path }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[rstest]
fn test_view_subjects_export_json(session: Session) {
    let out = session.path("out.json");
    let output = session.run(&format!("vs 5\ny\n{}\ne\n", out.display()));

    assert!(output.contains("Subjects taken by student 5: "));
    assert!(output.contains(&format!("Data saved to {}", out.display())));

    let value = read_json(&out);
    let mut names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            let object = row.as_object().unwrap();
            assert_eq!(object.keys().collect::<Vec<_>>(), vec!["course_name"]);
            object["course_name"].as_str().unwrap()
        })
        .collect();
    names.sort();
    assert_eq!(names, vec!["Art", "Maths"]);
}

#[rstest]
fn test_failing_students_export_xml(session: Session) {
    let out = session.path("failing.xml");
    let output = session.run(&format!("lf\ny\n{}\ne\n", out.display()));

    assert!(output.contains("| Student ID |"));
    let xml = fs::read_to_string(&out).unwrap();
    assert_eq!(xml.matches("<item>").count(), 1);
    for tag in ["student_id", "first_name", "last_name", "email", "course_name", "mark"] {
        assert!(xml.contains(&format!("<{}>", tag)), "missing <{}>", tag);
    }
    assert!(xml.contains("<mark>25</mark>"));
}

#[rstest]
fn test_empty_result_exports_empty_structures(session: Session) {
    let json_out = session.path("none.json");
    let xml_out = session.path("none.xml");
    let script = format!(
        "lr 99\ny\n{}\nlc 99\ny\n{}\ne\n",
        json_out.display(),
        xml_out.display()
    );

    let output = session.run(&script);

    assert!(output.contains("No reviews found for student 99"));
    assert!(output.contains("No courses found for teacher 99"));
    assert_eq!(read_json(&json_out), serde_json::json!([]));
    assert!(fs::read_to_string(&xml_out).unwrap().ends_with("<root/>"));
}

#[rstest]
fn test_unsupported_extension_leaves_no_file(session: Session) {
    let out = session.path("out.csv");
    let output = session.run(&format!("lnc\ny\n{}\nn\ne\n", out.display()));

    assert!(output.contains("Invalid file extension. Please use .xml or .json"));
    assert!(!out.exists());
}

#[rstest]
fn test_unknown_and_malformed_commands_keep_session_alive(session: Session) {
    let output = session.run("xyz\nvs\nla Jane Doe\n\ne\n");

    assert!(output.contains("Incorrect command: 'xyz'"));
    assert!(output.contains("The vs command requires 1 arguments."));
    assert!(output.contains("No address found for Jane Doe"));
    assert!(output.ends_with("Programme exited successfully!\n"));
}

#[rstest]
fn test_user_arguments_are_bound_not_interpolated(session: Session) {
    let output = session.run("vs 5'--\nn\nla x' OR '1'='1\ne\n");

    assert!(output.contains("No subjects found for student 5'--"));
    assert!(output.contains("The la command requires 2 arguments."));
    assert!(!output.contains("Database error occurred"));
}

#[rstest]
fn test_missing_database_fails_to_open() {
    let dir = TempDir::new().unwrap();
    let result = SqliteBackend::open(&dir.path().join("absent.db"));
    assert!(result.is_err());
}
