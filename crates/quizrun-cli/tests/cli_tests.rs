//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizrun() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizrun").unwrap()
}

#[test]
fn validate_exam_file() {
    quizrun()
        .arg("validate")
        .arg("--exam")
        .arg("../../exams/rust-basics.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 questions"))
        .stdout(predicate::str::contains("All exams valid"));
}

#[test]
fn validate_legacy_schema() {
    quizrun()
        .arg("validate")
        .arg("--exam")
        .arg("../../exams/http-basics.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions"));
}

#[test]
fn validate_directory() {
    quizrun()
        .arg("validate")
        .arg("--exam")
        .arg("../../exams")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exam: rust-basics"))
        .stdout(predicate::str::contains("Exam: http-basics"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dodgy.json");
    std::fs::write(
        &path,
        r#"[{"number": 1, "prompt": "p", "alternatives": [{"id": "A", "text": "a"}], "correctAnswer": "B"}]"#,
    )
    .unwrap();

    quizrun()
        .arg("validate")
        .arg("--exam")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_invalid_structure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"[{"number": 1, "prompt": "p"}]"#).unwrap();

    quizrun()
        .arg("validate")
        .arg("--exam")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("question 1 has an invalid structure"));
}

#[test]
fn validate_nonexistent_file() {
    quizrun()
        .arg("validate")
        .arg("--exam")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn take_perfect_score() {
    quizrun()
        .arg("take")
        .arg("--exam")
        .arg("../../exams/rust-basics.json")
        .write_stdin("B\nC,A\nc\na c\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 4 / 4"))
        .stdout(predicate::str::contains("100.00%"))
        .stdout(predicate::str::contains("Excellent"));
}

#[test]
fn take_with_wrong_answers() {
    quizrun()
        .arg("take")
        .arg("--exam")
        .arg("../../exams/http-basics.json")
        .write_stdin("A\nA,C,D\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect. Correct answer: B"))
        .stdout(predicate::str::contains("33.33%"))
        .stdout(predicate::str::contains("Needs improvement"));
}

#[test]
fn take_abandon() {
    quizrun()
        .arg("take")
        .arg("--exam")
        .arg("../../exams/rust-basics.json")
        .write_stdin("B\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exam abandoned."))
        .stdout(predicate::str::contains("Exam finished.").not());
}

#[test]
fn take_saves_result() {
    let out = TempDir::new().unwrap();

    quizrun()
        .arg("take")
        .arg("--exam")
        .arg("../../exams/http-basics.json")
        .arg("--output")
        .arg(out.path())
        .arg("--no-feedback")
        .write_stdin("B\nD,C,A\nB\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!").not())
        .stderr(predicate::str::contains("Result saved to"));

    let saved: Vec<_> = std::fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(saved.len(), 1);

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&saved[0]).unwrap()).unwrap();
    assert_eq!(report["exam"]["name"], "http-basics");
    assert_eq!(report["result"]["correct_answers"], 3);
    assert_eq!(report["result"]["percentage"], 100.0);
}

#[test]
fn take_predefined_exam() {
    quizrun()
        .arg("take")
        .arg("--predefined")
        .arg("http-basics")
        .env("QUIZRUN_EXAMS_DIR", "../../exams")
        .write_stdin("B\nA,C,D\nB\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3 / 3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn take_predefined_exam_from_base_url() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    let body = std::fs::read_to_string("../../exams/http-basics.json").unwrap();
    Mock::given(method("GET"))
        .and(path("/exams/http-basics.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    quizrun()
        .arg("take")
        .arg("--predefined")
        .arg("http-basics")
        .env("QUIZRUN_BASE_URL", format!("{}/exams/", server.uri()))
        .write_stdin("B\nA,C,D\nB\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3 / 3"))
        .stdout(predicate::str::contains("100.00%"));
}

#[test]
fn take_unknown_predefined_exam() {
    quizrun()
        .arg("take")
        .arg("--predefined")
        .arg("no-such-exam")
        .env("QUIZRUN_EXAMS_DIR", "../../exams")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn take_requires_one_source() {
    quizrun()
        .arg("take")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one of"));
}

#[test]
fn take_rejects_non_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.txt");
    std::fs::write(&path, "[]").unwrap();

    quizrun()
        .arg("take")
        .arg("--exam")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON file"));
}

#[test]
fn list_predefined_exams() {
    quizrun()
        .arg("list")
        .env("QUIZRUN_EXAMS_DIR", "../../exams")
        .assert()
        .success()
        .stdout(predicate::str::contains("rust-basics"))
        .stdout(predicate::str::contains("http-basics"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizrun()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizrun.toml"))
        .stdout(predicate::str::contains("Created exams/example.json"));

    assert!(dir.path().join("quizrun.toml").exists());
    assert!(dir.path().join("exams/example.json").exists());

    quizrun()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("example"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    quizrun()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    quizrun()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    quizrun()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal quiz and exam runner"));
}

#[test]
fn version_output() {
    quizrun()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizrun"));
}
