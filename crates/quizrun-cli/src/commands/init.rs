//! The `quizrun init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizrun.toml
    if std::path::Path::new("quizrun.toml").exists() {
        println!("quizrun.toml already exists, skipping.");
    } else {
        std::fs::write("quizrun.toml", SAMPLE_CONFIG)?;
        println!("Created quizrun.toml");
    }

    // Create example exam
    std::fs::create_dir_all("exams")?;
    let example_path = std::path::Path::new("exams/example.json");
    if example_path.exists() {
        println!("exams/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_EXAM)?;
        println!("Created exams/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit exams/example.json or add your own exam files");
    println!("  2. Run: quizrun validate --exam exams/example.json");
    println!("  3. Run: quizrun take --predefined example");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizrun configuration

# Directory searched by `quizrun list` and `quizrun take --predefined`
exams_dir = "./exams"

# Save every finished attempt as JSON here
# output_dir = "./quizrun-results"

# Fetch predefined exams from {base_url}/{name}.json instead of exams_dir
# base_url = "https://example.com/exams"

show_feedback = true
"#;

const EXAMPLE_EXAM: &str = r#"[
  {
    "number": 1,
    "prompt": "Which planet is known as the red planet?",
    "alternatives": [
      { "id": "A", "text": "Venus" },
      { "id": "B", "text": "Mars" },
      { "id": "C", "text": "Jupiter" }
    ],
    "correctAnswer": "B"
  },
  {
    "number": 2,
    "prompt": "Which of these are prime numbers?",
    "alternatives": [
      { "id": "A", "text": "2" },
      { "id": "B", "text": "9" },
      { "id": "C", "text": "11" },
      { "id": "D", "text": "15" }
    ],
    "correctAnswer": ["A", "C"]
  }
]
"#;
