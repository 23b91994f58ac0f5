//! The `psikotest init` command.

use anyhow::Result;

use psikotest_core::answers::RawAnswers;
use psikotest_core::model::{AnswerKind, Module};

pub fn execute() -> Result<()> {
    // Create psikotest.toml
    if std::path::Path::new("psikotest.toml").exists() {
        println!("psikotest.toml already exists, skipping.");
    } else {
        std::fs::write("psikotest.toml", SAMPLE_CONFIG)?;
        println!("Created psikotest.toml");
    }

    // Create an answer template for `psikotest import`
    let template_path = std::path::Path::new("answers.example.json");
    if template_path.exists() {
        println!("answers.example.json already exists, skipping.");
    } else {
        std::fs::write(template_path, serde_json::to_string_pretty(&answer_template())?)?;
        println!("Created answers.example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: psikotest register --name ... --email ... (see --help)");
    println!("  2. Answer questions with `psikotest answer` or edit answers.example.json");
    println!("     and run: psikotest import --answers answers.example.json");
    println!("  3. Run: psikotest score && psikotest report --format all");

    Ok(())
}

/// Every answer key with a neutral or first-option value.
fn answer_template() -> RawAnswers {
    let mut template = RawAnswers::new();
    for module in Module::ALL {
        for index in 0..module.question_count() {
            let value = match module.answer_kind() {
                AnswerKind::Likert => serde_json::Value::from(3),
                AnswerKind::OptionIndex => serde_json::Value::from(0),
                AnswerKind::Choice => serde_json::Value::from("A"),
            };
            template.insert(format!("{}_{}", module.key(), index), value);
        }
    }
    template
}

const SAMPLE_CONFIG: &str = r#"# psikotest configuration

# Where the session (candidate, answers, results) is stored.
data_dir = "./.psikotest"

# Where reports are written. ${VAR} references are resolved from the environment.
output_dir = "./psikotest-reports"

# Formats written by `psikotest report` when --format is not given:
# html, text, json or all (comma-separated).
default_format = "html"
"#;
