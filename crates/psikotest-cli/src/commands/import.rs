//! The `psikotest import` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use psikotest_core::answers::{AnswerStore, RawAnswers};

use super::open_session;
use crate::config::PsikotestConfig;

pub fn execute(config: &PsikotestConfig, path: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read answers from {}", path.display()))?;
    let raw: RawAnswers = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers JSON: {}", path.display()))?;

    let imported = AnswerStore::from_raw(&raw);
    let dropped = raw.len() - imported.len();

    let mut session = open_session(config)?;
    let count = session.import(&imported)?;

    println!("Imported {count} answers from {}", path.display());
    if dropped > 0 {
        println!("Skipped {dropped} unreadable entries");
    }
    println!(
        "Progress: {}/{} answered",
        session.answers().len(),
        psikotest_core::model::total_question_count()
    );
    Ok(())
}
