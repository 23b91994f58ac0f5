//! The `psikotest answer` command.

use anyhow::Result;

use psikotest_core::answers::{Answer, AnswerKey};

use super::{open_session, parse_module};
use crate::config::PsikotestConfig;

pub fn execute(config: &PsikotestConfig, module: &str, index: usize, value: &str) -> Result<()> {
    let module = parse_module(module)?;
    let answer = Answer::parse(module, value)?;

    let mut session = open_session(config)?;
    let previous = session.answer(module, index, answer)?;

    let key = AnswerKey::new(module, index);
    match previous {
        Some(old) if old != answer => println!("Updated {key} ({old:?} -> {answer:?})"),
        _ => println!("Recorded {key} = {value}"),
    }
    println!(
        "{}: {}/{} answered",
        module.title(),
        session.answers().answered(module),
        module.question_count()
    );
    Ok(())
}
