//! The `psikotest status` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use psikotest_core::model::{total_question_count, Module};
use psikotest_core::session::Stage;

use super::{open_session, print_results};
use crate::config::PsikotestConfig;

pub fn execute(config: &PsikotestConfig) -> Result<()> {
    let session = open_session(config)?;

    println!("Session: {}", session.stage().label());
    if let Some(candidate) = session.candidate() {
        println!("Candidate: {} <{}>", candidate.name, candidate.email);
    }

    if session.stage() == Stage::Fresh {
        println!("No session yet. Start with `psikotest register`.");
        return Ok(());
    }

    let answers = session.answers();
    let mut table = Table::new();
    table.set_header(vec!["Module", "Answered", "Total", "Complete"]);
    for module in Module::ALL {
        table.add_row(vec![
            Cell::new(module.title()),
            Cell::new(answers.answered(module)),
            Cell::new(module.question_count()),
            Cell::new(if answers.is_module_complete(module) {
                "yes"
            } else {
                "no"
            }),
        ]);
    }
    println!("{table}");
    println!("Total: {}/{}", answers.len(), total_question_count());

    match session.results() {
        Some(results) => {
            println!(
                "Scored at {}",
                results.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            );
            print_results(results);
        }
        None => {
            if let Some(next) = answers.next_incomplete_module() {
                println!("Next module: {} ({})", next.title(), next.key());
            }
        }
    }

    Ok(())
}
