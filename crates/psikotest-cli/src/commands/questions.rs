//! The `psikotest questions` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use psikotest_core::bank;
use psikotest_core::model::Module;

use super::parse_module;

pub fn execute(module: &str) -> Result<()> {
    let module = parse_module(module)?;

    match module.time_limit_minutes() {
        Some(minutes) => println!(
            "{} ({} soal, {} menit)",
            module.title(),
            module.question_count(),
            minutes
        ),
        None => println!("{} ({} soal)", module.title(), module.question_count()),
    }

    let mut table = Table::new();
    match module {
        Module::Personality => {
            table.set_header(vec!["#", "Pernyataan"]);
            for i in 0..module.question_count() {
                let statement = bank::personality_statement(i).unwrap_or_default();
                table.add_row(vec![Cell::new(i), Cell::new(statement)]);
            }
            println!("{table}");
            let scale: Vec<String> = bank::LIKERT_LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| format!("{} = {label}", i + 1))
                .collect();
            println!("Skala: {}", scale.join(", "));
        }
        Module::Interest => {
            table.set_header(vec!["#", "Pertanyaan", "A", "B"]);
            for i in 0..module.question_count() {
                if let Some(q) = bank::interest_question(i) {
                    table.add_row(vec![
                        Cell::new(i),
                        Cell::new(q.prompt),
                        Cell::new(q.option_a),
                        Cell::new(q.option_b),
                    ]);
                }
            }
            println!("{table}");
        }
        _ => {
            table.set_header(vec!["#", "Soal", "Pilihan"]);
            for (i, q) in bank::cognitive_questions(module).enumerate() {
                let prompt = match q.pattern {
                    Some(pattern) => format!("{pattern}\n{}", q.prompt),
                    None => q.prompt.to_string(),
                };
                let options: Vec<String> = q
                    .options
                    .iter()
                    .enumerate()
                    .map(|(n, o)| format!("{n}) {o}"))
                    .collect();
                table.add_row(vec![
                    Cell::new(i),
                    Cell::new(prompt),
                    Cell::new(options.join("\n")),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
