pub mod answer;
pub mod import;
pub mod init;
pub mod questions;
pub mod register;
pub mod report;
pub mod reset;
pub mod score;
pub mod status;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use psikotest_core::interpret::{self, Summary, TraitLevel};
use psikotest_core::model::Module;
use psikotest_core::results::TestResults;
use psikotest_core::session::{FileStore, Session};

use crate::config::PsikotestConfig;

/// Open the session stored under the configured data directory.
pub fn open_session(config: &PsikotestConfig) -> Result<Session<FileStore>> {
    Session::load(FileStore::new(&config.data_dir)).with_context(|| {
        format!(
            "failed to open session in {}",
            config.data_dir.display()
        )
    })
}

/// Parse a module name given on the command line.
pub fn parse_module(module: &str) -> Result<Module> {
    module.parse::<Module>().map_err(anyhow::Error::msg)
}

/// Print every score group as tables, followed by the narrative summary.
pub fn print_results(results: &TestResults) {
    let mut table = Table::new();
    table.set_header(vec!["Kepribadian", "Skor", "Tingkat"]);
    for (t, score) in results.personality.entries() {
        table.add_row(vec![
            Cell::new(t.label()),
            Cell::new(format!("{score}/100")),
            Cell::new(TraitLevel::from_score(score)),
        ]);
    }
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec!["Kognitif", "Skor"]);
    for (module, score) in results.cognitive.entries() {
        table.add_row(vec![
            Cell::new(interpret::cognitive_field_label(module)),
            Cell::new(format!("{score}/100")),
        ]);
    }
    table.add_row(vec![
        Cell::new(interpret::COGNITIVE_OVERALL_LABEL),
        Cell::new(format!("{}/100", results.cognitive.overall)),
    ]);
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec!["#", "Minat (RIASEC)", "Jumlah"]);
    for (rank, (dimension, count)) in results.interest.ranked().into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(dimension),
            Cell::new(count),
        ]);
    }
    println!("{table}");
    println!("Minat teratas: {}", results.interest.top());

    let mut table = Table::new();
    table.set_header(vec!["Kompetensi", "Skor", "Bintang"]);
    for (competency, score) in results.competencies.entries() {
        let stars = interpret::stars(score);
        table.add_row(vec![
            Cell::new(competency),
            Cell::new(score),
            Cell::new(format!(
                "{}{}",
                "★".repeat(usize::from(stars)),
                "☆".repeat(usize::from(interpret::MAX_STARS - stars))
            )),
        ]);
    }
    println!("{table}");

    println!("\n{}", Summary::from_results(results).narrative());
}
