//! The `psikotest score` command.

use anyhow::Result;
use chrono::Utc;

use super::{open_session, print_results};
use crate::config::PsikotestConfig;

pub fn execute(config: &PsikotestConfig, allow_incomplete: bool) -> Result<()> {
    let mut session = open_session(config)?;
    if allow_incomplete && !session.answers().is_complete() {
        eprintln!(
            "Scoring incomplete test ({} answers); missing answers use default values.",
            session.answers().len()
        );
    }
    let results = session.score(Utc::now(), allow_incomplete)?;
    print_results(results);
    Ok(())
}
