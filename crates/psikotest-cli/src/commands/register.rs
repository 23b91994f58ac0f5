//! The `psikotest register` command.

use anyhow::Result;
use chrono::Utc;

use psikotest_core::model::{Candidate, Registration};

use super::open_session;
use crate::config::PsikotestConfig;

pub fn execute(config: &PsikotestConfig, form: Registration) -> Result<()> {
    let mut session = open_session(config)?;
    let candidate = Candidate::register(form, Utc::now())?;
    session.register(candidate.clone())?;

    println!("Registered {} <{}>", candidate.name, candidate.email);
    println!(
        "Test started {}",
        candidate.test_date.format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(())
}
