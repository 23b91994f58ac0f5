//! The `psikotest reset` command.

use anyhow::Result;

use super::open_session;
use crate::config::PsikotestConfig;

pub fn execute(config: &PsikotestConfig) -> Result<()> {
    let mut session = open_session(config)?;
    session.reset()?;
    println!("Session cleared. The test can be taken again.");
    Ok(())
}
