//! psikotest-core: Question bank, answer store, and scoring engine.
//!
//! This crate defines the data model, the fixed question bank, and the pure
//! scoring functions that turn a candidate's answers into a `TestResults`
//! aggregate, plus the session persistence the front ends build on.

pub mod answers;
pub mod bank;
pub mod error;
pub mod interpret;
pub mod model;
pub mod results;
pub mod scoring;
pub mod session;
