//! The scoring engine.
//!
//! Four pure calculators turn an [`AnswerStore`] into score records. The
//! personality, cognitive, and interest scorers read raw answers and are
//! independent of each other; the competency scorer is derived and only
//! consumes their outputs. None of them fail: missing or unreadable answers
//! fall back to a per-module default.

mod cognitive;
mod competency;
mod interest;
mod personality;

pub use cognitive::CognitiveScores;
pub use competency::{Competency, CompetencyScores};
pub use interest::InterestScores;
pub use personality::{PersonalityScores, PersonalityTrait, NEUTRAL_LIKERT};

use chrono::{DateTime, Utc};

use crate::answers::AnswerStore;
use crate::results::TestResults;

/// Score a (possibly partial) answer store and stamp the result.
///
/// `completed_at` is supplied by the caller so that scoring itself never
/// reads the clock.
pub fn evaluate(answers: &AnswerStore, completed_at: DateTime<Utc>) -> TestResults {
    let personality = PersonalityScores::compute(answers);
    tracing::debug!(?personality, "personality scored");

    let cognitive = CognitiveScores::compute(answers);
    tracing::debug!(?cognitive, "cognitive scored");

    let interest = InterestScores::compute(answers);
    tracing::debug!(?interest, "interest scored");

    let competencies = CompetencyScores::compute(&personality, &cognitive, &interest);
    tracing::debug!(?competencies, "competencies derived");

    TestResults {
        personality,
        cognitive,
        interest,
        competencies,
        timestamp: completed_at,
    }
}

/// Round to the nearest integer, halves away from zero.
///
/// All engine inputs are non-negative, so this is round-half-up.
fn round(value: f64) -> f64 {
    value.round()
}
