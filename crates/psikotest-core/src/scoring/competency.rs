//! Derived competency scoring.
//!
//! Competencies are fixed linear blends of the other three score groups and
//! never look at raw answers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::round;
use super::{CognitiveScores, InterestScores, PersonalityScores};

/// Weight applied to the raw artistic interest count in the creativity blend.
///
/// The count is not normalized, so creativity can exceed 100.
pub const ARTISTIC_COUNT_WEIGHT: f64 = 5.0;

/// The five derived competencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competency {
    Leadership,
    Analytical,
    Communication,
    Creativity,
    Teamwork,
}

impl Competency {
    pub const ALL: [Competency; 5] = [
        Competency::Leadership,
        Competency::Analytical,
        Competency::Communication,
        Competency::Creativity,
        Competency::Teamwork,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Competency::Leadership => "Leadership",
            Competency::Analytical => "Analytical",
            Competency::Communication => "Communication",
            Competency::Creativity => "Creativity",
            Competency::Teamwork => "Teamwork",
        }
    }
}

impl fmt::Display for Competency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived competency scores. Nominally 0–100; creativity is unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyScores {
    pub leadership: u16,
    pub analytical: u16,
    pub communication: u16,
    pub creativity: u16,
    pub teamwork: u16,
}

impl CompetencyScores {
    pub fn compute(
        personality: &PersonalityScores,
        cognitive: &CognitiveScores,
        interest: &InterestScores,
    ) -> Self {
        let openness = f64::from(personality.openness);
        let conscientiousness = f64::from(personality.conscientiousness);
        let extraversion = f64::from(personality.extraversion);
        let agreeableness = f64::from(personality.agreeableness);
        let stability = 100.0 - f64::from(personality.neuroticism);

        let leadership = extraversion * 0.4 + conscientiousness * 0.4 + stability * 0.2;
        let analytical =
            f64::from(cognitive.logic) * 0.4 + f64::from(cognitive.numeric) * 0.4 + openness * 0.2;
        let communication =
            f64::from(cognitive.verbal) * 0.4 + extraversion * 0.3 + agreeableness * 0.3;
        let creativity = openness * 0.5
            + f64::from(interest.artistic) * ARTISTIC_COUNT_WEIGHT
            + f64::from(cognitive.visual) * 0.3;
        let teamwork = agreeableness * 0.5 + extraversion * 0.3 + stability * 0.2;

        Self {
            leadership: round(leadership) as u16,
            analytical: round(analytical) as u16,
            communication: round(communication) as u16,
            creativity: round(creativity) as u16,
            teamwork: round(teamwork) as u16,
        }
    }

    pub fn get(&self, competency: Competency) -> u16 {
        match competency {
            Competency::Leadership => self.leadership,
            Competency::Analytical => self.analytical,
            Competency::Communication => self.communication,
            Competency::Creativity => self.creativity,
            Competency::Teamwork => self.teamwork,
        }
    }

    /// `(competency, score)` pairs in declaration order.
    pub fn entries(&self) -> [(Competency, u16); 5] {
        Competency::ALL.map(|c| (c, self.get(c)))
    }
}
