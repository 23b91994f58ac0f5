//! Big Five personality scoring.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::round;
use crate::answers::AnswerStore;
use crate::model::Module;

/// Likert value assumed for an unanswered or unreadable item.
pub const NEUTRAL_LIKERT: u8 = 3;

const ITEMS_PER_TRAIT: usize = 10;
const MIN_SUM: f64 = ITEMS_PER_TRAIT as f64;
const SUM_RANGE: f64 = (ITEMS_PER_TRAIT * 4) as f64;

/// The five Big Five traits, in item-block order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl PersonalityTrait {
    pub const ALL: [PersonalityTrait; 5] = [
        PersonalityTrait::Openness,
        PersonalityTrait::Conscientiousness,
        PersonalityTrait::Extraversion,
        PersonalityTrait::Agreeableness,
        PersonalityTrait::Neuroticism,
    ];

    /// Trait measured by personality item `index`.
    pub fn for_item(index: usize) -> Option<PersonalityTrait> {
        Self::ALL.get(index / ITEMS_PER_TRAIT).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonalityTrait::Openness => "Keterbukaan",
            PersonalityTrait::Conscientiousness => "Kehati-hatian",
            PersonalityTrait::Extraversion => "Ekstraversi",
            PersonalityTrait::Agreeableness => "Keramahan",
            PersonalityTrait::Neuroticism => "Neurotisisme",
        }
    }
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized Big Five scores, each 0–100.
///
/// Neuroticism is stored as measured; emotional stability is derived from it
/// only for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl PersonalityScores {
    /// Sum each ten-item block and map the 10–50 range linearly onto 0–100.
    pub fn compute(answers: &AnswerStore) -> Self {
        let mut sums = [0u32; 5];
        for index in 0..Module::Personality.question_count() {
            let value = answers.likert(index).unwrap_or(NEUTRAL_LIKERT);
            sums[index / ITEMS_PER_TRAIT] += u32::from(value);
        }

        Self {
            openness: normalize(sums[0]),
            conscientiousness: normalize(sums[1]),
            extraversion: normalize(sums[2]),
            agreeableness: normalize(sums[3]),
            neuroticism: normalize(sums[4]),
        }
    }

    pub fn get(&self, personality_trait: PersonalityTrait) -> u8 {
        match personality_trait {
            PersonalityTrait::Openness => self.openness,
            PersonalityTrait::Conscientiousness => self.conscientiousness,
            PersonalityTrait::Extraversion => self.extraversion,
            PersonalityTrait::Agreeableness => self.agreeableness,
            PersonalityTrait::Neuroticism => self.neuroticism,
        }
    }

    /// `(trait, score)` pairs in trait order.
    pub fn entries(&self) -> [(PersonalityTrait, u8); 5] {
        PersonalityTrait::ALL.map(|t| (t, self.get(t)))
    }

    /// Presentation-only inverse of neuroticism.
    pub fn emotional_stability(&self) -> u8 {
        100u8.saturating_sub(self.neuroticism)
    }
}

fn normalize(sum: u32) -> u8 {
    let scaled = ((f64::from(sum) - MIN_SUM) / SUM_RANGE) * 100.0;
    round(scaled).clamp(0.0, 100.0) as u8
}
