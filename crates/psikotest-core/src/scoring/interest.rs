//! RIASEC interest scoring.

use serde::{Deserialize, Serialize};

use crate::answers::{AnswerStore, Choice};
use crate::bank;
use crate::model::{Module, RiasecDimension};

/// Raw hit counts per RIASEC dimension.
///
/// Counts are not normalized: interests are read by relative rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestScores {
    pub realistic: u8,
    pub investigative: u8,
    pub artistic: u8,
    pub social: u8,
    pub enterprising: u8,
    pub conventional: u8,
}

impl InterestScores {
    /// Each answered item credits the dimension mapped to the chosen side.
    pub fn compute(answers: &AnswerStore) -> Self {
        let mut scores = Self::default();
        for index in 0..Module::Interest.question_count() {
            let (for_a, for_b) = bank::interest_dimensions(index);
            match answers.choice(index) {
                Some(Choice::A) => *scores.slot(for_a) += 1,
                Some(Choice::B) => *scores.slot(for_b) += 1,
                None => {}
            }
        }
        scores
    }

    fn slot(&mut self, dimension: RiasecDimension) -> &mut u8 {
        match dimension {
            RiasecDimension::Realistic => &mut self.realistic,
            RiasecDimension::Investigative => &mut self.investigative,
            RiasecDimension::Artistic => &mut self.artistic,
            RiasecDimension::Social => &mut self.social,
            RiasecDimension::Enterprising => &mut self.enterprising,
            RiasecDimension::Conventional => &mut self.conventional,
        }
    }

    pub fn get(&self, dimension: RiasecDimension) -> u8 {
        match dimension {
            RiasecDimension::Realistic => self.realistic,
            RiasecDimension::Investigative => self.investigative,
            RiasecDimension::Artistic => self.artistic,
            RiasecDimension::Social => self.social,
            RiasecDimension::Enterprising => self.enterprising,
            RiasecDimension::Conventional => self.conventional,
        }
    }

    /// `(dimension, count)` pairs in declaration order.
    pub fn entries(&self) -> [(RiasecDimension, u8); 6] {
        RiasecDimension::ALL.map(|d| (d, self.get(d)))
    }

    /// Dimensions by descending count; equal counts keep declaration order.
    pub fn ranked(&self) -> Vec<(RiasecDimension, u8)> {
        let mut ranked = self.entries().to_vec();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The highest-ranked dimension.
    pub fn top(&self) -> RiasecDimension {
        self.ranked()
            .first()
            .map(|(d, _)| *d)
            .unwrap_or(RiasecDimension::Realistic)
    }

    /// Sum of all counts; equals the number of items answered A or B.
    pub fn total(&self) -> u32 {
        self.entries().iter().map(|(_, c)| u32::from(*c)).sum()
    }
}
