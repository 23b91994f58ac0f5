//! Presentation-time interpretation of scores.
//!
//! Nothing here is persisted: levels, stars, radar axes, and the narrative
//! summary are recomputed from a [`TestResults`] whenever a front end renders
//! it.

use std::fmt;

use serde::Serialize;

use crate::model::Module;
use crate::results::TestResults;
use crate::scoring::{PersonalityScores, PersonalityTrait};

/// Label for the radar axis that replaces neuroticism.
pub const STABILITY_LABEL: &str = "Stabilitas Emosi";

/// Upper bound of the competency star rating.
pub const MAX_STARS: u8 = 5;

const BALANCED_PROFILE: &str = "Kandidat menunjukkan profil yang seimbang di berbagai area. \
Pertimbangkan kesesuaian dengan budaya perusahaan dan persyaratan spesifik peran.";
const SUMMARY_LEAD: &str = "Berdasarkan hasil tes, kandidat menunjukkan: ";
const DEVELOPMENT_LEAD: &str = "Area yang perlu diperhatikan untuk pengembangan: ";

/// Five-band reading of a 0–100 trait score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraitLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
    VeryLow,
}

impl TraitLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => TraitLevel::VeryHigh,
            60..=79 => TraitLevel::High,
            40..=59 => TraitLevel::Moderate,
            20..=39 => TraitLevel::Low,
            _ => TraitLevel::VeryLow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TraitLevel::VeryHigh => "Sangat Tinggi",
            TraitLevel::High => "Tinggi",
            TraitLevel::Moderate => "Sedang",
            TraitLevel::Low => "Rendah",
            TraitLevel::VeryLow => "Sangat Rendah",
        }
    }
}

impl fmt::Display for TraitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Star rating for a competency score: `round(score / 20)`, at most five.
pub fn stars(score: u16) -> u8 {
    let rating = (f64::from(score) / 20.0).round();
    rating.min(f64::from(MAX_STARS)) as u8
}

/// One axis of the personality radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadarAxis {
    pub label: &'static str,
    pub value: u8,
}

/// The personality radar shows emotional stability where the stored record
/// has neuroticism.
pub fn radar_axes(personality: &PersonalityScores) -> [RadarAxis; 5] {
    PersonalityTrait::ALL.map(|t| match t {
        PersonalityTrait::Neuroticism => RadarAxis {
            label: STABILITY_LABEL,
            value: personality.emotional_stability(),
        },
        other => RadarAxis {
            label: other.label(),
            value: personality.get(other),
        },
    })
}

/// Short chart label for a cognitive module.
pub fn cognitive_axis_label(module: Module) -> &'static str {
    match module {
        Module::Logic => "Logika",
        Module::Numeric => "Numerik",
        Module::Verbal => "Verbal",
        Module::Visual => "Visual",
        Module::Personality | Module::Interest => module.key(),
    }
}

/// Long label for a cognitive module as printed in the document.
pub fn cognitive_field_label(module: Module) -> &'static str {
    match module {
        Module::Logic => "Logika & Penalaran",
        Module::Numeric => "Kemampuan Numerik",
        Module::Verbal => "Kemampuan Verbal",
        Module::Visual => "Pola Visual",
        Module::Personality | Module::Interest => module.title(),
    }
}

/// Label for the cognitive average.
pub const COGNITIVE_OVERALL_LABEL: &str = "Rata-rata Kognitif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    /// Analytical competency at least 70.
    Analytical,
    /// Conscientiousness at least 70.
    Conscientiousness,
    /// Leadership competency at least 70.
    Leadership,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Analytical => "kemampuan analisis yang kuat",
            Strength::Conscientiousness => "sifat kehati-hatian dan kedisiplinan yang baik",
            Strength::Leadership => "potensi kepemimpinan yang menonjol",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DevelopmentArea {
    /// Verbal score below 60.
    Verbal,
    /// Neuroticism above 60.
    EmotionalStability,
    /// Teamwork competency below 60.
    Teamwork,
}

impl fmt::Display for DevelopmentArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DevelopmentArea::Verbal => "kemampuan komunikasi verbal",
            DevelopmentArea::EmotionalStability => "manajemen stres dan stabilitas emosi",
            DevelopmentArea::Teamwork => "kolaborasi dan kerja sama tim",
        })
    }
}

/// Threshold-based executive summary of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub strengths: Vec<Strength>,
    pub development_areas: Vec<DevelopmentArea>,
}

impl Summary {
    pub fn from_results(results: &TestResults) -> Self {
        let mut strengths = Vec::new();
        if results.competencies.analytical >= 70 {
            strengths.push(Strength::Analytical);
        }
        if results.personality.conscientiousness >= 70 {
            strengths.push(Strength::Conscientiousness);
        }
        if results.competencies.leadership >= 70 {
            strengths.push(Strength::Leadership);
        }

        let mut development_areas = Vec::new();
        if results.cognitive.verbal < 60 {
            development_areas.push(DevelopmentArea::Verbal);
        }
        if results.personality.neuroticism > 60 {
            development_areas.push(DevelopmentArea::EmotionalStability);
        }
        if results.competencies.teamwork < 60 {
            development_areas.push(DevelopmentArea::Teamwork);
        }

        Self {
            strengths,
            development_areas,
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.strengths.is_empty() && self.development_areas.is_empty()
    }

    /// The summary as a single paragraph of Indonesian prose.
    pub fn narrative(&self) -> String {
        if self.is_balanced() {
            return BALANCED_PROFILE.to_string();
        }

        let mut text = String::from(SUMMARY_LEAD);
        if !self.strengths.is_empty() {
            text.push_str(&join(&self.strengths));
            text.push_str(". ");
        }
        if !self.development_areas.is_empty() {
            text.push_str(DEVELOPMENT_LEAD);
            text.push_str(&join(&self.development_areas));
            text.push('.');
        }
        text.truncate(text.trim_end().len());
        text
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerStore;
    use crate::scoring;
    use chrono::Utc;

    fn neutral() -> TestResults {
        scoring::evaluate(&AnswerStore::new(), Utc::now())
    }

    #[test]
    fn level_bands() {
        assert_eq!(TraitLevel::from_score(100), TraitLevel::VeryHigh);
        assert_eq!(TraitLevel::from_score(80), TraitLevel::VeryHigh);
        assert_eq!(TraitLevel::from_score(79), TraitLevel::High);
        assert_eq!(TraitLevel::from_score(60), TraitLevel::High);
        assert_eq!(TraitLevel::from_score(59), TraitLevel::Moderate);
        assert_eq!(TraitLevel::from_score(40), TraitLevel::Moderate);
        assert_eq!(TraitLevel::from_score(20), TraitLevel::Low);
        assert_eq!(TraitLevel::from_score(19), TraitLevel::VeryLow);
        assert_eq!(TraitLevel::from_score(0).to_string(), "Sangat Rendah");
    }

    #[test]
    fn star_ratings() {
        assert_eq!(stars(0), 0);
        assert_eq!(stars(9), 0);
        assert_eq!(stars(10), 1);
        assert_eq!(stars(50), 3);
        assert_eq!(stars(69), 3);
        assert_eq!(stars(70), 4);
        assert_eq!(stars(100), 5);
        assert_eq!(stars(155), 5);
    }

    #[test]
    fn radar_replaces_neuroticism_with_stability() {
        let personality = PersonalityScores {
            openness: 70,
            conscientiousness: 55,
            extraversion: 40,
            agreeableness: 85,
            neuroticism: 65,
        };
        let axes = radar_axes(&personality);
        assert_eq!(axes[0].label, "Keterbukaan");
        assert_eq!(axes[0].value, 70);
        assert_eq!(axes[4].label, STABILITY_LABEL);
        assert_eq!(axes[4].value, 35);
    }

    #[test]
    fn neutral_profile_needs_development() {
        // verbal 0, teamwork 50
        let summary = Summary::from_results(&neutral());
        assert!(summary.strengths.is_empty());
        assert_eq!(
            summary.development_areas,
            vec![DevelopmentArea::Verbal, DevelopmentArea::Teamwork]
        );
        assert_eq!(
            summary.narrative(),
            "Berdasarkan hasil tes, kandidat menunjukkan: Area yang perlu diperhatikan \
             untuk pengembangan: kemampuan komunikasi verbal, kolaborasi dan kerja sama tim."
        );
    }

    #[test]
    fn balanced_profile() {
        let mut results = neutral();
        results.cognitive.verbal = 60;
        results.competencies.teamwork = 60;
        results.personality.neuroticism = 60;
        results.competencies.analytical = 69;
        results.personality.conscientiousness = 69;
        results.competencies.leadership = 69;

        let summary = Summary::from_results(&results);
        assert!(summary.is_balanced());
        assert!(summary.narrative().starts_with("Kandidat menunjukkan profil yang seimbang"));
    }

    #[test]
    fn strengths_and_development_areas_in_rule_order() {
        let mut results = neutral();
        results.competencies.analytical = 70;
        results.competencies.leadership = 88;
        results.personality.conscientiousness = 75;
        results.personality.neuroticism = 61;
        results.cognitive.verbal = 80;
        results.competencies.teamwork = 70;

        let summary = Summary::from_results(&results);
        assert_eq!(
            summary.strengths,
            vec![
                Strength::Analytical,
                Strength::Conscientiousness,
                Strength::Leadership
            ]
        );
        assert_eq!(
            summary.development_areas,
            vec![DevelopmentArea::EmotionalStability]
        );
        assert_eq!(
            summary.narrative(),
            "Berdasarkan hasil tes, kandidat menunjukkan: kemampuan analisis yang kuat, \
             sifat kehati-hatian dan kedisiplinan yang baik, potensi kepemimpinan yang menonjol. \
             Area yang perlu diperhatikan untuk pengembangan: manajemen stres dan stabilitas emosi."
        );
    }

    #[test]
    fn strengths_only_has_no_trailing_space() {
        let mut results = neutral();
        results.competencies.analytical = 90;
        results.cognitive.verbal = 60;
        results.competencies.teamwork = 60;

        let narrative = Summary::from_results(&results).narrative();
        assert!(narrative.ends_with("kemampuan analisis yang kuat."));
    }

    #[test]
    fn cognitive_labels() {
        assert_eq!(cognitive_axis_label(Module::Numeric), "Numerik");
        assert_eq!(cognitive_field_label(Module::Visual), "Pola Visual");
    }
}
