//! Cognitive aptitude scoring for the four timed modules.

use serde::{Deserialize, Serialize};

use super::round;
use crate::answers::AnswerStore;
use crate::bank;
use crate::model::Module;

/// Percent-correct per cognitive module, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitiveScores {
    pub logic: u8,
    pub numeric: u8,
    pub verbal: u8,
    pub visual: u8,
    /// Unweighted mean of the four module scores.
    pub overall: u8,
}

impl CognitiveScores {
    /// An item counts as correct only when its stored option index equals the
    /// bank's correct index; unanswered items are simply incorrect.
    pub fn compute(answers: &AnswerStore) -> Self {
        let logic = module_score(answers, Module::Logic);
        let numeric = module_score(answers, Module::Numeric);
        let verbal = module_score(answers, Module::Verbal);
        let visual = module_score(answers, Module::Visual);
        let sum = u32::from(logic) + u32::from(numeric) + u32::from(verbal) + u32::from(visual);

        Self {
            logic,
            numeric,
            verbal,
            visual,
            overall: round(f64::from(sum) / 4.0) as u8,
        }
    }

    /// Score for one cognitive module; 0 for non-cognitive modules.
    pub fn get(&self, module: Module) -> u8 {
        match module {
            Module::Logic => self.logic,
            Module::Numeric => self.numeric,
            Module::Verbal => self.verbal,
            Module::Visual => self.visual,
            Module::Personality | Module::Interest => 0,
        }
    }

    /// `(module, score)` pairs for the four modules, excluding `overall`.
    pub fn entries(&self) -> [(Module, u8); 4] {
        Module::COGNITIVE.map(|m| (m, self.get(m)))
    }
}

/// Number of correctly answered items in `module`.
pub(crate) fn correct_count(answers: &AnswerStore, module: Module) -> usize {
    bank::cognitive_questions(module)
        .enumerate()
        .filter(|(index, question)| answers.option(module, *index) == Some(question.correct))
        .count()
}

fn module_score(answers: &AnswerStore, module: Module) -> u8 {
    let total = module.question_count();
    let correct = correct_count(answers, module);
    round((correct as f64 / total as f64) * 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Answer;

    fn answer_all(store: &mut AnswerStore, module: Module, option: u8) {
        for index in 0..module.question_count() {
            store
                .record(module, index, Answer::OptionIndex(option))
                .unwrap();
        }
    }

    #[test]
    fn nothing_answered_scores_zero() {
        let scores = CognitiveScores::compute(&AnswerStore::new());
        assert_eq!(scores, CognitiveScores {
            logic: 0,
            numeric: 0,
            verbal: 0,
            visual: 0,
            overall: 0,
        });
    }

    #[test]
    fn all_correct_scores_hundred() {
        let mut store = AnswerStore::new();
        for module in Module::COGNITIVE {
            for (index, q) in bank::cognitive_questions(module).enumerate() {
                store
                    .record(module, index, Answer::OptionIndex(q.correct))
                    .unwrap();
            }
        }
        let scores = CognitiveScores::compute(&store);
        assert_eq!([scores.logic, scores.numeric, scores.verbal, scores.visual, scores.overall], [100; 5]);
    }

    #[test]
    fn all_first_option_follows_bank_cycles() {
        // Logic cycle correct = [2,1,2,2,3]: no item keyed 0.
        // Numeric cycle correct = [1,2,0,2]: 5 of 20.
        // Verbal cycle correct = [0,1,2,2]: indices 0,4,..,24 -> 7 of 25.
        // Visual cycle correct = [1,0,2]: 5 of 15.
        let mut store = AnswerStore::new();
        for module in Module::COGNITIVE {
            answer_all(&mut store, module, 0);
        }
        let scores = CognitiveScores::compute(&store);
        assert_eq!(scores.logic, 0);
        assert_eq!(scores.numeric, 25);
        assert_eq!(scores.verbal, 28);
        assert_eq!(scores.visual, 33);
        // (0 + 25 + 28 + 33) / 4 = 21.5
        assert_eq!(scores.overall, 22);
    }

    #[test]
    fn all_third_option_follows_bank_cycles() {
        let mut store = AnswerStore::new();
        for module in Module::COGNITIVE {
            answer_all(&mut store, module, 2);
        }
        let scores = CognitiveScores::compute(&store);
        assert_eq!(scores.logic, 60);
        assert_eq!(scores.numeric, 50);
        assert_eq!(scores.verbal, 48);
        assert_eq!(scores.visual, 33);
        assert_eq!(scores.overall, 48);
    }

    #[test]
    fn overall_within_rounding_of_mean() {
        let mut store = AnswerStore::new();
        answer_all(&mut store, Module::Logic, 2);
        answer_all(&mut store, Module::Verbal, 1);
        let s = CognitiveScores::compute(&store);
        let mean = (s.logic as f64 + s.numeric as f64 + s.verbal as f64 + s.visual as f64) / 4.0;
        assert!((s.overall as f64 - mean).abs() <= 1.0);
    }

    #[test]
    fn entries_exclude_overall() {
        let scores = CognitiveScores {
            logic: 1,
            numeric: 2,
            verbal: 3,
            visual: 4,
            overall: 3,
        };
        assert_eq!(
            scores.entries(),
            [
                (Module::Logic, 1),
                (Module::Numeric, 2),
                (Module::Verbal, 3),
                (Module::Visual, 4)
            ]
        );
        assert_eq!(scores.get(Module::Personality), 0);
    }
}
