//! The answer store.
//!
//! Answers are keyed by module and zero-based question index. On disk (and in
//! the legacy browser format) the store is a flat JSON object keyed by
//! `<module>_<index>`, whose values are loosely typed: a number for Likert and
//! option answers, `"A"`/`"B"` for forced choices. Recording goes through
//! strict validation; importing a flat map is lenient and drops anything it
//! cannot interpret, so a corrupt entry scores exactly like a missing one.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bank;
use crate::error::AnswerError;
use crate::model::{total_question_count, AnswerKind, Module};

/// Flat persisted shape: `{ "<module>_<index>": value }`.
pub type RawAnswers = BTreeMap<String, Value>;

/// Forced-choice tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl FromStr for Choice {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Choice::A),
            "B" | "b" => Ok(Choice::B),
            other => Err(AnswerError::InvalidChoice(other.to_string())),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::A => write!(f, "A"),
            Choice::B => write!(f, "B"),
        }
    }
}

/// A single recorded response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    /// Agreement on a 1–5 scale (personality).
    Likert(u8),
    /// Zero-based option index (logic, numeric, verbal, visual).
    OptionIndex(u8),
    /// Forced choice (interest).
    Choice(Choice),
}

impl Answer {
    pub fn kind(&self) -> AnswerKind {
        match self {
            Answer::Likert(_) => AnswerKind::Likert,
            Answer::OptionIndex(_) => AnswerKind::OptionIndex,
            Answer::Choice(_) => AnswerKind::Choice,
        }
    }

    /// Parse user input for a question in `module`.
    pub fn parse(module: Module, input: &str) -> Result<Answer, AnswerError> {
        let input = input.trim();
        match module.answer_kind() {
            AnswerKind::Choice => input.parse().map(Answer::Choice),
            AnswerKind::Likert => input
                .parse::<u8>()
                .map(Answer::Likert)
                .map_err(|_| AnswerError::KindMismatch {
                    module,
                    expected: AnswerKind::Likert,
                }),
            AnswerKind::OptionIndex => input
                .parse::<u8>()
                .map(Answer::OptionIndex)
                .map_err(|_| AnswerError::KindMismatch {
                    module,
                    expected: AnswerKind::OptionIndex,
                }),
        }
    }

    fn to_value(self) -> Value {
        match self {
            Answer::Likert(v) | Answer::OptionIndex(v) => Value::from(v),
            Answer::Choice(c) => Value::from(c.to_string()),
        }
    }
}

/// Composite answer key: module plus zero-based question index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnswerKey {
    pub module: Module,
    pub index: usize,
}

impl AnswerKey {
    pub fn new(module: Module, index: usize) -> Self {
        Self { module, index }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.module, self.index)
    }
}

impl FromStr for AnswerKey {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module, index) = s
            .rsplit_once('_')
            .ok_or_else(|| AnswerError::MalformedKey(s.to_string()))?;
        let module: Module = module
            .parse()
            .map_err(|_| AnswerError::UnknownModule(module.to_string()))?;
        let index = index
            .parse()
            .map_err(|_| AnswerError::MalformedKey(s.to_string()))?;
        Ok(AnswerKey { module, index })
    }
}

/// Check that `answer` is a legal response to question `index` of `module`.
fn validate(module: Module, index: usize, answer: Answer) -> Result<(), AnswerError> {
    let count = module.question_count();
    if index >= count {
        return Err(AnswerError::IndexOutOfRange {
            module,
            index,
            count,
        });
    }
    if answer.kind() != module.answer_kind() {
        return Err(AnswerError::KindMismatch {
            module,
            expected: module.answer_kind(),
        });
    }
    match answer {
        Answer::Likert(v) if !(1..=5).contains(&v) => Err(AnswerError::InvalidLikert(v)),
        Answer::OptionIndex(option) => {
            let options = bank::cognitive_question(module, index)
                .map(|q| q.options.len())
                .unwrap_or(0);
            if (option as usize) < options {
                Ok(())
            } else {
                Err(AnswerError::InvalidOption {
                    module,
                    index,
                    option,
                    count: options,
                })
            }
        }
        _ => Ok(()),
    }
}

/// Read a small non-negative integer from a JSON number, accepting `2.0`.
fn small_int(value: &Value) -> Option<u8> {
    if let Some(n) = value.as_u64() {
        return u8::try_from(n).ok();
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&f) {
        Some(f as u8)
    } else {
        None
    }
}

/// Interpret a loosely typed persisted value for `module`.
fn interpret(module: Module, value: &Value) -> Option<Answer> {
    match module.answer_kind() {
        AnswerKind::Likert => match value {
            Value::String(s) => s.trim().parse().ok().map(Answer::Likert),
            other => small_int(other).map(Answer::Likert),
        },
        AnswerKind::OptionIndex => small_int(value).map(Answer::OptionIndex),
        AnswerKind::Choice => match value.as_str() {
            Some("A") => Some(Answer::Choice(Choice::A)),
            Some("B") => Some(Answer::Choice(Choice::B)),
            _ => None,
        },
    }
}

/// Mapping from answer key to the candidate's response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAnswers", into = "RawAnswers")]
pub struct AnswerStore {
    entries: BTreeMap<AnswerKey, Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous one for the same question.
    ///
    /// Returns the previous answer, if there was one.
    pub fn record(
        &mut self,
        module: Module,
        index: usize,
        answer: Answer,
    ) -> Result<Option<Answer>, AnswerError> {
        validate(module, index, answer)?;
        Ok(self.entries.insert(AnswerKey::new(module, index), answer))
    }

    /// Parse `input` for `module` and record it.
    pub fn record_input(
        &mut self,
        module: Module,
        index: usize,
        input: &str,
    ) -> Result<Option<Answer>, AnswerError> {
        let answer = Answer::parse(module, input)?;
        self.record(module, index, answer)
    }

    /// Import a flat key/value map, dropping entries that cannot be read.
    pub fn from_raw(raw: &RawAnswers) -> Self {
        let mut store = Self::new();
        for (key, value) in raw {
            let parsed = key.parse::<AnswerKey>().and_then(|k| {
                let answer = interpret(k.module, value).ok_or(AnswerError::KindMismatch {
                    module: k.module,
                    expected: k.module.answer_kind(),
                })?;
                validate(k.module, k.index, answer)?;
                Ok((k, answer))
            });
            match parsed {
                Ok((k, answer)) => {
                    store.entries.insert(k, answer);
                }
                Err(e) => {
                    tracing::warn!(key = %key, value = %value, "dropping answer entry: {e}");
                }
            }
        }
        store
    }

    /// Export as the flat persisted map.
    pub fn to_raw(&self) -> RawAnswers {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_value()))
            .collect()
    }

    pub fn get(&self, module: Module, index: usize) -> Option<Answer> {
        self.entries.get(&AnswerKey::new(module, index)).copied()
    }

    /// The Likert value for personality item `index`, if answered.
    pub fn likert(&self, index: usize) -> Option<u8> {
        match self.get(Module::Personality, index) {
            Some(Answer::Likert(v)) => Some(v),
            _ => None,
        }
    }

    /// The chosen option index for a cognitive item, if answered.
    pub fn option(&self, module: Module, index: usize) -> Option<u8> {
        match self.get(module, index) {
            Some(Answer::OptionIndex(v)) => Some(v),
            _ => None,
        }
    }

    /// The forced choice for interest item `index`, if answered.
    pub fn choice(&self, index: usize) -> Option<Choice> {
        match self.get(Module::Interest, index) {
            Some(Answer::Choice(c)) => Some(c),
            _ => None,
        }
    }

    /// Number of answered questions in `module`.
    pub fn answered(&self, module: Module) -> usize {
        self.entries.keys().filter(|k| k.module == module).count()
    }

    pub fn is_module_complete(&self, module: Module) -> bool {
        self.answered(module) == module.question_count()
    }

    /// True when every question of every module has an answer.
    pub fn is_complete(&self) -> bool {
        self.entries.len() == total_question_count()
    }

    /// First module (in administration order) with unanswered questions.
    pub fn next_incomplete_module(&self) -> Option<Module> {
        Module::ALL
            .into_iter()
            .find(|m| !self.is_module_complete(*m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnswerKey, &Answer)> {
        self.entries.iter()
    }
}

impl From<RawAnswers> for AnswerStore {
    fn from(raw: RawAnswers) -> Self {
        AnswerStore::from_raw(&raw)
    }
}

impl From<AnswerStore> for RawAnswers {
    fn from(store: AnswerStore) -> Self {
        store.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn answer_key_display_and_parse() {
        let key = AnswerKey::new(Module::Logic, 12);
        assert_eq!(key.to_string(), "logic_12");
        assert_eq!("logic_12".parse::<AnswerKey>().unwrap(), key);
        assert_eq!(
            "memory_1".parse::<AnswerKey>(),
            Err(AnswerError::UnknownModule("memory".into()))
        );
        assert!(matches!(
            "logic".parse::<AnswerKey>(),
            Err(AnswerError::MalformedKey(_))
        ));
        assert!(matches!(
            "logic_x".parse::<AnswerKey>(),
            Err(AnswerError::MalformedKey(_))
        ));
    }

    #[test]
    fn record_validates_each_kind() {
        let mut store = AnswerStore::new();
        assert!(store
            .record(Module::Personality, 0, Answer::Likert(5))
            .is_ok());
        assert_eq!(
            store.record(Module::Personality, 1, Answer::Likert(6)),
            Err(AnswerError::InvalidLikert(6))
        );
        assert_eq!(
            store.record(Module::Personality, 1, Answer::Likert(0)),
            Err(AnswerError::InvalidLikert(0))
        );
        assert!(store
            .record(Module::Logic, 0, Answer::OptionIndex(3))
            .is_ok());
        assert!(matches!(
            store.record(Module::Logic, 0, Answer::OptionIndex(4)),
            Err(AnswerError::InvalidOption { count: 4, .. })
        ));
        assert!(matches!(
            store.record(Module::Visual, 15, Answer::OptionIndex(0)),
            Err(AnswerError::IndexOutOfRange { count: 15, .. })
        ));
        assert!(matches!(
            store.record(Module::Interest, 0, Answer::Likert(3)),
            Err(AnswerError::KindMismatch { .. })
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn record_overwrites_and_returns_previous() {
        let mut store = AnswerStore::new();
        store
            .record(Module::Interest, 4, Answer::Choice(Choice::A))
            .unwrap();
        let previous = store
            .record(Module::Interest, 4, Answer::Choice(Choice::B))
            .unwrap();
        assert_eq!(previous, Some(Answer::Choice(Choice::A)));
        assert_eq!(store.choice(4), Some(Choice::B));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn record_input_parses_by_module() {
        let mut store = AnswerStore::new();
        store.record_input(Module::Personality, 3, "4").unwrap();
        store.record_input(Module::Numeric, 2, " 0 ").unwrap();
        store.record_input(Module::Interest, 7, "b").unwrap();
        assert_eq!(store.likert(3), Some(4));
        assert_eq!(store.option(Module::Numeric, 2), Some(0));
        assert_eq!(store.choice(7), Some(Choice::B));
        assert!(store.record_input(Module::Interest, 8, "C").is_err());
        assert!(store.record_input(Module::Logic, 1, "two").is_err());
    }

    #[test]
    fn from_raw_drops_malformed_entries() {
        let raw: RawAnswers = serde_json::from_value(json!({
            "personality_0": 4,
            "personality_1": "5",
            "personality_2": "lots",
            "personality_3": 9,
            "logic_0": 2,
            "logic_1": "1",
            "numeric_0": 1.0,
            "interest_0": "A",
            "interest_1": "a",
            "interest_2": 1,
            "visual_99": 0,
            "memory_0": 1,
            "garbage": true
        }))
        .unwrap();

        let store = AnswerStore::from_raw(&raw);
        assert_eq!(store.likert(0), Some(4));
        assert_eq!(store.likert(1), Some(5));
        assert_eq!(store.likert(2), None);
        assert_eq!(store.likert(3), None);
        assert_eq!(store.option(Module::Logic, 0), Some(2));
        assert_eq!(store.option(Module::Logic, 1), None);
        assert_eq!(store.option(Module::Numeric, 0), Some(1));
        assert_eq!(store.choice(0), Some(Choice::A));
        assert_eq!(store.choice(1), None);
        assert_eq!(store.choice(2), None);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn serializes_as_flat_map() {
        let mut store = AnswerStore::new();
        store.record(Module::Personality, 0, Answer::Likert(2)).unwrap();
        store.record(Module::Verbal, 10, Answer::OptionIndex(1)).unwrap();
        store
            .record(Module::Interest, 29, Answer::Choice(Choice::B))
            .unwrap();

        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(
            json,
            json!({ "personality_0": 2, "verbal_10": 1, "interest_29": "B" })
        );

        let back: AnswerStore = serde_json::from_value(json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn progress_queries() {
        let mut store = AnswerStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_incomplete_module(), Some(Module::Personality));
        for i in 0..50 {
            store.record(Module::Personality, i, Answer::Likert(3)).unwrap();
        }
        assert!(store.is_module_complete(Module::Personality));
        assert_eq!(store.answered(Module::Personality), 50);
        assert_eq!(store.next_incomplete_module(), Some(Module::Logic));
        assert!(!store.is_complete());
    }
}
