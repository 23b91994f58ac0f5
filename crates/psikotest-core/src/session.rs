//! Resumable session state over a key-value store.
//!
//! A session persists three values under fixed keys: the registered
//! candidate, the answers recorded so far, and the scored results. On load
//! the stored values decide where the candidate resumes. If any of them
//! cannot be parsed, every key is cleared and the session starts fresh.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::answers::{Answer, AnswerStore};
use crate::error::SessionError;
use crate::model::{total_question_count, Candidate, Module};
use crate::results::TestResults;
use crate::scoring;

pub const CANDIDATE_KEY: &str = "psikotest_candidate";
pub const ANSWERS_KEY: &str = "psikotest_answers";
pub const RESULTS_KEY: &str = "psikotest_results";

const ALL_KEYS: [&str; 3] = [CANDIDATE_KEY, ANSWERS_KEY, RESULTS_KEY];

/// String-valued persistent storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let path = self.path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

/// In-process store, used by tests and embedders.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| anyhow!("memory store mutex poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values()?.remove(key);
        Ok(())
    }
}

/// Where a loaded session resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing stored.
    Fresh,
    /// Candidate registered, no answers yet.
    Registered,
    /// At least one answer recorded.
    InProgress,
    /// Results exist.
    Completed,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Fresh => "fresh",
            Stage::Registered => "registered",
            Stage::InProgress => "in progress",
            Stage::Completed => "completed",
        }
    }
}

/// A candidate's test session backed by a [`KeyValueStore`].
pub struct Session<S: KeyValueStore> {
    store: S,
    candidate: Option<Candidate>,
    answers: AnswerStore,
    results: Option<TestResults>,
}

impl<S: KeyValueStore> Session<S> {
    /// Load persisted state from `store`.
    ///
    /// Unparseable state is discarded, not reported: the caller gets a fresh
    /// session. Only storage I/O failures are errors.
    pub fn load(store: S) -> Result<Self> {
        match Self::read_state(&store) {
            Ok((candidate, answers, results)) => {
                let session = Self {
                    store,
                    candidate,
                    answers,
                    results,
                };
                tracing::debug!(stage = session.stage().label(), "session loaded");
                Ok(session)
            }
            Err(StateError::Corrupt(e)) => {
                tracing::warn!("discarding corrupt session state: {e:#}");
                for key in ALL_KEYS {
                    store.remove(key)?;
                }
                Ok(Self::fresh(store))
            }
            Err(StateError::Io(e)) => Err(e),
        }
    }

    fn fresh(store: S) -> Self {
        Self {
            store,
            candidate: None,
            answers: AnswerStore::new(),
            results: None,
        }
    }

    fn read_state(
        store: &S,
    ) -> Result<(Option<Candidate>, AnswerStore, Option<TestResults>), StateError> {
        let candidate = read_value(store, CANDIDATE_KEY)?;
        let answers = read_value(store, ANSWERS_KEY)?.unwrap_or_default();
        let results = read_value(store, RESULTS_KEY)?;
        Ok((candidate, answers, results))
    }

    pub fn stage(&self) -> Stage {
        if self.results.is_some() {
            Stage::Completed
        } else if !self.answers.is_empty() {
            Stage::InProgress
        } else if self.candidate.is_some() {
            Stage::Registered
        } else {
            Stage::Fresh
        }
    }

    pub fn candidate(&self) -> Option<&Candidate> {
        self.candidate.as_ref()
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn results(&self) -> Option<&TestResults> {
        self.results.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store a newly registered candidate.
    pub fn register(&mut self, candidate: Candidate) -> Result<()> {
        if self.candidate.is_some() {
            return Err(SessionError::AlreadyRegistered.into());
        }
        write_value(&self.store, CANDIDATE_KEY, &candidate)?;
        tracing::info!(name = %candidate.name, "candidate registered");
        self.candidate = Some(candidate);
        Ok(())
    }

    /// Record one answer and persist the updated answer set.
    pub fn answer(&mut self, module: Module, index: usize, answer: Answer) -> Result<Option<Answer>> {
        self.ensure_answerable()?;
        let previous = self.answers.record(module, index, answer)?;
        write_value(&self.store, ANSWERS_KEY, &self.answers)?;
        Ok(previous)
    }

    /// Merge imported answers over the current ones and persist.
    ///
    /// Returns the number of entries taken from `imported`.
    pub fn import(&mut self, imported: &AnswerStore) -> Result<usize> {
        self.ensure_answerable()?;
        for (key, answer) in imported.iter() {
            self.answers.record(key.module, key.index, *answer)?;
        }
        write_value(&self.store, ANSWERS_KEY, &self.answers)?;
        Ok(imported.len())
    }

    fn ensure_answerable(&self) -> Result<(), SessionError> {
        if self.results.is_some() {
            return Err(SessionError::AlreadyScored);
        }
        if self.candidate.is_none() {
            return Err(SessionError::NotRegistered);
        }
        Ok(())
    }

    /// Score the recorded answers and persist the results.
    ///
    /// Refuses a session that already has results, and an incomplete one
    /// unless `allow_incomplete` is set. Missing answers then score with the
    /// engine's defaults.
    pub fn score(&mut self, completed_at: DateTime<Utc>, allow_incomplete: bool) -> Result<&TestResults> {
        if self.results.is_some() {
            return Err(SessionError::AlreadyScored.into());
        }
        if self.candidate.is_none() {
            return Err(SessionError::NotRegistered.into());
        }
        if !allow_incomplete && !self.answers.is_complete() {
            return Err(SessionError::Incomplete {
                answered: self.answers.len(),
                total: total_question_count(),
            }
            .into());
        }

        let results = scoring::evaluate(&self.answers, completed_at);
        write_value(&self.store, RESULTS_KEY, &results)?;
        tracing::info!(answered = self.answers.len(), "results stored");
        Ok(&*self.results.insert(results))
    }

    /// Discard everything so the candidate can retake the test.
    pub fn reset(&mut self) -> Result<()> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        self.candidate = None;
        self.answers = AnswerStore::new();
        self.results = None;
        tracing::info!("session reset");
        Ok(())
    }
}

enum StateError {
    Io(anyhow::Error),
    Corrupt(anyhow::Error),
}

fn read_value<S: KeyValueStore, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StateError> {
    let Some(raw) = store.get(key).map_err(StateError::Io)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .with_context(|| format!("failed to parse stored {key}"))
        .map_err(StateError::Corrupt)
}

fn write_value<S: KeyValueStore, T: Serialize>(store: &S, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).with_context(|| format!("failed to serialize {key}"))?;
    store.set(key, &json)
}
