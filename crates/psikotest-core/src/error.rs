//! Error types for answer recording, candidate registration, and sessions.
//!
//! The scoring engine itself has no error type: it is total over any answer
//! store. These errors only surface at the edges, where a front end records a
//! single answer or submits a registration form.

use thiserror::Error;

use crate::model::{AnswerKind, Module};

/// Errors raised when recording a single answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    /// The module key is not one of the six known modules.
    #[error("unknown module: {0}")]
    UnknownModule(String),

    /// An answer key was not of the form `<module>_<index>`.
    #[error("malformed answer key: {0}")]
    MalformedKey(String),

    /// The question index is past the end of the module.
    #[error("question {index} out of range for {module} ({count} questions)")]
    IndexOutOfRange {
        module: Module,
        index: usize,
        count: usize,
    },

    /// A Likert value outside 1–5.
    #[error("likert answer must be between 1 and 5, got {0}")]
    InvalidLikert(u8),

    /// An option index past the question's option list.
    #[error("option {option} out of range for {module} question {index} ({count} options)")]
    InvalidOption {
        module: Module,
        index: usize,
        option: u8,
        count: usize,
    },

    /// A forced-choice value other than A or B.
    #[error("choice must be \"A\" or \"B\", got {0:?}")]
    InvalidChoice(String),

    /// The answer kind does not match the module it is recorded under.
    #[error("{module} expects a {expected} answer")]
    KindMismatch { module: Module, expected: AnswerKind },
}

/// Errors raised when a registration form cannot become a `Candidate`.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// One or more fields failed validation.
    #[error("invalid registration: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    /// A select field held a value outside its enumeration.
    #[error("unknown {field}: {value}")]
    UnknownOption { field: &'static str, value: String },
}

/// Errors raised when a session operation does not fit its current stage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no candidate registered; run registration first")]
    NotRegistered,

    #[error("a candidate is already registered; reset the session to start over")]
    AlreadyRegistered,

    /// Results are written once per session.
    #[error("the test has already been scored; reset the session to retake it")]
    AlreadyScored,

    #[error("test incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
}
