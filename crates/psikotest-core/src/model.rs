//! Core data model types for psikotest.
//!
//! Modules, answer kinds, RIASEC dimensions, and the candidate record with
//! its registration form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::RegistrationError;

/// One of the six test sections, in administration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Personality,
    Logic,
    Numeric,
    Verbal,
    Visual,
    Interest,
}

impl Module {
    /// All modules in the order they are administered.
    pub const ALL: [Module; 6] = [
        Module::Personality,
        Module::Logic,
        Module::Numeric,
        Module::Verbal,
        Module::Visual,
        Module::Interest,
    ];

    /// The four timed modules scored for cognitive aptitude.
    pub const COGNITIVE: [Module; 4] = [
        Module::Logic,
        Module::Numeric,
        Module::Verbal,
        Module::Visual,
    ];

    /// Key used as the answer-key prefix (e.g. `logic` in `logic_3`).
    pub fn key(&self) -> &'static str {
        match self {
            Module::Personality => "personality",
            Module::Logic => "logic",
            Module::Numeric => "numeric",
            Module::Verbal => "verbal",
            Module::Visual => "visual",
            Module::Interest => "interest",
        }
    }

    /// Display title shown to the candidate.
    pub fn title(&self) -> &'static str {
        match self {
            Module::Personality => "Tes Kepribadian",
            Module::Logic => "Tes Logika & Penalaran",
            Module::Numeric => "Tes Kemampuan Numerik",
            Module::Verbal => "Tes Kemampuan Verbal",
            Module::Visual => "Tes Pola Visual",
            Module::Interest => "Tes Minat & Bakat",
        }
    }

    /// Number of questions administered in this module.
    pub fn question_count(&self) -> usize {
        match self {
            Module::Personality => 50,
            Module::Logic => 25,
            Module::Numeric => 20,
            Module::Verbal => 25,
            Module::Visual => 15,
            Module::Interest => 30,
        }
    }

    /// Time limit in minutes, `None` for untimed modules.
    pub fn time_limit_minutes(&self) -> Option<u32> {
        match self {
            Module::Personality | Module::Interest => None,
            Module::Logic => Some(30),
            Module::Numeric => Some(25),
            Module::Verbal => Some(20),
            Module::Visual => Some(15),
        }
    }

    /// The kind of answer this module accepts.
    pub fn answer_kind(&self) -> AnswerKind {
        match self {
            Module::Personality => AnswerKind::Likert,
            Module::Interest => AnswerKind::Choice,
            _ => AnswerKind::OptionIndex,
        }
    }

    pub fn is_cognitive(&self) -> bool {
        self.answer_kind() == AnswerKind::OptionIndex
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personality" => Ok(Module::Personality),
            "logic" => Ok(Module::Logic),
            "numeric" => Ok(Module::Numeric),
            "verbal" => Ok(Module::Verbal),
            "visual" => Ok(Module::Visual),
            "interest" => Ok(Module::Interest),
            other => Err(format!("unknown module: {other}")),
        }
    }
}

/// Total number of answers in a completed test.
pub fn total_question_count() -> usize {
    Module::ALL.iter().map(Module::question_count).sum()
}

/// Shape of the answer a module accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    /// Agreement on a 1–5 scale.
    Likert,
    /// Zero-based index into the question's options.
    OptionIndex,
    /// Forced choice between option A and option B.
    Choice,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKind::Likert => write!(f, "likert"),
            AnswerKind::OptionIndex => write!(f, "option index"),
            AnswerKind::Choice => write!(f, "forced-choice"),
        }
    }
}

/// The six RIASEC interest dimensions, in declaration order.
///
/// Declaration order is also the tie-break order when ranking interests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiasecDimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecDimension {
    pub const ALL: [RiasecDimension; 6] = [
        RiasecDimension::Realistic,
        RiasecDimension::Investigative,
        RiasecDimension::Artistic,
        RiasecDimension::Social,
        RiasecDimension::Enterprising,
        RiasecDimension::Conventional,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiasecDimension::Realistic => "Realistic",
            RiasecDimension::Investigative => "Investigative",
            RiasecDimension::Artistic => "Artistic",
            RiasecDimension::Social => "Social",
            RiasecDimension::Enterprising => "Enterprising",
            RiasecDimension::Conventional => "Conventional",
        }
    }
}

impl fmt::Display for RiasecDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// Candidate gender as captured at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(rename = "pria")]
    Male,
    #[serde(rename = "wanita")]
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pria" | "male" => Ok(Gender::Male),
            "wanita" | "female" => Ok(Gender::Female),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Pria"),
            Gender::Female => write!(f, "Wanita"),
        }
    }
}

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Education {
    Sma,
    D3,
    S1,
    S2,
    S3,
}

impl FromStr for Education {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sma" | "smk" | "sma/smk" => Ok(Education::Sma),
            "d3" => Ok(Education::D3),
            "s1" => Ok(Education::S1),
            "s2" => Ok(Education::S2),
            "s3" => Ok(Education::S3),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Education::Sma => write!(f, "SMA/SMK"),
            Education::D3 => write!(f, "D3"),
            Education::S1 => write!(f, "S1"),
            Education::S2 => write!(f, "S2"),
            Education::S3 => write!(f, "S3"),
        }
    }
}

/// Years-of-experience bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceBracket {
    #[serde(rename = "0")]
    FreshGraduate,
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "6-10")]
    SixToTen,
    #[serde(rename = "10+")]
    MoreThanTen,
}

impl FromStr for ExperienceBracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(ExperienceBracket::FreshGraduate),
            "1-2" => Ok(ExperienceBracket::OneToTwo),
            "3-5" => Ok(ExperienceBracket::ThreeToFive),
            "6-10" => Ok(ExperienceBracket::SixToTen),
            "10+" => Ok(ExperienceBracket::MoreThanTen),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for ExperienceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceBracket::FreshGraduate => write!(f, "Fresh Graduate"),
            ExperienceBracket::OneToTwo => write!(f, "1-2 tahun"),
            ExperienceBracket::ThreeToFive => write!(f, "3-5 tahun"),
            ExperienceBracket::SixToTen => write!(f, "6-10 tahun"),
            ExperienceBracket::MoreThanTen => write!(f, "Lebih dari 10 tahun"),
        }
    }
}

/// Registration form as entered by the candidate, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Registration {
    #[validate(length(min = 1, message = "Nama Lengkap wajib diisi."))]
    pub name: String,
    #[validate(email(message = "Format email tidak valid."))]
    pub email: String,
    #[validate(length(min = 1, message = "Nomor HP wajib diisi."))]
    pub phone: String,
    #[validate(range(min = 17, max = 65, message = "Usia harus antara 17 dan 65."))]
    pub age: u8,
    pub gender: String,
    pub education: String,
    pub experience: String,
    #[validate(length(min = 1, message = "Bidang Pengalaman wajib diisi."))]
    pub field: String,
    #[validate(length(min = 1, message = "Kota Domisili wajib diisi."))]
    pub city: String,
}

impl Registration {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            age: self.age,
            gender: self.gender.trim().to_string(),
            education: self.education.trim().to_string(),
            experience: self.experience.trim().to_string(),
            field: self.field.trim().to_string(),
            city: self.city.trim().to_string(),
        }
    }
}

/// A registered candidate. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
    pub gender: Gender,
    pub education: Education,
    pub experience: ExperienceBracket,
    /// Field of experience (free text).
    pub field: String,
    pub city: String,
    /// When the candidate started the test.
    pub test_date: DateTime<Utc>,
}

impl Candidate {
    /// Validate a registration form and stamp the test-start time.
    pub fn register(
        form: Registration,
        started_at: DateTime<Utc>,
    ) -> Result<Candidate, RegistrationError> {
        let form = form.trimmed();
        form.validate()?;

        let gender = form
            .gender
            .parse()
            .map_err(|value| RegistrationError::UnknownOption {
                field: "gender",
                value,
            })?;
        let education = form
            .education
            .parse()
            .map_err(|value| RegistrationError::UnknownOption {
                field: "education",
                value,
            })?;
        let experience = form
            .experience
            .parse()
            .map_err(|value| RegistrationError::UnknownOption {
                field: "experience",
                value,
            })?;

        Ok(Candidate {
            name: form.name,
            email: form.email,
            phone: form.phone,
            age: form.age,
            gender,
            education,
            experience,
            field: form.field,
            city: form.city,
            test_date: started_at,
        })
    }
}
