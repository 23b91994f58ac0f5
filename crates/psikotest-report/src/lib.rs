//! psikotest-report: Rendering and export of scored results.
//!
//! Two collaborators read a [`TestResults`] (and, when available, the
//! registered [`Candidate`]) without modifying either: an HTML dashboard and a
//! paginated plain-text document. The JSON export is the serialized result.

pub mod document;
pub mod html;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};

use psikotest_core::model::Candidate;
use psikotest_core::results::TestResults;

pub use document::{build_document, document_file_name, write_document, Document};
pub use html::{generate_html, write_html_report};

/// Name used in place of a candidate that was never registered.
pub const UNKNOWN_CANDIDATE: &str = "Kandidat";

/// Base file name shared by all exports: `Laporan_Psikotes_<name>`, with
/// every whitespace run in the name replaced by a single underscore and any
/// character a file name cannot hold mapped to `_`.
pub fn report_stem(candidate: Option<&Candidate>) -> String {
    let name = candidate.map_or(UNKNOWN_CANDIDATE, |c| c.name.as_str());
    let name: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("Laporan_Psikotes_{name}")
}

/// The date shown as "Tanggal Tes": the registration timestamp when known,
/// else the scoring timestamp. Formatted day/month/year.
pub fn test_date(candidate: Option<&Candidate>, results: &TestResults) -> String {
    let at: DateTime<Utc> = candidate.map_or(results.timestamp, |c| c.test_date);
    at.format("%-d/%-m/%Y").to_string()
}

/// Write the JSON export into `dir` and return its path.
pub fn write_json_report(
    candidate: Option<&Candidate>,
    results: &TestResults,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", report_stem(candidate)));
    results.save_json(&path)?;
    tracing::info!(path = %path.display(), "JSON report written");
    Ok(path)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::TimeZone;
    use psikotest_core::model::{Education, ExperienceBracket, Gender};
    use psikotest_core::scoring::{
        CognitiveScores, CompetencyScores, InterestScores, PersonalityScores,
    };

    use super::*;

    pub fn candidate() -> Candidate {
        Candidate {
            name: "Dewi  Lestari Putri".into(),
            email: "dewi@example.com".into(),
            phone: "081234567890".into(),
            age: 29,
            gender: Gender::Female,
            education: Education::S2,
            experience: ExperienceBracket::SixToTen,
            field: "Keuangan".into(),
            city: "Surabaya".into(),
            test_date: Utc.with_ymd_and_hms(2024, 8, 17, 9, 0, 0).unwrap(),
        }
    }

    pub fn results() -> TestResults {
        TestResults {
            personality: PersonalityScores {
                openness: 78,
                conscientiousness: 73,
                extraversion: 55,
                agreeableness: 68,
                neuroticism: 35,
            },
            cognitive: CognitiveScores {
                logic: 80,
                numeric: 70,
                verbal: 56,
                visual: 47,
                overall: 63,
            },
            interest: InterestScores {
                realistic: 3,
                investigative: 9,
                artistic: 4,
                social: 5,
                enterprising: 3,
                conventional: 6,
            },
            competencies: CompetencyScores {
                leadership: 64,
                analytical: 76,
                communication: 59,
                creativity: 73,
                teamwork: 63,
            },
            timestamp: Utc.with_ymd_and_hms(2024, 8, 17, 11, 45, 0).unwrap(),
        }
    }
}
