//! The `TestResults` aggregate with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{CognitiveScores, CompetencyScores, InterestScores, PersonalityScores};

/// Everything one scoring run produces.
///
/// Created once per session; the score records are never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResults {
    pub personality: PersonalityScores,
    pub cognitive: CognitiveScores,
    pub interest: InterestScores,
    pub competencies: CompetencyScores,
    /// When scoring completed.
    pub timestamp: DateTime<Utc>,
}

impl TestResults {
    /// Save results to a JSON file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize results")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        Ok(())
    }

    /// Load results from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read results from {}", path.display()))?;
        let results: TestResults =
            serde_json::from_str(&content).context("failed to parse results JSON")?;
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerStore;
    use crate::scoring;
    use chrono::TimeZone;

    fn sample() -> TestResults {
        let at = Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap();
        scoring::evaluate(&AnswerStore::new(), at)
    }

    #[test]
    fn save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.json");

        let results = sample();
        results.save_json(&path).unwrap();
        let loaded = TestResults::load_json(&path).unwrap();

        assert_eq!(loaded, results);
    }

    #[test]
    fn json_layout_is_grouped_by_module() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["personality"]["openness"], 50);
        assert_eq!(value["cognitive"]["overall"], 0);
        assert_eq!(value["interest"]["artistic"], 0);
        assert_eq!(value["competencies"]["analytical"], 10);
        assert_eq!(value["timestamp"], "2024-03-14T09:26:53Z");
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = TestResults::load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read results"));
    }
}
