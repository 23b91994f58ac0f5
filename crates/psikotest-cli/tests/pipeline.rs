//! End-to-end pipeline: registration → answers → scoring → persistence → reports.

use chrono::{TimeZone, Utc};

use psikotest_core::answers::{AnswerStore, RawAnswers};
use psikotest_core::interpret::Summary;
use psikotest_core::model::{Candidate, Registration};
use psikotest_core::results::TestResults;
use psikotest_core::session::{FileStore, Session, Stage};
use psikotest_report::{build_document, generate_html, write_document, write_json_report};

fn registration() -> Registration {
    Registration {
        name: "  Putu Ayu  ".into(),
        email: "putu@example.com".into(),
        phone: "081337001122".into(),
        age: 24,
        gender: "wanita".into(),
        education: "d3".into(),
        experience: "1-2".into(),
        field: "Perhotelan".into(),
        city: "Denpasar".into(),
    }
}

/// Every personality item at 5, every cognitive item correct, interest all "A".
fn ideal_answers() -> RawAnswers {
    let mut raw = RawAnswers::new();
    for i in 0..50 {
        raw.insert(format!("personality_{i}"), "5".into());
    }
    for module in psikotest_core::model::Module::COGNITIVE {
        for (i, q) in psikotest_core::bank::cognitive_questions(module).enumerate() {
            raw.insert(format!("{module}_{i}"), q.correct.into());
        }
    }
    for i in 0..30 {
        raw.insert(format!("interest_{i}"), "A".into());
    }
    raw
}

#[test]
fn full_pipeline_on_disk() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let started = Utc.with_ymd_and_hms(2024, 11, 5, 1, 30, 0).unwrap();
    let finished = Utc.with_ymd_and_hms(2024, 11, 5, 3, 0, 0).unwrap();

    let candidate = Candidate::register(registration(), started).unwrap();
    assert_eq!(candidate.name, "Putu Ayu");

    {
        let mut session = Session::load(FileStore::new(data.path())).unwrap();
        session.register(candidate.clone()).unwrap();
        let imported = AnswerStore::from_raw(&ideal_answers());
        assert_eq!(session.import(&imported).unwrap(), 165);
    }

    let mut session = Session::load(FileStore::new(data.path())).unwrap();
    assert_eq!(session.stage(), Stage::InProgress);
    assert!(session.answers().is_complete());

    let results = session.score(finished, false).unwrap().clone();
    assert_eq!(
        [
            results.personality.openness,
            results.personality.neuroticism,
            results.cognitive.logic,
            results.cognitive.overall,
        ],
        [100, 100, 100, 100]
    );
    assert_eq!(results.interest.realistic, 6);
    assert_eq!(results.interest.social, 4);
    // 40 + 40 + 0
    assert_eq!(results.competencies.leadership, 80);
    assert_eq!(results.competencies.analytical, 100);
    assert_eq!(results.competencies.communication, 100);
    // 50 + 30 + 30
    assert_eq!(results.competencies.creativity, 110);
    // 50 + 30 + 0
    assert_eq!(results.competencies.teamwork, 80);

    let summary = Summary::from_results(&results);
    assert_eq!(summary.strengths.len(), 3);
    assert_eq!(summary.development_areas.len(), 1);

    let reloaded = Session::load(FileStore::new(data.path())).unwrap();
    assert_eq!(reloaded.stage(), Stage::Completed);
    assert_eq!(reloaded.results(), Some(&results));

    let json = write_json_report(Some(&candidate), &results, out.path()).unwrap();
    assert_eq!(TestResults::load_json(&json).unwrap(), results);

    let doc_path = write_document(Some(&candidate), &results, out.path()).unwrap();
    let text = std::fs::read_to_string(doc_path).unwrap();
    assert!(text.contains("Pendidikan            : D3"));
    assert!(text.contains("Tanggal Tes           : 5/11/2024"));
    assert!(text.contains("Creativity            : 110/100 ★★★★★"));

    let html = generate_html(Some(&candidate), &results);
    assert!(html.contains("Putu Ayu"));
    assert!(html.contains("<p class=\"top-interest\">Realistic</p>"));

    let document = build_document(Some(&candidate), &results);
    assert!(document.page_count() >= 1);
}

#[test]
fn empty_session_scores_with_defaults() {
    let data = tempfile::tempdir().unwrap();
    let mut session = Session::load(FileStore::new(data.path())).unwrap();
    let candidate = Candidate::register(registration(), Utc::now()).unwrap();
    session.register(candidate).unwrap();

    let results = session.score(Utc::now(), true).unwrap();
    assert_eq!(results.personality.agreeableness, 50);
    assert_eq!(results.cognitive.overall, 0);
    assert_eq!(results.interest.total(), 0);
    assert_eq!(results.competencies.analytical, 10);
}
