//! Paginated plain-text report.
//!
//! Lays out the candidate data and every score group onto fixed-height pages
//! the way a printed report would be: sections never start near the bottom of
//! a page, and each page ends with a `Halaman n/m` footer.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use psikotest_core::interpret::{self, Summary, TraitLevel, MAX_STARS};
use psikotest_core::model::Candidate;
use psikotest_core::results::TestResults;

use crate::{report_stem, test_date, UNKNOWN_CANDIDATE};

/// Lines per page, footer included.
pub const PAGE_LINES: usize = 60;
/// Text width in columns.
pub const WRAP_WIDTH: usize = 70;

/// A section title may not start past this line.
const SECTION_LIMIT: usize = 50;
/// A field or paragraph line may not start past this line.
const FIELD_LIMIT: usize = 54;
const LABEL_WIDTH: usize = 22;

const TITLE: &str = "LAPORAN PSIKOTES REKRUTMEN";
const SUBTITLE: &str = "PsikoTest Pro - Sistem Psikotes Digital";

/// A laid-out report: one vector of lines per page, footers included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pages: Vec<Vec<String>>,
}

impl Document {
    pub fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages joined by form feeds.
    pub fn render(&self) -> String {
        self.pages
            .iter()
            .map(|page| {
                let mut text = page.join("\n");
                text.push('\n');
                text
            })
            .collect::<Vec<_>>()
            .join("\u{c}")
    }
}

struct PageWriter {
    pages: Vec<Vec<String>>,
    current: Vec<String>,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
        }
    }

    fn break_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
    }

    fn line(&mut self, text: String) {
        self.current.push(text);
    }

    fn header(&mut self) {
        self.line(center(TITLE));
        self.line(center(SUBTITLE));
        self.line("=".repeat(WRAP_WIDTH));
        self.line(String::new());
    }

    fn section_title(&mut self, title: &str) {
        if self.current.len() >= SECTION_LIMIT {
            self.break_page();
        }
        self.line(title.to_string());
        self.line("-".repeat(title.chars().count()));
    }

    fn field(&mut self, label: &str, value: &str) {
        let indent = LABEL_WIDTH + 2;
        for (i, chunk) in wrap(value, WRAP_WIDTH - indent).into_iter().enumerate() {
            self.ensure_room();
            if i == 0 {
                self.line(format!("{label:<width$}: {chunk}", width = LABEL_WIDTH));
            } else {
                self.line(format!("{:indent$}{chunk}", ""));
            }
        }
    }

    fn paragraph(&mut self, text: &str) {
        for chunk in wrap(text, WRAP_WIDTH) {
            self.ensure_room();
            self.line(chunk);
        }
    }

    fn gap(&mut self) {
        if self.current.len() < FIELD_LIMIT {
            self.line(String::new());
        }
    }

    fn ensure_room(&mut self) {
        if self.current.len() >= FIELD_LIMIT {
            self.break_page();
        }
    }

    fn finish(mut self) -> Document {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.break_page();
        }
        let total = self.pages.len();
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.resize(PAGE_LINES - 1, String::new());
            page.push(center(&format!("Halaman {}/{}", i + 1, total)));
        }
        Document { pages: self.pages }
    }
}

fn center(text: &str) -> String {
    format!("{text:^width$}", width = WRAP_WIDTH).trim_end().to_string()
}

/// Greedy word wrap. Words longer than `width` are split across lines.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace().flat_map(|w| split_long(w, width)) {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_long(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

fn star_text(filled: u8) -> String {
    (0..MAX_STARS)
        .map(|i| if i < filled { '★' } else { '☆' })
        .collect()
}

/// Lay out the report for `results`.
pub fn build_document(candidate: Option<&Candidate>, results: &TestResults) -> Document {
    let mut w = PageWriter::new();
    w.header();

    w.section_title("DATA KANDIDAT");
    match candidate {
        Some(c) => {
            w.field("Nama", &c.name);
            w.field("Email", &c.email);
            w.field("Nomor HP", &c.phone);
            w.field("Usia", &format!("{} tahun", c.age));
            w.field("Jenis Kelamin", &c.gender.to_string());
            w.field("Pendidikan", &c.education.to_string().to_uppercase());
            w.field("Pengalaman", &c.experience.to_string());
            w.field("Bidang Pengalaman", &c.field);
            w.field("Kota Domisili", &c.city);
        }
        None => w.field("Nama", UNKNOWN_CANDIDATE),
    }
    w.field("Tanggal Tes", &test_date(candidate, results));
    w.gap();

    w.section_title("RINGKASAN EKSEKUTIF");
    w.paragraph(&Summary::from_results(results).narrative());
    w.gap();

    w.section_title("HASIL TES KEPRIBADIAN (BIG FIVE)");
    for (t, score) in results.personality.entries() {
        w.field(
            t.label(),
            &format!("{score}/100 - {}", TraitLevel::from_score(score)),
        );
    }
    w.gap();

    w.section_title("KEMAMPUAN KOGNITIF");
    for (module, score) in results.cognitive.entries() {
        w.field(interpret::cognitive_field_label(module), &format!("{score}/100"));
    }
    w.field(
        interpret::COGNITIVE_OVERALL_LABEL,
        &format!("{}/100", results.cognitive.overall),
    );
    w.gap();

    w.section_title("MINAT & BAKAT (RIASEC)");
    w.field("Minat Teratas", results.interest.top().label());
    for (rank, (dimension, count)) in results.interest.ranked().into_iter().enumerate() {
        w.field(&format!("{}. {}", rank + 1, dimension), &count.to_string());
    }
    w.gap();

    w.section_title("PROFIL KOMPETENSI");
    for (competency, score) in results.competencies.entries() {
        w.field(
            competency.label(),
            &format!("{score}/100 {}", star_text(interpret::stars(score))),
        );
    }

    w.finish()
}

/// `Laporan_Psikotes_<name>.txt`
pub fn document_file_name(candidate: Option<&Candidate>) -> String {
    format!("{}.txt", report_stem(candidate))
}

/// Write the document into `dir` and return its path.
pub fn write_document(
    candidate: Option<&Candidate>,
    results: &TestResults,
    dir: &Path,
) -> Result<PathBuf> {
    let document = build_document(candidate, results);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(document_file_name(candidate));
    std::fs::write(&path, document.render())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), pages = document.page_count(), "document written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn document() -> Document {
        build_document(Some(&fixtures::candidate()), &fixtures::results())
    }

    fn content_len(page: &[String]) -> usize {
        page[..PAGE_LINES - 1]
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1)
    }

    #[test]
    fn every_page_is_full_height_with_footer() {
        let doc = document();
        assert_eq!(doc.page_count(), 2);
        for (i, page) in doc.pages().iter().enumerate() {
            assert_eq!(page.len(), PAGE_LINES);
            assert_eq!(
                page.last().unwrap().trim(),
                format!("Halaman {}/{}", i + 1, doc.page_count())
            );
        }
    }

    #[test]
    fn no_content_below_field_limit() {
        for page in document().pages() {
            assert!(content_len(page) <= FIELD_LIMIT);
        }
    }

    #[test]
    fn section_titles_start_within_limit() {
        let titles = [
            "DATA KANDIDAT",
            "RINGKASAN EKSEKUTIF",
            "HASIL TES KEPRIBADIAN (BIG FIVE)",
            "KEMAMPUAN KOGNITIF",
            "MINAT & BAKAT (RIASEC)",
            "PROFIL KOMPETENSI",
        ];
        let doc = document();
        for title in titles {
            let (page, line) = doc
                .pages()
                .iter()
                .enumerate()
                .find_map(|(p, lines)| lines.iter().position(|l| l == title).map(|i| (p, i)))
                .unwrap_or_else(|| panic!("missing section {title}"));
            assert!(line < SECTION_LIMIT, "{title} at page {page} line {line}");
        }
    }

    #[test]
    fn lines_fit_the_width() {
        let mut candidate = fixtures::candidate();
        candidate.field = "Manajemen rantai pasok dan logistik untuk industri manufaktur \
                           berskala nasional dengan fokus pada distribusi"
            .into();
        let doc = build_document(Some(&candidate), &fixtures::results());
        for page in doc.pages() {
            for line in page {
                assert!(line.chars().count() <= WRAP_WIDTH, "{line:?}");
            }
        }
    }

    #[test]
    fn content_reflects_results() {
        let text = document().render();
        assert!(text.starts_with(&center(TITLE)));
        assert!(text.contains("Pendidikan            : S2"));
        assert!(text.contains("Tanggal Tes           : 17/8/2024"));
        assert!(text.contains("Keterbukaan           : 78/100 - Tinggi"));
        assert!(text.contains("Neurotisisme          : 35/100 - Rendah"));
        assert!(text.contains("Rata-rata Kognitif    : 63/100"));
        assert!(text.contains("Minat Teratas         : Investigative"));
        assert!(text.contains("1. Investigative      : 9"));
        assert!(text.contains("Analytical            : 76/100 ★★★★☆"));
        assert!(text.contains("kemampuan analisis yang kuat"));
        assert_eq!(text.matches('\u{c}').count(), 1);
    }

    #[test]
    fn wrap_is_greedy() {
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("panjangsekali x", 4), vec!["panj", "angs", "ekal", "i x"]);
    }

    #[test]
    fn long_tokens_stay_within_width() {
        let mut candidate = fixtures::candidate();
        candidate.email = "dewi.lestari.putri.departemen.keuangan.pusat@perusahaan-contoh.co.id".into();
        candidate.city = "x".repeat(WRAP_WIDTH * 2);
        let doc = build_document(Some(&candidate), &fixtures::results());
        for page in doc.pages() {
            for line in page {
                assert!(line.chars().count() <= WRAP_WIDTH, "{line:?}");
            }
        }
        let text = doc.render();
        assert!(text.contains("Email                 : dewi.lestari.putri.departemen.keuangan"));
    }

    #[test]
    fn long_reports_gain_pages() {
        let mut w = PageWriter::new();
        for i in 0..120 {
            w.field("Baris", &i.to_string());
        }
        let doc = w.finish();
        assert_eq!(doc.page_count(), 3);
        assert!(doc.pages()[2].last().unwrap().contains("Halaman 3/3"));
    }

    #[test]
    fn file_name_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let candidate = fixtures::candidate();
        let path = write_document(Some(&candidate), &fixtures::results(), dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Laporan_Psikotes_Dewi_Lestari_Putri.txt"
        );
        assert!(std::fs::read_to_string(path).unwrap().contains("Halaman 2/2"));
    }
}
