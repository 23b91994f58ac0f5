//! HTML results dashboard.
//!
//! Produces a self-contained HTML file with all CSS and SVG inlined.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use psikotest_core::interpret::{self, Summary, TraitLevel, MAX_STARS};
use psikotest_core::model::Candidate;
use psikotest_core::results::TestResults;

use crate::{report_stem, test_date, UNKNOWN_CANDIDATE};

const RADAR_SIZE: f64 = 360.0;
const RADAR_RADIUS: f64 = 130.0;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the results dashboard.
pub fn generate_html(candidate: Option<&Candidate>, results: &TestResults) -> String {
    let name = candidate.map_or(UNKNOWN_CANDIDATE, |c| c.name.as_str());
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Hasil Psikotes: {}</title>\n",
        html_escape(name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Hasil Psikotes</h1>\n");
    html.push_str(&format!("<p class=\"name\">{}</p>\n", html_escape(name)));
    html.push_str(&format!(
        "<p class=\"meta\">Tanggal Tes: {}</p>\n",
        test_date(candidate, results)
    ));
    if let Some(c) = candidate {
        html.push_str(&format!(
            "<p class=\"meta\">{} | {} | {} | {}</p>\n",
            html_escape(&c.email),
            c.education,
            c.experience,
            html_escape(&c.city),
        ));
    }
    html.push_str("</header>\n");

    // Personality
    html.push_str("<section class=\"card\">\n");
    html.push_str("<h2>Profil Kepribadian (Big Five)</h2>\n");
    html.push_str(&generate_radar_chart(results));
    html.push_str("<table class=\"traits\">\n<tbody>\n");
    for (t, score) in results.personality.entries() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}/100</td><td>{}</td></tr>\n",
            t.label(),
            score,
            TraitLevel::from_score(score)
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Cognitive
    html.push_str("<section class=\"card\">\n");
    html.push_str("<h2>Kemampuan Kognitif</h2>\n");
    let bars: Vec<(&str, u16)> = results
        .cognitive
        .entries()
        .iter()
        .map(|(m, s)| (interpret::cognitive_axis_label(*m), u16::from(*s)))
        .collect();
    html.push_str(&generate_bar_chart(&bars));
    html.push_str(&format!(
        "<p class=\"meta\">{}: <strong>{}</strong></p>\n",
        interpret::COGNITIVE_OVERALL_LABEL,
        results.cognitive.overall
    ));
    html.push_str("</section>\n");

    // Competencies
    html.push_str("<section class=\"card\">\n");
    html.push_str("<h2>Profil Kompetensi</h2>\n");
    for (competency, score) in results.competencies.entries() {
        html.push_str("<div class=\"competency\">\n");
        html.push_str(&format!(
            "<div class=\"row\"><span>{}</span><span class=\"stars\">{}</span></div>\n",
            competency.label(),
            star_markup(interpret::stars(score))
        ));
        html.push_str(&format!(
            "<div class=\"track\"><div class=\"fill\" style=\"width: {}%\"></div></div>\n",
            score.min(100)
        ));
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    // Interests
    html.push_str("<section class=\"card\">\n");
    html.push_str("<h2>Minat &amp; Bakat (RIASEC)</h2>\n");
    html.push_str("<p class=\"meta\">Kecenderungan Minat Teratas:</p>\n");
    html.push_str(&format!(
        "<p class=\"top-interest\">{}</p>\n",
        results.interest.top()
    ));
    html.push_str("<ol class=\"interests\">\n");
    for (i, (dimension, count)) in results.interest.ranked().into_iter().enumerate() {
        html.push_str(&format!(
            "<li><span class=\"dot\" style=\"background: {}\"></span>{} <small>({})</small></li>\n",
            COLORS[i % COLORS.len()],
            dimension,
            count
        ));
    }
    html.push_str("</ol>\n");
    html.push_str("</section>\n");

    // Summary
    html.push_str("<section class=\"card\">\n");
    html.push_str("<h2>Ringkasan Eksekutif</h2>\n");
    html.push_str(&format!(
        "<p>{}</p>\n",
        html_escape(&Summary::from_results(results).narrative())
    ));
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(results).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the dashboard into `dir` and return its path.
pub fn write_html_report(
    candidate: Option<&Candidate>,
    results: &TestResults,
    dir: &Path,
) -> Result<PathBuf> {
    let html = generate_html(candidate, results);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(format!("{}.html", report_stem(candidate)));
    std::fs::write(&path, html)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "HTML report written");
    Ok(path)
}

fn star_markup(filled: u8) -> String {
    (0..MAX_STARS)
        .map(|i| {
            let class = if i < filled { "on" } else { "off" };
            format!("<span class=\"{class}\">★</span>")
        })
        .collect()
}

/// Vertex of the radar polygon for axis `i` at `value` percent.
fn radar_point(i: usize, value: f64) -> (f64, f64) {
    let center = RADAR_SIZE / 2.0;
    let angle = -std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::TAU / 5.0;
    let r = RADAR_RADIUS * value / 100.0;
    (center + r * angle.cos(), center + r * angle.sin())
}

fn polygon_points(values: impl Iterator<Item = f64>) -> String {
    let mut points = String::new();
    for (i, v) in values.enumerate() {
        let (x, y) = radar_point(i, v);
        if !points.is_empty() {
            points.push(' ');
        }
        let _ = write!(points, "{x:.1},{y:.1}");
    }
    points
}

fn generate_radar_chart(results: &TestResults) -> String {
    let axes = interpret::radar_axes(&results.personality);

    let mut svg = format!(
        "<svg class=\"radar\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        size = RADAR_SIZE
    );

    for ring in [20.0, 40.0, 60.0, 80.0, 100.0] {
        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"none\" stroke=\"#d1d5db\"/>\n",
            polygon_points(std::iter::repeat(ring).take(axes.len()))
        ));
    }

    for (i, axis) in axes.iter().enumerate() {
        let (x, y) = radar_point(i, 100.0);
        let (lx, ly) = radar_point(i, 118.0);
        let center = RADAR_SIZE / 2.0;
        svg.push_str(&format!(
            "  <line x1=\"{center:.1}\" y1=\"{center:.1}\" x2=\"{x:.1}\" y2=\"{y:.1}\" stroke=\"#d1d5db\"/>\n"
        ));
        svg.push_str(&format!(
            "  <text x=\"{lx:.1}\" y=\"{ly:.1}\" font-size=\"12\" fill=\"currentColor\" text-anchor=\"middle\" dominant-baseline=\"middle\">{} ({})</text>\n",
            axis.label, axis.value
        ));
    }

    svg.push_str(&format!(
        "  <polygon class=\"profile\" points=\"{}\" fill=\"#0066CC\" fill-opacity=\"0.6\" stroke=\"#0066CC\"/>\n",
        polygon_points(axes.iter().map(|a| f64::from(a.value)))
    ));

    svg.push_str("</svg>\n");
    svg
}

fn generate_bar_chart(bars: &[(&str, u16)]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 120;

    let total_height = bars.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg class=\"bars\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (label, score)) in bars.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = usize::from((*score).min(100)) * max_width / 100;

        let color = if *score >= 70 {
            "#22c55e"
        } else if *score >= 50 {
            "#4A90E2"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(label)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            score
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const COLORS: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#AF19FF", "#FF4560",
];

const CSS: &str = r#"
:root { --bg: #f3f4f6; --card: #fff; --fg: #1f2937; --muted: #6b7280; --border: #e5e7eb; --accent: #0066CC; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --card: #1f2937; --fg: #f9fafb; --muted: #9ca3af; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
header { text-align: center; margin-bottom: 2rem; }
h1 { color: var(--accent); margin: 0; }
.name { font-size: 1.3rem; margin: 0.5rem 0 0; }
.meta { color: var(--muted); }
.card { background: var(--card); border-radius: 16px; padding: 1.5rem; margin: 1.5rem auto; max-width: 760px; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
td { border-bottom: 1px solid var(--border); padding: 0.4rem 0.8rem; }
.competency { margin: 0.8rem 0; }
.row { display: flex; justify-content: space-between; }
.stars .on { color: #facc15; }
.stars .off { color: #d1d5db; }
.track { background: var(--border); border-radius: 999px; height: 10px; }
.fill { background: #4A90E2; border-radius: 999px; height: 10px; }
.top-interest { font-size: 2rem; font-weight: bold; color: #4A90E2; text-align: center; margin: 0.5rem 0; }
.interests li { margin: 0.3rem 0; }
.dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 0.5rem; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem auto; max-width: 760px; }
summary { cursor: pointer; font-weight: bold; }
svg { display: block; margin: 1rem auto; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use psikotest_core::model::Module;

    #[test]
    fn dashboard_contains_every_section() {
        let html = generate_html(Some(&fixtures::candidate()), &fixtures::results());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("Dewi  Lestari Putri"));
        assert!(html.contains("Tanggal Tes: 17/8/2024"));
        assert!(html.contains("Profil Kepribadian (Big Five)"));
        assert!(html.contains("Stabilitas Emosi (65)"));
        assert!(html.contains("Kemampuan Kognitif"));
        assert!(html.contains("Profil Kompetensi"));
        assert!(html.contains("Ringkasan Eksekutif"));
        assert!(html.contains("Raw JSON Data"));
    }

    #[test]
    fn top_interest_is_highlighted() {
        let html = generate_html(None, &fixtures::results());
        assert!(html.contains("<p class=\"top-interest\">Investigative</p>"));
        let investigative = html.find("Investigative <small>").unwrap();
        let conventional = html.find("Conventional <small>").unwrap();
        assert!(investigative < conventional);
    }

    #[test]
    fn stars_follow_competency_scores() {
        // analytical 76 rounds to 4 stars
        assert_eq!(star_markup(4).matches("class=\"on\"").count(), 4);
        assert_eq!(star_markup(4).matches("class=\"off\"").count(), 1);

        let html = generate_html(None, &fixtures::results());
        assert_eq!(html.matches("<div class=\"competency\">").count(), 5);
    }

    #[test]
    fn candidate_text_is_escaped() {
        let mut candidate = fixtures::candidate();
        candidate.name = "<script>alert('x')</script>".into();
        candidate.city = "Kota & Co".into();

        let html = generate_html(Some(&candidate), &fixtures::results());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
        assert!(html.contains("Kota &amp; Co"));
    }

    #[test]
    fn radar_starts_at_top() {
        let (x, y) = radar_point(0, 100.0);
        assert!((x - RADAR_SIZE / 2.0).abs() < 1e-9);
        assert!((y - (RADAR_SIZE / 2.0 - RADAR_RADIUS)).abs() < 1e-9);
    }

    #[test]
    fn write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_html_report(
            Some(&fixtures::candidate()),
            &fixtures::results(),
            &dir.path().join("out"),
        )
        .unwrap();

        assert!(path.ends_with("Laporan_Psikotes_Dewi_Lestari_Putri.html"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }

    #[test]
    fn cognitive_bars_are_labelled() {
        let html = generate_html(None, &fixtures::results());
        for module in Module::COGNITIVE {
            assert!(html.contains(interpret::cognitive_axis_label(module)));
        }
    }
}
