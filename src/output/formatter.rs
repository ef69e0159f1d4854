//! Output formatters for ATS reports

use crate::config::OutputFormat;
use crate::error::{AtsCheckerError, Result};
use crate::output::report::{score_label, AtsReport};
use crate::processing::checks::Check;
use crate::processing::scoring::Category;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting ATS reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
    include_metadata: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with inline styling
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Compatibility Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .category h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .check {
            background: #f8f9fa;
            padding: 12px 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #28a745;
        }
        .check.fail { border-left-color: #dc3545; }
        .premium {
            font-size: 0.8em;
            color: #6c757d;
            margin-left: 6px;
        }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ATS Compatibility Report</h1>
            <p>Generated: {{ generated_at }}{% if has_target %} | Target: {{ target }}{% endif %}</p>
        </div>

        <div class="summary">
            <h2>Overall Score: {{ score }}/100 <span class="score-badge {{ score_class }}">{{ score_label }}</span></h2>
            <p>{{ summary }}</p>
        </div>

        {% for category in categories %}
        <div class="category">
            <h2>{{ category.label }}: {{ category.score }}% <small>(weight {{ category.weight }}%)</small></h2>
            {% for check in category.checks %}
            {% if check.pass %}
            <div class="check pass">
            {% else %}
            <div class="check fail">
            {% endif %}
                <strong>{% if check.pass %}&#10003;{% else %}&#10007;{% endif %} {{ check.name }}</strong>
                {% if check.premium %}<span class="premium">premium</span>{% endif %}
                <div>{{ check.details }}</div>
            </div>
            {% endfor %}
        </div>
        {% endfor %}

        {% if has_missing_keywords %}
        <div class="category">
            <h2>Missing Keywords</h2>
            <p>{{ missing_keywords }}</p>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by ATS Checker v{{ version }}</strong></p>
            <p><strong>Resume:</strong> {{ resume_file }} | <strong>Words:</strong> {{ word_count }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    has_target: bool,
    target: String,
    score: u8,
    score_class: String,
    score_label: String,
    summary: String,
    categories: Vec<HtmlCategory>,
    has_missing_keywords: bool,
    missing_keywords: String,
    version: String,
    resume_file: String,
    word_count: usize,
}

struct HtmlCategory {
    label: String,
    score: u8,
    weight: String,
    checks: Vec<Check>,
}

/// Category weight as a whole percentage.
fn category_weight(report: &AtsReport, label: &str) -> f64 {
    let weights = &report.analysis.weights;
    let weight = match label {
        "Content" => weights.content,
        "Sections" => weights.sections,
        "ATS Essentials" => weights.ats_essentials,
        _ => weights.keyword_match,
    };
    weight * 100.0
}

/// Checks to list for a category: all of them, or only the failing ones.
fn visible_checks(category: &Category, detailed: bool) -> Vec<&Check> {
    category
        .checks
        .iter()
        .filter(|check| detailed || !check.pass)
        .collect()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let color = match score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };
        let badge = score_label(score).to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_check(&self, check: &Check) -> String {
        let mark = if check.pass {
            self.colorize("✓", Color::Green)
        } else {
            self.colorize("✗", Color::Red)
        };
        let premium = if check.premium {
            format!(" {}", self.colorize("(premium)", Color::BrightBlack))
        } else {
            String::new()
        };

        format!("  {} {}{}\n    {}\n", mark, check.name, premium, check.details)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("ATS COMPATIBILITY REPORT", 1));
        output.push_str(&format!("Resume: {}\n", report.metadata.resume_file));
        if let Some(target) = report.target_display() {
            output.push_str(&format!("Target: {}\n", target));
        }

        output.push_str(&self.format_header("Overall", 2));
        output.push_str(&format!(
            "Score: {}/100 {}\n",
            analysis.score,
            self.format_score_badge(analysis.score)
        ));
        output.push_str(&format!("{}\n", self.colorize(&report.summary, Color::Cyan)));

        for (label, category) in analysis.categories() {
            output.push_str(&self.format_header(
                &format!(
                    "{}: {}% (weight {:.0}%)",
                    label,
                    category.score,
                    category_weight(report, label)
                ),
                3,
            ));
            let checks = visible_checks(category, self.detailed);
            if checks.is_empty() {
                output.push_str(&format!(
                    "  {}\n",
                    self.colorize("All checks passed.", Color::Green)
                ));
            }
            for check in checks {
                output.push_str(&self.format_check(check));
            }
        }

        if let Some(keywords) = &analysis.keyword_report {
            if !keywords.missing.is_empty() {
                output.push_str(&self.format_header("Missing Keywords", 3));
                output.push_str(&format!(
                    "  {}\n",
                    self.colorize(&keywords.missing.join(", "), Color::Yellow)
                ));
            }
        }

        if self.detailed {
            let stats = &analysis.stats;
            output.push_str(&self.format_header("Statistics", 2));
            output.push_str(&format!("  Words: {}\n", stats.word_count));
            output.push_str(&format!("  Characters: {}\n", stats.character_count));
            output.push_str(&format!("  Action verbs: {}\n", stats.action_verb_count));
            output.push_str(&format!("  Weak phrases: {}\n", stats.weak_phrase_count));
            output.push_str(&format!("  All-caps words: {}\n", stats.all_caps_count));
            output.push_str(&format!(
                "  Longest paragraph: {} words\n",
                stats.longest_paragraph_words
            ));
            output.push_str(&format!(
                "  Sections found: {}\n",
                analysis.section_report.found.join(", ")
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool, include_metadata: bool) -> Self {
        Self {
            pretty,
            include_metadata,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    /// Without metadata only the analysis is written, which is identical
    /// across runs for the same input.
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let json = match (self.include_metadata, self.pretty) {
            (true, true) => serde_json::to_string_pretty(report)?,
            (true, false) => serde_json::to_string(report)?,
            (false, true) => serde_json::to_string_pretty(&report.analysis)?,
            (false, false) => serde_json::to_string(&report.analysis)?,
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AtsReport) -> HtmlTemplate {
        let analysis = &report.analysis;
        let score_class = match analysis.score {
            90..=100 => "score-excellent",
            70..=89 => "score-good",
            60..=69 => "score-fair",
            _ => "score-poor",
        };

        let categories = analysis
            .categories()
            .into_iter()
            .map(|(label, category)| HtmlCategory {
                label: label.to_string(),
                score: category.score,
                weight: format!("{:.0}", category_weight(report, label)),
                checks: category.checks.clone(),
            })
            .collect();

        let missing_keywords = analysis
            .keyword_report
            .as_ref()
            .map(|k| k.missing.join(", "))
            .unwrap_or_default();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report.generated_at_display(),
            has_target: report.target_display().is_some(),
            target: report.target_display().unwrap_or_default(),
            score: analysis.score,
            score_class: score_class.to_string(),
            score_label: score_label(analysis.score).to_string(),
            summary: report.summary.clone(),
            categories,
            has_missing_keywords: !missing_keywords.is_empty(),
            missing_keywords,
            version: report.metadata.version.clone(),
            resume_file: report.metadata.resume_file.clone(),
            word_count: analysis.stats.word_count,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| AtsCheckerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢",
            70..=89 => "🟡",
            60..=69 => "🟠",
            _ => "🔴",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# ATS Compatibility Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}`\n",
                report.generated_at_display(),
                report.metadata.resume_file
            ));
            if let Some(target) = report.target_display() {
                output.push_str(&format!("**Target:** {}\n", target));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "**Overall Score:** {}/100 {} {}\n\n",
            analysis.score,
            Self::markdown_score_badge(analysis.score),
            score_label(analysis.score)
        ));
        output.push_str(&format!("{}\n\n", report.summary));

        output.push_str("| Category | Score | Weight |\n|---|---|---|\n");
        for (label, category) in analysis.categories() {
            output.push_str(&format!(
                "| {} | {}% | {:.0}% |\n",
                label,
                category.score,
                category_weight(report, label)
            ));
        }
        output.push('\n');

        for (label, category) in analysis.categories() {
            output.push_str(&format!("## {}\n\n", label));
            for check in &category.checks {
                let premium = if check.premium { " _(premium)_" } else { "" };
                output.push_str(&format!(
                    "- [{}] **{}**{}: {}\n",
                    if check.pass { "x" } else { " " },
                    check.name,
                    premium,
                    check.details
                ));
            }
            output.push('\n');
        }

        if let Some(keywords) = &analysis.keyword_report {
            if !keywords.missing.is_empty() {
                output.push_str("## Missing Keywords\n\n");
                for keyword in &keywords.missing {
                    output.push_str(&format!("- `{}`\n", keyword));
                }
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true, true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json, include_metadata),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AtsReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_ats{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::analyze;

    const RESUME: &str = "Jane Doe\njane@example.com | 555-123-4567\n\nExperience\nResponsible for <b>reports</b> & dashboards\n\nSkills\nSQL, Excel";

    fn report() -> AtsReport {
        let analysis = analyze(RESUME, Some("sql tableau excel"), None, None);
        AtsReport::new(analysis, "cv.txt", Some("job.txt".to_string()), None)
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, false).format_report(&report()).unwrap();
        assert!(output.contains("ATS COMPATIBILITY REPORT"));
        assert!(output.contains("Keyword Match:"));
        assert!(output.contains("✗ Essential Sections"));
        assert!(!output.contains("✓"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_detailed_console_lists_passing_checks() {
        let output = ConsoleFormatter::new(false, true).format_report(&report()).unwrap();
        assert!(output.contains("✓ Email Address"));
        assert!(output.contains("Statistics"));
    }

    #[test]
    fn test_json_without_metadata_is_reproducible() {
        let formatter = JsonFormatter::new(false, false);
        let first = formatter.format_report(&report()).unwrap();
        let second = formatter.format_report(&report()).unwrap();
        assert_eq!(first, second);
        assert!(!first.contains("generated_at"));

        let value: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert!(value["score"].is_u64());
        assert_eq!(value["content"]["checks"][0]["name"], "ATS Parse Rate");
    }

    #[test]
    fn test_json_with_metadata_wraps_analysis() {
        let output = JsonFormatter::new(true, true).format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["metadata"]["resume_file"], "cv.txt");
        assert!(value["analysis"]["keyword_match"].is_object());
    }

    #[test]
    fn test_markdown_lists_every_check() {
        let report = report();
        let output = MarkdownFormatter::new(false).format_report(&report).unwrap();
        assert!(output.starts_with("# ATS Compatibility Report"));
        assert!(output.contains("| Keyword Match |"));
        assert_eq!(
            output.matches("- [").count(),
            report.analysis.all_checks().count()
        );
        assert!(output.contains("- `tableau`"));
    }

    #[test]
    fn test_html_without_styles() {
        let output = HtmlFormatter::new(false).format_report(&report()).unwrap();
        assert!(output.contains("<title>ATS Compatibility Report</title>"));
        assert!(output.contains("Missing Keywords"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "/tmp/jane.pdf", false), "jane_ats.json");
        assert_eq!(suggest_filename(&OutputFormat::Html, "cv.docx", false), "cv_ats.html");
    }
}
