// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use comfy_table::presets::NOTHING;
use comfy_table::{CellAlignment, Table};
use std::fmt::Write;
use std::io::Write as _;
use text_stats_engine::options::OutputFormat;
use text_stats_engine::stats::TextReport;

const CSV_HEADER: &[&str] = &[
    "name",
    "words",
    "sentences",
    "letters",
    "punctuation",
    "spaces",
    "syllables",
    "difficult_words",
    "avg_letters_per_word",
    "avg_syllables_per_word",
    "avg_words_per_sentence",
    "flesch_kincaid_reading_ease",
    "flesch_kincaid_grade_level",
    "gunning_fog",
    "coleman_liau",
    "smog",
    "automated_readability_index",
    "dale_chall",
];

/// Write all reports to stdout in the configured format.
///
/// # Errors
///
/// Fails if serialization or writing to stdout fails.
pub fn print_results(reports: &[TextReport], config: &Config) -> Result<()> {
    let rendered = render(reports, config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Render all reports into a string in the configured format.
///
/// # Errors
///
/// Fails if JSON or YAML serialization fails.
pub fn render(reports: &[TextReport], config: &Config) -> Result<String> {
    let out = match config.format {
        OutputFormat::Table => render_table(reports, config),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(reports)?),
        OutputFormat::Yaml => serde_yaml::to_string(reports)?,
        OutputFormat::Jsonl => render_jsonl(reports)?,
        OutputFormat::Csv => render_sv(reports, ","),
        OutputFormat::Tsv => render_sv(reports, "\t"),
        OutputFormat::Md => render_markdown(reports),
    };
    Ok(out)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table
}

fn right_align_values(table: &mut Table) {
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn float(value: f64) -> String {
    format!("{value:.6}")
}

fn render_table(reports: &[TextReport], config: &Config) -> String {
    let mut out = String::new();

    for report in reports {
        let r = &report.result;
        let a = &report.averages;
        let s = &report.scores;

        let mut counts = new_table();
        counts
            .add_row(vec!["Words".to_string(), r.words.to_string()])
            .add_row(vec!["Sentences".to_string(), r.sentences.to_string()])
            .add_row(vec!["Letters".to_string(), r.letters.to_string()])
            .add_row(vec!["Punctuation".to_string(), r.punctuation.to_string()])
            .add_row(vec!["Spaces".to_string(), r.spaces.to_string()])
            .add_row(vec!["Syllables".to_string(), r.syllables.to_string()])
            .add_row(vec!["Difficult Words".to_string(), r.difficult_words.to_string()])
            .add_row(vec!["Avg Letters/Word".to_string(), float(a.letters_per_word)])
            .add_row(vec!["Avg Syllables/Word".to_string(), float(a.syllables_per_word)])
            .add_row(vec!["Avg Words/Sentence".to_string(), float(a.words_per_sentence)]);
        right_align_values(&mut counts);

        let mut scores = new_table();
        scores
            .add_row(vec!["Flesch-Kincaid Reading Ease".to_string(), float(s.flesch_kincaid_reading_ease)])
            .add_row(vec!["Flesch-Kincaid Grade Level".to_string(), float(s.flesch_kincaid_grade_level)])
            .add_row(vec!["Gunning-Fog Score".to_string(), float(s.gunning_fog)])
            .add_row(vec!["Coleman-Liau Index".to_string(), float(s.coleman_liau)])
            .add_row(vec!["SMOG Index".to_string(), float(s.smog)])
            .add_row(vec!["Automated Readability Index".to_string(), float(s.automated_readability_index)])
            .add_row(vec!["Dale-Chall Readability Score".to_string(), float(s.dale_chall)]);
        right_align_values(&mut scores);

        let _ = writeln!(out, "Statistics for {:?}:", report.name);
        let _ = writeln!(out);
        let _ = writeln!(out, "{counts}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Readability Scores:");
        let _ = writeln!(out, "{scores}");

        if config.histogram {
            let _ = writeln!(out);
            let _ = writeln!(out, "Syllable Histogram:");
            let _ = writeln!(out, "{}", histogram_table(report));
        }
        let _ = writeln!(out);
    }

    out
}

fn histogram_table(report: &TextReport) -> Table {
    let all = report.result.word_histogram();
    let proper = report.result.proper_noun_histogram();

    let mut table = new_table();
    table.set_header(vec!["Syllables", "Words", "Proper Nouns"]);
    for (syllables, words) in all.iter() {
        table.add_row(vec![
            syllables.to_string(),
            words.to_string(),
            proper.get(syllables).to_string(),
        ]);
    }
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn render_jsonl(reports: &[TextReport]) -> Result<String> {
    let mut out = String::new();
    for report in reports {
        let mut value = serde_json::to_value(report)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("type".to_string(), "text".into());
        }
        out.push_str(&serde_json::to_string(&value)?);
        out.push('\n');
    }
    Ok(out)
}

fn row_values(report: &TextReport) -> Vec<String> {
    let r = &report.result;
    let a = &report.averages;
    let s = &report.scores;
    vec![
        r.words.to_string(),
        r.sentences.to_string(),
        r.letters.to_string(),
        r.punctuation.to_string(),
        r.spaces.to_string(),
        r.syllables.to_string(),
        r.difficult_words.to_string(),
        float(a.letters_per_word),
        float(a.syllables_per_word),
        float(a.words_per_sentence),
        float(s.flesch_kincaid_reading_ease),
        float(s.flesch_kincaid_grade_level),
        float(s.gunning_fog),
        float(s.coleman_liau),
        float(s.smog),
        float(s.automated_readability_index),
        float(s.dale_chall),
    ]
}

fn render_sv(reports: &[TextReport], delimiter: &str) -> String {
    let mut out = CSV_HEADER.join(delimiter);
    out.push('\n');

    for report in reports {
        let name = &report.name;
        if delimiter == "," && (name.contains(',') || name.contains('"') || name.contains('\n')) {
            let escaped = name.replace('"', "\"\"");
            let _ = write!(out, "\"{escaped}\"");
        } else {
            out.push_str(name);
        }
        for value in row_values(report) {
            out.push_str(delimiter);
            out.push_str(&value);
        }
        out.push('\n');
    }

    out
}

fn render_markdown(reports: &[TextReport]) -> String {
    let mut out = String::from("### Readability Statistics\n\n");
    let _ = writeln!(out, "| {} |", CSV_HEADER.join(" | "));
    let separator: Vec<&str> = CSV_HEADER
        .iter()
        .enumerate()
        .map(|(i, _)| if i == 0 { ":---" } else { "---:" })
        .collect();
    let _ = writeln!(out, "|{}|", separator.join("|"));

    for report in reports {
        let name = report.name.replace('|', "\\|");
        let _ = writeln!(out, "| {name} | {} |", row_values(report).join(" | "));
    }
    out
}
