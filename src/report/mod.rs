//! Report rendering
//!
//! Turns run records into the plain-text page shown after an action. The
//! renderer accepts whatever outcome it is handed and cannot fail; the
//! performance block only appears when both calls of a comparison
//! succeeded.

use crate::metrics::{CallResult, Comparison, RunOutcome, RunRecord};
use std::fmt::Write;

const RULE_WIDTH: usize = 70;

/// Render the report for one run
pub fn render(outcome: &RunOutcome) -> String {
    let mut out = String::new();

    match outcome.records.as_slice() {
        [record] => {
            section_header(
                &mut out,
                &format!("Test Results - {}", short_label(&record.model)),
            );
            write_record(&mut out, record, true);
        }
        records => {
            section_header(&mut out, "📊 Comparison Results");
            for record in records {
                write_record(&mut out, record, false);
            }
            if let Some(comparison) = outcome.comparison() {
                write_performance(&mut out, records, &comparison);
            }
        }
    }

    out
}

/// Uppercased tail of a model identifier, used for section labels
fn short_label(model: &str) -> String {
    model.rsplit('/').next().unwrap_or(model).to_uppercase()
}

fn section_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "   {title}");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out);
}

fn write_record(out: &mut String, record: &RunRecord, include_stats: bool) {
    let _ = writeln!(out, "▶ {} ({})", short_label(&record.model), record.model);

    match &record.result {
        CallResult::Success {
            text,
            elapsed_secs,
            stats,
            raw_response,
        } => {
            let _ = writeln!(out, "  ✓ Generated in {elapsed_secs:.2} seconds");
            if record.result.is_empty_generation() {
                let _ = writeln!(out, "  ⚠ Model returned empty response");
                let _ = writeln!(out, "  Raw response: {raw_response}");
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "  Result:");
            for line in text.lines() {
                let _ = writeln!(out, "  {line}");
            }
            if include_stats {
                let _ = writeln!(out);
                let _ = writeln!(out, "  Words:          {}", stats.word_count);
                let _ = writeln!(out, "  Characters:     {}", stats.char_count);
                let _ = writeln!(out, "  Words/second:   {:.1}", stats.words_per_second);
            }
        }
        CallResult::Failure {
            error,
            status_code,
            raw_body,
            ..
        } => {
            let _ = writeln!(out, "  ✗ {error}");
            if let Some(code) = status_code {
                let _ = writeln!(out, "  Status code: {code}");
            }
            if let Some(body) = raw_body {
                let _ = writeln!(out, "  Raw response: {body}");
            }
        }
    }

    let _ = writeln!(out);
}

fn write_performance(out: &mut String, records: &[RunRecord], comparison: &Comparison) {
    section_header(out, "⚡ Performance Comparison");

    let _ = writeln!(
        out,
        "  First model time:   {:.2} s",
        comparison.first_elapsed_secs
    );
    let _ = writeln!(
        out,
        "  Second model time:  {:.2} s",
        comparison.second_elapsed_secs
    );
    let _ = writeln!(
        out,
        "  Faster model:       {} (↑ {:.1}% faster)",
        short_label(&comparison.faster_model),
        comparison.speed_improvement_pct
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "📈 Text Statistics:");
    for record in records {
        if let Some(stats) = record.result.stats() {
            let _ = writeln!(
                out,
                "  {}: {} words, {} characters, {:.1} words/second",
                short_label(&record.model),
                stats.word_count,
                stats.char_count,
                stats.words_per_second
            );
        }
    }
    let _ = writeln!(out);
}
