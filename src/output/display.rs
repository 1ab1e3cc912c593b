//! Display functions for command results

use super::formatters::{mark_label, tile_row};
use crate::commands::{CheckReport, ScoreResult};
use crate::wordlists::loader::SkippedLine;
use colored::Colorize;

/// Print the verdict of one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{}  {}",
        tile_row(&result.guess, result.verdict),
        result.verdict.to_emoji()
    );
    println!(
        "Target: {}  Pattern: {}",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.verdict.to_string().bright_white()
    );

    for (letter, mark) in result.guess.letters().iter().zip(result.verdict.marks()) {
        println!("  {} {}", letter.as_str().to_uppercase().bold(), mark_label(*mark));
    }
}

fn print_skipped(title: &str, skipped: &[SkippedLine]) {
    if skipped.is_empty() {
        return;
    }
    println!("\n{} ({})", title.yellow().bold(), skipped.len());
    for line in skipped {
        println!("  line {:>4}: {:<12} {}", line.line, line.text, line.reason);
    }
}

/// Print the findings of a word list check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Candidates:  {} ({})",
        report.candidates.to_string().bright_yellow(),
        report.common_source
    );
    println!(
        "   Dictionary:  {} ({})",
        report.dictionary.to_string().bright_yellow(),
        report.full_source
    );

    print_skipped("Skipped candidate lines", &report.skipped_common);
    print_skipped("Skipped dictionary lines", &report.skipped_full);

    if !report.duplicates.is_empty() {
        println!("\n{} ({})", "Duplicate candidates".yellow().bold(), report.duplicates.len());
        for word in &report.duplicates {
            println!("  • {word}");
        }
    }

    if !report.missing.is_empty() {
        println!(
            "\n{} ({})",
            "Candidates missing from the dictionary".yellow().bold(),
            report.missing.len()
        );
        for word in &report.missing {
            println!("  • {word}");
        }
    }

    println!();
    if report.is_clean() {
        println!("{}", "✅ Word lists are consistent".green().bold());
    } else {
        println!("{}", "⚠ Word lists need attention".red().bold());
    }
}
