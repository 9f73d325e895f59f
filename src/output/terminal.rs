// Colored terminal output for model summaries and classifications.

use colored::Colorize;

use crate::features::{FeatureCategory, ModelSummary};
use crate::scoring::{Classification, Verdict};

/// Display a model's distinct-key counts.
pub fn display_summary(summary: &ModelSummary) {
    println!("\n{}", format!("=== Model: {} ===", summary.name).bold());
    println!("  {:<20} {:>8}", "words".dimmed(), summary.words);
    println!("  {:<20} {:>8}", "word lengths".dimmed(), summary.word_lengths);
    println!("  {:<20} {:>8}", "stems".dimmed(), summary.stems);
    println!("  {:<20} {:>8}", "sentence lengths".dimmed(), summary.sentence_lengths);
    println!("  {:<20} {:>8}", "conjunctions".dimmed(), summary.conjunctions);
}

/// Display both score vectors side by side, then the verdict.
pub fn display_classification(result: &Classification) {
    println!(
        "\n{}",
        format!("=== Classifying {} ===", result.unknown).bold()
    );
    println!();

    println!(
        "  {:<18} {:>14} {:>14}",
        "Category".dimmed(),
        truncate_name(&result.first.name).dimmed(),
        truncate_name(&result.second.name).dimmed(),
    );
    println!("  {}", "-".repeat(48).dimmed());

    for category in FeatureCategory::ALL {
        let a = result.first.scores[category];
        let b = result.second.scores[category];
        let (a_cell, b_cell) = (format!("{a:>14.4}"), format!("{b:>14.4}"));
        let (a_cell, b_cell) = if a > b {
            (a_cell.green().bold(), b_cell.normal())
        } else if b > a {
            (a_cell.normal(), b_cell.green().bold())
        } else {
            (a_cell.dimmed(), b_cell.dimmed())
        };
        println!("  {:<18} {} {}", category.label(), a_cell, b_cell);
    }

    println!();
    println!(
        "  Categories won: {} {}, {} {}",
        result.first.name, result.first.points, result.second.name, result.second.points
    );

    match result.verdict {
        Verdict::First | Verdict::Second => {
            let winner = result.winner().unwrap_or_default();
            println!(
                "\n  {} is more likely to have come from {}",
                result.unknown.bold(),
                winner.bright_green().bold()
            );
        }
        Verdict::Undetermined => {
            println!(
                "\n  {} No verdict: both sources won {} categories",
                "~".yellow(),
                result.first.points
            );
        }
    }
}

fn truncate_name(name: &str) -> String {
    super::truncate_chars(name, 11)
}
