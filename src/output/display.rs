//! Display functions for command results and line-mode play

use super::formatters::{bonus_tier_label, create_progress_bar, format_breakdown};
use crate::commands::{CheckReport, ScoreReport};
use crate::core::{ScoreBreakdown, ValidationOutcome};
use colored::Colorize;

const RULE_WIDTH: usize = 50;
const BAR_WIDTH: usize = 20;

/// Print the letter-by-letter scoring of a word
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "═".repeat(RULE_WIDTH).cyan());
    println!(
        " {} {} ",
        "SCORE:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(RULE_WIDTH).cyan());

    let letters: Vec<String> = report
        .letters
        .iter()
        .map(|(letter, value)| format!("{letter}={value}"))
        .collect();
    println!("\n  Letters: {}", letters.join(" "));
    println!(
        "  Base score: {}",
        report.base_score.to_string().green().bold()
    );

    println!("\n{}", "Round total by answer time:".bright_cyan());
    for (elapsed, breakdown) in &report.tiers {
        println!(
            "  {:<10} {:>3} + {:<2} = {}",
            bonus_tier_label(*elapsed),
            breakdown.base_score,
            breakdown.time_bonus,
            breakdown.round_total().to_string().bold()
        );
    }
    println!();
}

/// Print whether a word would be accepted in a round
pub fn print_check_report(report: &CheckReport) {
    println!(
        "\nChecking {} for a {}-letter round",
        report.word.to_uppercase().bright_yellow().bold(),
        report.required_length
    );

    match report.base_score {
        Some(base_score) => println!(
            "{}",
            format!("✅ Accepted, base score {base_score}").green().bold()
        ),
        None => println!("{}", format!("❌ {}", report.outcome).red().bold()),
    }
}

pub fn print_banner() {
    println!("\n{}", "═".repeat(RULE_WIDTH).cyan());
    println!(" {}", "SCRABBLE RUSH".bright_cyan().bold());
    println!("{}", "═".repeat(RULE_WIDTH).cyan());
    println!(
        "Type a word and press Enter. {} ends the game, {} starts over.",
        ":quit".bold(),
        ":reset".bold()
    );
}

pub fn print_round_start(round: u32, max_rounds: u32, required_length: usize, seconds: u32) {
    println!(
        "\n{} {}/{}: enter a word with exactly {} letters ({seconds} seconds)",
        "Round".bright_cyan().bold(),
        round,
        max_rounds,
        required_length.to_string().bright_yellow().bold()
    );
}

pub fn print_tick(remaining: u32, seconds: u32) {
    println!(
        "  {} {remaining}s left",
        create_progress_bar(remaining, seconds, BAR_WIDTH).dimmed()
    );
}

pub fn print_rejection(outcome: ValidationOutcome) {
    println!("{}", outcome.to_string().red());
}

pub fn print_timeout() {
    println!("{}", "Time's up!".red().bold());
}

pub fn print_round_scored(breakdown: ScoreBreakdown, total: u32) {
    println!(
        "{} | total {}",
        format_breakdown(breakdown).green().bold(),
        total
    );
}

pub fn print_reset() {
    println!("{}", "Score cleared, starting over.".yellow());
}

pub fn print_late() {
    println!("{}", "Too late, the round is over.".yellow());
}

pub fn print_wait() {
    println!("{}", "Wait for the next round to start.".dimmed());
}

pub fn print_final_score(total: u32) {
    println!("\n{}", "─".repeat(RULE_WIDTH).cyan());
    println!("{}", format!("🏁 Total Score: {total}").green().bold());
}
