//! Display functions for command results

use super::formatters::{candidate_summary, create_progress_bar, grid_lines};
use crate::commands::{CheckResult, GenerateResult};
use colored::Colorize;

/// Print the candidates produced by `generate`
pub fn print_generate_result(result: &GenerateResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", "GRID".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for line in grid_lines(result.grid.rows()) {
        println!("  {line}");
    }

    println!(
        "\n   Alphabet:      {}",
        if result.prefiltered.is_empty() {
            "(empty)".red().to_string()
        } else {
            result.prefiltered.bright_white().to_string()
        }
    );
    println!("   Search space:  {}", result.search_space);

    let count = result.candidates.len();
    let headline = format!("{count} candidate{}", if count == 1 { "" } else { "s" });
    if count == 0 {
        println!("\n{}", format!("❌ {headline}").red().bold());
        println!("   Feedback may be inconsistent; check the rows above.");
        return;
    }

    println!("\n{}", format!("✅ {headline}").green().bold());
    println!("{}", candidate_summary(&result.candidates, limit).bright_yellow());
}

/// Print the result of a self-check run
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SELF-CHECK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:           {}", result.trials);
    println!("   Evaluated:        {}", result.evaluated);
    if result.skipped > 0 {
        println!(
            "   Skipped:          {}",
            format!("{} (search space over limit)", result.skipped).yellow()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let rate = result.found_rate();
    let bar = create_progress_bar(rate, 100.0, 40);
    let rate_text = format!("{rate:.1}%");
    println!("\n🎯 {}", "Secret kept:".bright_cyan().bold());
    println!(
        "   [{}] {} ({}/{})",
        bar.green(),
        if result.secret_found == result.evaluated {
            rate_text.green().bold()
        } else {
            rate_text.yellow().bold()
        },
        result.secret_found,
        result.evaluated
    );

    println!("\n📈 {}", "Candidates per game:".bright_cyan().bold());
    println!("   Min:              {}", result.min_candidates);
    println!(
        "   Average:          {}",
        format!("{:.1}", result.average_candidates).bright_yellow()
    );
    println!("   Max:              {}", result.max_candidates);

    if !result.misses.is_empty() {
        println!("\n⚠️  {}", "Secrets dropped:".yellow().bold());
        for miss in &result.misses {
            println!(
                "   {} after {}",
                miss.secret.bright_white().bold(),
                miss.guesses.join(", ")
            );
        }
    }
}
