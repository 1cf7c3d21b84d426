//! Display functions for command results

use super::formatters::{create_progress_bar, format_score};
use crate::commands::{BuildSummary, SimulationResult};
use crate::solver::QueryResult;
use colored::Colorize;

/// Print the result of a helper query, `limit` rows per list
pub fn print_query_result(pattern: &str, result: &QueryResult, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HELPER:".bright_cyan().bold(),
        pattern.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "❌ No words match this pattern.".red());
        return;
    }

    println!(
        "\n📖 {} ({} candidates)",
        "Possible words:".bright_cyan().bold(),
        result.words.len()
    );
    for ranked in result.words.iter().take(limit) {
        println!(
            "   {:<16} {:>12}",
            ranked.word.to_uppercase().bright_white(),
            format_score(ranked.frequency)
        );
    }
    if result.words.len() > limit {
        println!("   {}", format!("… {} more", result.words.len() - limit).bright_black());
    }

    let top = result.letters.first().map_or(0.0, |s| s.score);
    println!("\n🔤 {}", "Suggested letters:".bright_cyan().bold());
    for scored in result.letters.iter().take(limit) {
        println!(
            "   {}  [{}] {:>12}",
            scored.letter.to_uppercase().to_string().bright_yellow().bold(),
            create_progress_bar(scored.score, top, 20).green(),
            format_score(scored.score)
        );
    }
    if result.letters.is_empty() {
        println!("   {}", "Every letter of the candidates is already known.".bright_black());
    }
}

/// Print the result of a self-play simulation
pub fn print_simulation_result(result: &SimulationResult, max_wrong: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!("   Wins / losses:    {} / {}", result.wins.to_string().green(), result.losses.to_string().red());
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Average misses:   {:.2}", result.average_wrong);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Misses per game:".bright_cyan().bold());
    for misses in 0..=max_wrong {
        let count = result.wrong_distribution.get(&misses).copied().unwrap_or(0);
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let bar = if misses >= max_wrong { bar.red() } else { bar.green() };
        println!("   {misses}: {bar} {count:5} ({pct:5.1}%)");
    }

    if !result.lost_words.is_empty() {
        let shown: Vec<String> = result
            .lost_words
            .iter()
            .take(10)
            .map(|w| w.to_uppercase())
            .collect();
        println!("\n💀 {} {}", "Lost on:".bright_red().bold(), shown.join(", "));
    }
}

/// Print the summary of a lexicon build
pub fn print_build_summary(summary: &BuildSummary) {
    println!(
        "\n{} {}",
        "✅ Wrote".green().bold(),
        summary.output.display().to_string().bright_white()
    );
    println!("   Words:            {}", summary.total_words);
    println!("   With frequency:   {}", summary.scored_words);
    if summary.unscored_words() > 0 {
        println!(
            "   Missing from table: {}",
            summary.unscored_words().to_string().yellow()
        );
    }
}
