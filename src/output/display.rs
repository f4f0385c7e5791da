//! Display functions for command results

use super::formatters::{create_progress_bar, verdicts_to_emoji};
use crate::core::{Verdict, WORD_LEN};
use crate::engine::MAX_ATTEMPTS;
use crate::score::ScoreSummary;
use colored::Colorize;

/// Print one guess with colored letters and the emoji row
pub fn print_verdict_row(guess: &[char; WORD_LEN], verdicts: &[Verdict; WORD_LEN]) {
    let letters: Vec<String> = guess
        .iter()
        .zip(verdicts.iter())
        .map(|(&letter, verdict)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match verdict {
                Verdict::Correct => letter.green().bold().to_string(),
                Verdict::Present => letter.yellow().bold().to_string(),
                Verdict::Absent => letter.bright_black().to_string(),
            }
        })
        .collect();

    println!("{}  {}", letters.join(" "), verdicts_to_emoji(verdicts));
}

/// Print the score card
pub fn print_score_summary(summary: &ScoreSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCORE CARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Totals:".bright_cyan().bold());
    println!("   Played:          {}", summary.played);
    println!(
        "   Win %:           {}",
        format!("{}", summary.win_pct).bright_yellow().bold()
    );
    println!("   Current streak:  {}", summary.current_streak);
    println!("   Max streak:      {}", summary.max_streak);

    if summary.played == 0 {
        println!("\n   No finished rounds yet.");
        return;
    }

    let tallest = summary.tallest_bucket().unwrap_or(1);
    let max_count = summary.distribution[tallest - 1];

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_ATTEMPTS {
        let count = summary.distribution[guess_count - 1];
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let bar = if guess_count == tallest {
            bar.green().to_string()
        } else {
            bar.bright_black().to_string()
        };
        println!("   {guess_count}: {bar} {count:4}");
    }
}
