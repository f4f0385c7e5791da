//! Wordle Play - CLI
//!
//! Playable terminal Wordle with score tracking. The default command opens
//! the interactive TUI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordle_play::{
    core::{ScoringPolicy, Word, score_guess},
    interactive::{App, run_tui},
    output::{print_score_summary, print_verdict_row},
    score::{DEFAULT_SCORES_PATH, HistoryStore, JsonFileStore, ScoreSummary},
    wordlists::{
        ANSWERS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_play",
    about = "Terminal word-guessing game: six tries, tile feedback, score history",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Duplicate-letter scoring: containment (default, classic tile colors) or canonical
    #[arg(short, long, global = true, default_value = "containment")]
    scoring: String,

    /// Path to the score history file
    #[arg(long, global = true, default_value = DEFAULT_SCORES_PATH)]
    scores_file: PathBuf,

    /// Answer pool: 'embedded' (default) or path to a file of five-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Print the score card from the persisted history
    Stats,

    /// Score a guess against a target word and print the tile colors
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    // Log to stderr so warnings survive the TUI's alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let policy = ScoringPolicy::from_name(&cli.scoring);
    let store = JsonFileStore::new(&cli.scores_file);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(policy, store, &cli.wordlist),
        Commands::Stats => {
            run_stats_command(store);
            Ok(())
        }
        Commands::Score { guess, target } => run_score_command(policy, &guess, &target),
    }
}

/// Load the answer pool based on the -w flag
fn load_answers(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(ANSWERS)),
        path => {
            let words = load_from_file(path)?;
            anyhow::ensure!(
                !words.is_empty(),
                "wordlist '{path}' contains no valid five-letter words"
            );
            Ok(words)
        }
    }
}

fn run_play_command(policy: ScoringPolicy, store: JsonFileStore, wordlist_mode: &str) -> Result<()> {
    let answers = load_answers(wordlist_mode)?;
    let app = App::new(policy, store, answers);
    run_tui(app)
}

fn run_stats_command(mut store: JsonFileStore) {
    let records = store.load();
    let summary = ScoreSummary::from_records(&records);
    print_score_summary(&summary);
}

fn run_score_command(policy: ScoringPolicy, guess: &str, target: &str) -> Result<()> {
    let guess = Word::new(guess).map_err(|e| anyhow::anyhow!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| anyhow::anyhow!("Invalid target: {e}"))?;

    let verdicts = score_guess(guess.letters(), &target, policy);
    print_verdict_row(guess.letters(), &verdicts);
    Ok(())
}
