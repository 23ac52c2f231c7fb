use clap::{Args, Parser, Subcommand, ValueEnum};
use leetanki_core::StatusFilter;
use std::path::PathBuf;

use crate::cli::session::ReviewMode;

#[derive(Debug, Parser, Clone)]
#[command(name = "leetanki", version, about = "Spaced-repetition flashcards for coding-interview problems")]
pub struct Cli {
    /// Problems JSON file (defaults to the app data dir)
    #[arg(long, env = "LEETANKI_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Timestamped backups to keep
    #[arg(long, default_value_t = 10, global = true)]
    pub max_backups: usize,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Add a problem (prompts for anything not given)
    Add(AddArgs),
    /// List every problem, including ones skipped for recall
    List(ListArgs),
    /// Show one problem in full
    Show { number: usize },
    /// Delete a problem
    Rm { number: usize },
    /// Edit a problem
    Edit(EditArgs),
    /// Review problems filtered by tag, difficulty and status
    Review(ReviewArgs),
    /// Review problems scheduled for today
    Daily(DailyArgs),
    /// Review one random problem
    Bored(BoredArgs),
    /// Collection statistics
    Stats,
    /// Mark or unmark problems to skip recall (interactive without selectors)
    Skip(SkipArgs),
}

#[derive(Debug, Args, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub title: Option<String>,
    /// Comma separated
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub statement: Option<String>,
    #[arg(long)]
    pub solution: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub difficulty: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ListArgs {
    #[arg(long)]
    pub tag: Option<String>,
    /// Substring match on title, statement, notes and tags
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct EditArgs {
    pub number: usize,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub statement: Option<String>,
    #[arg(long)]
    pub solution: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub difficulty: Option<String>,
    #[arg(long = "add-tag")]
    pub add_tags: Vec<String>,
    #[arg(long = "rm-tag")]
    pub rm_tags: Vec<String>,
    #[arg(long)]
    pub skip: bool,
    #[arg(long)]
    pub unskip: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ReviewArgs {
    #[arg(long, value_enum, default_value_t = ReviewMode::Recall)]
    pub mode: ReviewMode,
    #[arg(long, default_value = "")]
    pub tag: String,
    #[arg(long, default_value = "")]
    pub difficulty: String,
    /// unseen | failed | due | all
    #[arg(long, default_value = "due")]
    pub status: StatusFilter,
    /// Fix the shuffle order
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct DailyArgs {
    #[arg(long, value_enum, default_value_t = ReviewMode::Recall)]
    pub mode: ReviewMode,
}

#[derive(Debug, Args, Clone)]
pub struct BoredArgs {
    /// Overrides BORED_TAG; an empty value means any tag
    #[arg(long, short)]
    pub tag: Option<String>,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SkipAction {
    /// Exclude from recall sessions
    Mark,
    /// Include in recall sessions again
    Unmark,
}

impl SkipAction {
    pub fn as_flag(self) -> bool {
        self == SkipAction::Mark
    }
}

#[derive(Debug, Args, Clone)]
pub struct SkipArgs {
    /// 1-based indices or ranges, e.g. '1,3,5-7'
    #[arg(long, short)]
    pub indices: Option<String>,
    /// Tag to match (normalized)
    #[arg(long, short)]
    pub tag: Option<String>,
    #[arg(long, short, value_enum)]
    pub action: Option<SkipAction>,
    /// Apply to all problems
    #[arg(long)]
    pub all: bool,
}
