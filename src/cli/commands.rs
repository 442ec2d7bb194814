//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show today's habits and progress (default)
    Dashboard,
    /// Add a new habit
    Add {
        /// Name of the habit
        #[arg(required_unless_present = "suggestion")]
        name: Option<String>,
        /// Use a numbered suggestion instead of typing a name
        #[arg(short, long, conflicts_with = "name", value_name = "N")]
        suggestion: Option<usize>,
    },
    /// List suggested habits to get started
    Suggestions,
    /// Mark a habit as done for today
    Done {
        /// Habit ID
        id: i64,
    },
    /// Delete a habit and its history
    Delete {
        /// Habit ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show streaks and a calendar of recent days for one habit
    History {
        /// Habit ID
        id: i64,
        /// Number of days to show
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Show overall statistics and per-habit activity
    Stats,
    /// Output single line for statusline/tmux integration
    Statusline,
}
