//! Command-line front end for the shrimple reminders engine.
//!
//! # Responsibility
//! - Parse arguments into typed commands and hand them to
//!   `shrimple_core::ReminderService`.
//! - Render results and map every failure to a non-zero exit.
//!
//! # Invariants
//! - No business logic lives here; the core crate owns parsing, filtering
//!   and mutation semantics.
//! - Invoking the binary without a subcommand prints usage and exits 0.

use clap::{CommandFactory, Parser, Subcommand};
use shrimple_core::{
    default_log_level, init_logging, parse_date, FileReminderRepository, ReminderFilter,
    ReminderMatch, ReminderService, DEFAULT_STORE_FILE,
};
use std::process::ExitCode;

/// Environment variable that enables file logging when set to an absolute
/// directory path.
const LOG_DIR_ENV: &str = "SHRIMPLE_LOG_DIR";

#[derive(Debug, Parser)]
#[command(
    name = "shrimple",
    version,
    about = "Shrimple personal reminders, kept in a plain text file"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a new pending reminder.
    Add {
        /// Reminder text; multiple words are joined with spaces.
        #[arg(required = true, value_name = "WORD")]
        text: Vec<String>,
        /// Due date, e.g. 25/12/2024 or 25/12 (current year assumed).
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
    /// List reminders due today.
    Today,
    /// List reminders, optionally filtered.
    List {
        /// Keep only reminders whose text equals this string exactly.
        #[arg(long, value_name = "TEXT")]
        reminder: Option<String>,
        /// Keep only completed reminders.
        #[arg(long)]
        complete: bool,
        /// Keep only pending reminders.
        #[arg(long)]
        uncomplete: bool,
        /// Keep only reminders due exactly on this date.
        #[arg(long, value_name = "DATE")]
        on: Option<String>,
        /// Keep only reminders due strictly after this date.
        #[arg(long, value_name = "DATE")]
        after: Option<String>,
        /// Keep only reminders due strictly before this date.
        #[arg(long, value_name = "DATE")]
        before: Option<String>,
    },
    /// Mark the reminder at the given index as done.
    Complete {
        /// Store index; negative values count from the end (-1 = last).
        #[arg(long, allow_negative_numbers = true)]
        index: i64,
    },
    /// Delete the reminder at the given index.
    Delete {
        /// Store index; negative values count from the end (-1 = last).
        #[arg(long, allow_negative_numbers = true)]
        index: i64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("shrimple: {message}");
            return ExitCode::FAILURE;
        }
    }

    let Some(command) = cli.command else {
        // Bare invocation asks for usage; that is not an error.
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("shrimple: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    let service = ReminderService::new(FileReminderRepository::new(DEFAULT_STORE_FILE));

    match command {
        Command::Add { text, date } => {
            let date = parse_optional_date(date)?;
            let added = service
                .add(&text.join(" "), date)
                .map_err(|err| err.to_string())?;
            println!("Added: {}", added.text);
        }
        Command::Today => {
            let matches = service.today().map_err(|err| err.to_string())?;
            print_matches(&matches, "Nothing due today.");
        }
        Command::List {
            reminder,
            complete,
            uncomplete,
            on,
            after,
            before,
        } => {
            let filter = ReminderFilter {
                text: reminder,
                completed: complete,
                uncompleted: uncomplete,
                due_on: parse_optional_date(on)?,
                due_after: parse_optional_date(after)?,
                due_before: parse_optional_date(before)?,
            };
            let matches = service.list(&filter).map_err(|err| err.to_string())?;
            print_matches(&matches, "No matching reminders.");
        }
        Command::Complete { index } => {
            let completed = service.complete(index).map_err(|err| err.to_string())?;
            println!("Completed: {}", completed.text);
        }
        Command::Delete { index } => {
            let removed = service.delete(index).map_err(|err| err.to_string())?;
            println!("Deleted: {}", removed.text);
        }
    }

    Ok(())
}

fn parse_optional_date(raw: Option<String>) -> Result<Option<chrono::NaiveDate>, String> {
    raw.map(|value| parse_date(&value))
        .transpose()
        .map_err(|err| err.to_string())
}

fn print_matches(matches: &[ReminderMatch], empty_message: &str) {
    if matches.is_empty() {
        println!("{empty_message}");
        return;
    }
    for entry in matches {
        println!("{:>4}  {}", entry.index, render(entry));
    }
}

fn render(entry: &ReminderMatch) -> String {
    let status = if entry.reminder.completed {
        shrimple_core::STATUS_DONE
    } else {
        shrimple_core::STATUS_PENDING
    };
    match entry.reminder.date {
        Some(date) => format!(
            "{status} {}  {}",
            entry.reminder.text,
            shrimple_core::format_date(date)
        ),
        None => format!("{status} {}", entry.reminder.text),
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_tree_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_parses_without_a_subcommand() {
        let cli = Cli::try_parse_from(["shrimple"]).expect("bare call should parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_collects_words_and_optional_date() {
        let cli = Cli::try_parse_from(["shrimple", "add", "Buy", "milk", "--date", "25/12"])
            .expect("add should parse");
        match cli.command {
            Some(Command::Add { text, date }) => {
                assert_eq!(text, vec!["Buy".to_string(), "milk".to_string()]);
                assert_eq!(date.as_deref(), Some("25/12"));
            }
            other => panic!("expected add command, got: {other:?}"),
        }
    }

    #[test]
    fn add_requires_at_least_one_word() {
        assert!(Cli::try_parse_from(["shrimple", "add"]).is_err());
    }

    #[test]
    fn complete_accepts_negative_indices() {
        let cli = Cli::try_parse_from(["shrimple", "complete", "--index", "-1"])
            .expect("negative index should parse");
        match cli.command {
            Some(Command::Complete { index }) => assert_eq!(index, -1),
            other => panic!("expected complete command, got: {other:?}"),
        }
    }

    #[test]
    fn complete_requires_an_explicit_index() {
        assert!(Cli::try_parse_from(["shrimple", "complete"]).is_err());
    }

    #[test]
    fn list_accepts_all_filters_together() {
        let cli = Cli::try_parse_from([
            "shrimple", "list", "--reminder", "Buy milk", "--uncomplete", "--on", "25/12/2024",
        ])
        .expect("list should parse");
        match cli.command {
            Some(Command::List {
                reminder,
                complete,
                uncomplete,
                on,
                ..
            }) => {
                assert_eq!(reminder.as_deref(), Some("Buy milk"));
                assert!(!complete);
                assert!(uncomplete);
                assert_eq!(on.as_deref(), Some("25/12/2024"));
            }
            other => panic!("expected list command, got: {other:?}"),
        }
    }
}
