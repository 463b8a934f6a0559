//! CLI command definitions

use crate::domain::{AssignmentDraft, ClassDraft, DayFilter, EntryId};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Parser, Debug)]
#[command(name = "classboard")]
#[command(about = "Class schedule and assignment tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Read shell commands from a file instead of standard input
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Config file (default: $CLASSBOARD_CONFIG, then built-in defaults)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Date to treat as today for due badges (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: '{}'. Expected YYYY-MM-DD", value))
}

/// One line typed into the shell
#[derive(Parser, Debug)]
#[command(name = "classboard", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Add, edit, delete or show a class
    #[command(subcommand)]
    Class(ClassCommand),

    /// Show the weekly schedule
    Schedule {
        /// Day to show, or "all" (default: keep the current filter)
        day: Option<DayFilter>,
    },

    /// Add, complete, delete or show an assignment
    #[command(subcommand)]
    Assignment(AssignmentCommand),

    /// List assignments, optionally searching subject and title
    Assignments {
        /// Search text (omit to clear the search)
        query: Vec<String>,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum ClassCommand {
    /// Add a class to the schedule
    Add(ClassArgs),

    /// Change fields of an existing class
    Edit {
        id: EntryId,

        #[command(flatten)]
        fields: ClassArgs,
    },

    /// Delete a class
    Delete {
        id: EntryId,

        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// Show every field of a class
    Show { id: EntryId },
}

#[derive(Subcommand, Debug)]
pub enum AssignmentCommand {
    /// Add an assignment
    Add(AssignmentArgs),

    /// Mark an assignment done, or not done again
    Toggle { id: EntryId },

    /// Delete an assignment
    Delete {
        id: EntryId,

        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// Show an assignment with its due badge
    Show { id: EntryId },
}

/// Class form fields; anything omitted keeps the draft's value
#[derive(Args, Debug, Default)]
pub struct ClassArgs {
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub instructor: Option<String>,
    #[arg(long)]
    pub room: Option<String>,
    /// Monday through Saturday
    #[arg(long)]
    pub day: Option<String>,
    /// Start time, HH:MM
    #[arg(long)]
    pub start: Option<String>,
    /// End time, HH:MM
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
}

impl ClassArgs {
    pub fn apply_to(&self, draft: &mut ClassDraft) {
        let fields = [
            (&self.subject, &mut draft.subject),
            (&self.code, &mut draft.code),
            (&self.instructor, &mut draft.instructor),
            (&self.room, &mut draft.room),
            (&self.day, &mut draft.day),
            (&self.start, &mut draft.start_time),
            (&self.end, &mut draft.end_time),
            (&self.color, &mut draft.color),
        ];
        for (given, target) in fields {
            if let Some(value) = given {
                *target = value.clone();
            }
        }
    }
}

/// Assignment form fields
#[derive(Args, Debug, Default)]
pub struct AssignmentArgs {
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Due date, YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    /// low, medium or high
    #[arg(long)]
    pub priority: Option<String>,
}

impl AssignmentArgs {
    pub fn to_draft(&self) -> AssignmentDraft {
        AssignmentDraft {
            subject: self.subject.clone().unwrap_or_default(),
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            due_date: self.due.clone().unwrap_or_default(),
            priority: self.priority.clone().unwrap_or_default(),
        }
    }
}

fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).unwrap())
}

/// Split a shell line into words. Double or single quotes group words.
pub fn tokenize(line: &str) -> Vec<String> {
    token_regex()
        .captures_iter(line)
        .filter_map(|captures| {
            captures
                .get(1)
                .or_else(|| captures.get(2))
                .or_else(|| captures.get(3))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
