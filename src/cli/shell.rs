//! Interactive shell over the two stores

use crate::application::{AssignmentStore, ScheduleStore};
use crate::cli::commands::{
    tokenize, AssignmentCommand, ClassCommand, ShellCommand, ShellLine,
};
use crate::cli::output::{
    format_assignment, format_assignments, format_class_detail, format_schedule,
};
use crate::domain::{ClassDraft, DayFilter, EntryId, EntryKind};
use crate::error::{ClassboardError, Result};
use crate::infrastructure::{Clock, Config};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;

/// What the caller should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text (possibly empty) and read the next line
    Continue(String),
    Quit,
}

/// A delete waiting for the user's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingDelete {
    Class(EntryId),
    Assignment(EntryId),
}

/// Holds both stores plus the view state (day filter, search text)
pub struct Shell {
    schedule: ScheduleStore,
    assignments: AssignmentStore,
    config: Config,
    day_filter: DayFilter,
    search: String,
    pending: Option<PendingDelete>,
}

impl Shell {
    pub fn new(config: Config, clock: Box<dyn Clock>) -> Self {
        Shell {
            schedule: ScheduleStore::new(),
            assignments: AssignmentStore::with_clock(clock),
            config,
            day_filter: DayFilter::All,
            search: String::new(),
            pending: None,
        }
    }

    pub fn schedule(&self) -> &ScheduleStore {
        &self.schedule
    }

    pub fn assignments(&self) -> &AssignmentStore {
        &self.assignments
    }

    /// True while a delete question is waiting for its answer
    pub fn awaiting_confirmation(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle one input line.
    ///
    /// While a delete is pending, the line is read as the y/N answer.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        if let Some(pending) = self.pending.take() {
            return self.answer_confirmation(pending, line);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Outcome::Continue(String::new()));
        }

        let parsed = match ShellLine::try_parse_from(tokenize(trimmed)) {
            Ok(parsed) => parsed,
            Err(e) => {
                return match e.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                    | ErrorKind::DisplayVersion => Ok(Outcome::Continue(e.to_string())),
                    _ => {
                        debug!(line = trimmed, "rejected shell input");
                        Err(ClassboardError::InvalidCommand(
                            e.to_string().trim_end().to_string(),
                        ))
                    }
                };
            }
        };

        self.dispatch(parsed.command)
    }

    /// Read lines until input ends or the user quits.
    ///
    /// Command errors go to `errors` and the loop keeps going.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        output: &mut W,
        errors: &mut E,
        interactive: bool,
    ) -> Result<()> {
        if interactive {
            writeln!(output, "classboard - type 'help' for commands, 'quit' to leave")?;
            write!(output, "> ")?;
            output.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Continue(text)) => {
                    if !text.is_empty() {
                        write!(output, "{}", text)?;
                        if !text.ends_with('\n') {
                            writeln!(output)?;
                        }
                    }
                }
                Err(e) => writeln!(errors, "Error: {}", e.display_with_suggestions())?,
            }

            if interactive && !self.awaiting_confirmation() {
                write!(output, "> ")?;
            }
            output.flush()?;
        }

        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Outcome> {
        let text = match command {
            ShellCommand::Class(command) => self.class_command(command)?,
            ShellCommand::Assignment(command) => self.assignment_command(command)?,
            ShellCommand::Schedule { day } => {
                if let Some(day) = day {
                    self.day_filter = day;
                }
                self.render_schedule()
            }
            ShellCommand::Assignments { query } => {
                self.search = query.join(" ");
                self.render_assignments()
            }
            ShellCommand::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(text))
    }

    fn class_command(&mut self, command: ClassCommand) -> Result<String> {
        match command {
            ClassCommand::Add(args) => {
                let mut draft = ClassDraft::default();
                args.apply_to(&mut draft);
                self.config.fill_class_defaults(&mut draft);
                let id = self.schedule.add(&draft)?.id;
                Ok(format!("Added class {}.\n{}", id, self.render_schedule()))
            }
            ClassCommand::Edit { id, fields } => {
                let existing = self.schedule.by_id(id).ok_or(ClassboardError::NotFound {
                    kind: EntryKind::Class,
                    id,
                })?;
                let mut draft = ClassDraft::from(existing);
                fields.apply_to(&mut draft);
                self.config.fill_class_defaults(&mut draft);
                self.schedule.update(id, &draft)?;
                Ok(format!("Updated class {}.\n{}", id, self.render_schedule()))
            }
            ClassCommand::Delete { id, yes } => {
                if self.schedule.by_id(id).is_none() {
                    return Err(ClassboardError::NotFound {
                        kind: EntryKind::Class,
                        id,
                    });
                }
                if yes {
                    self.delete(PendingDelete::Class(id))
                } else {
                    self.pending = Some(PendingDelete::Class(id));
                    Ok("Are you sure you want to delete this class? (y/N)".to_string())
                }
            }
            ClassCommand::Show { id } => self
                .schedule
                .by_id(id)
                .map(format_class_detail)
                .ok_or(ClassboardError::NotFound {
                    kind: EntryKind::Class,
                    id,
                }),
        }
    }

    fn assignment_command(&mut self, command: AssignmentCommand) -> Result<String> {
        match command {
            AssignmentCommand::Add(args) => {
                let mut draft = args.to_draft();
                self.config.fill_assignment_defaults(&mut draft);
                let id = self.assignments.add(&draft)?.id;
                Ok(format!("Added assignment {}.\n{}", id, self.render_assignments()))
            }
            AssignmentCommand::Toggle { id } => {
                let completed = self.assignments.toggle_complete(id)?.completed;
                let state = if completed { "done" } else { "not done" };
                Ok(format!(
                    "Marked assignment {} as {}.\n{}",
                    id,
                    state,
                    self.render_assignments()
                ))
            }
            AssignmentCommand::Delete { id, yes } => {
                if self.assignments.by_id(id).is_none() {
                    return Err(ClassboardError::NotFound {
                        kind: EntryKind::Assignment,
                        id,
                    });
                }
                if yes {
                    self.delete(PendingDelete::Assignment(id))
                } else {
                    self.pending = Some(PendingDelete::Assignment(id));
                    Ok("Are you sure you want to delete this assignment? (y/N)".to_string())
                }
            }
            AssignmentCommand::Show { id } => {
                let entry = self.assignments.by_id(id).ok_or(ClassboardError::NotFound {
                    kind: EntryKind::Assignment,
                    id,
                })?;
                let status = self.assignments.due_status(entry.due_date, entry.completed);
                Ok(format_assignment(entry, &status))
            }
        }
    }

    fn answer_confirmation(&mut self, pending: PendingDelete, answer: &str) -> Result<Outcome> {
        let confirmed = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
        if !confirmed {
            debug!(?pending, "delete cancelled");
            return Ok(Outcome::Continue("Cancelled.".to_string()));
        }
        self.delete(pending).map(Outcome::Continue)
    }

    fn delete(&mut self, target: PendingDelete) -> Result<String> {
        match target {
            PendingDelete::Class(id) => {
                self.schedule.delete(id)?;
                Ok(format!("Deleted class {}.\n{}", id, self.render_schedule()))
            }
            PendingDelete::Assignment(id) => {
                self.assignments.delete(id)?;
                Ok(format!(
                    "Deleted assignment {}.\n{}",
                    id,
                    self.render_assignments()
                ))
            }
        }
    }

    fn render_schedule(&self) -> String {
        format_schedule(&self.schedule.list_by_day(self.day_filter))
    }

    fn render_assignments(&self) -> String {
        format_assignments(&self.assignments.list(&self.search), &self.assignments)
    }
}
