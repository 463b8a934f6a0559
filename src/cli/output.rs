//! Output formatting utilities

use crate::application::{AssignmentListing, AssignmentStore, DayGroup};
use crate::domain::{AssignmentEntry, ClassEntry, DueStatus};
use chrono::NaiveDate;

/// Format a due date the way the assignment list shows it (e.g. "Mar 1, 2024")
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format the weekly schedule, one heading per day
pub fn format_schedule(groups: &[DayGroup<'_>]) -> String {
    let mut output = String::new();
    for group in groups {
        output.push_str(&format!("{}\n", group.day));
        if group.classes.is_empty() {
            output.push_str("  No classes scheduled\n");
        }
        for class in &group.classes {
            output.push_str(&format!("  {}\n", format_class(class)));
        }
    }
    output
}

/// Format a class as a single schedule line
pub fn format_class(class: &ClassEntry) -> String {
    let mut line = format!("[{}] {}", class.id, class.subject);
    if !class.code.is_empty() {
        line.push_str(&format!(" ({})", class.code));
    }
    line.push_str(&format!("  {} - {}", class.start_time, class.end_time));
    if !class.instructor.is_empty() {
        line.push_str(&format!("  {}", class.instructor));
    }
    if !class.room.is_empty() {
        line.push_str(&format!("  {}", class.room));
    }
    line
}

/// Format every field of a class
pub fn format_class_detail(class: &ClassEntry) -> String {
    let mut output = format!("Class {}\n", class.id);
    output.push_str(&format!("  Subject:    {}\n", class.subject));
    if !class.code.is_empty() {
        output.push_str(&format!("  Code:       {}\n", class.code));
    }
    if !class.instructor.is_empty() {
        output.push_str(&format!("  Instructor: {}\n", class.instructor));
    }
    if !class.room.is_empty() {
        output.push_str(&format!("  Room:       {}\n", class.room));
    }
    output.push_str(&format!("  Day:        {}\n", class.day));
    output.push_str(&format!(
        "  Time:       {} - {}\n",
        class.start_time, class.end_time
    ));
    output.push_str(&format!("  Color:      {}\n", class.color));
    output
}

/// Format the assignment list with its pending count
pub fn format_assignments(listing: &AssignmentListing<'_>, store: &AssignmentStore) -> String {
    let mut output = format!("Assignments ({} pending)\n", listing.pending_count);
    if listing.entries.is_empty() {
        output.push_str("  No assignments found\n");
        return output;
    }

    for entry in &listing.entries {
        let status = store.due_status(entry.due_date, entry.completed);
        output.push_str(&format_assignment(entry, &status));
    }
    output
}

/// Format one assignment (and its description, if any)
pub fn format_assignment(entry: &AssignmentEntry, status: &DueStatus) -> String {
    let checkbox = if entry.completed { "[x]" } else { "[ ]" };
    let mut line = format!(
        "  {} [{}] {} - {}  Due: {}",
        checkbox,
        entry.id,
        entry.title,
        entry.subject,
        format_due_date(entry.due_date)
    );
    if status.is_badge() {
        line.push_str(&format!("  [{}]", status.label));
    }
    line.push_str(&format!("  {}\n", entry.priority.badge()));

    if !entry.description.is_empty() {
        line.push_str(&format!("        {}\n", entry.description));
    }
    line
}
