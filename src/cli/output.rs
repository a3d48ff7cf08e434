//! Output formatting utilities

use crate::application::BoardEvent;
use crate::domain::Entry;

/// Format the entry list for display
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No news yet".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry(entry));
        output.push('\n');
    }
    output
}

/// Format a single entry: id and title on one line, text indented below
pub fn format_entry(entry: &Entry) -> String {
    let mut output = format!("[{}] {}\n", entry.id, entry.title);
    for line in entry.text.lines() {
        output.push_str(&format!("    {}\n", line));
    }
    output
}

/// One-line description of a board change
pub fn format_event(event: &BoardEvent) -> String {
    match event {
        BoardEvent::Created(entry) => format!("Added [{}] {}", entry.id, entry.title),
        BoardEvent::Updated(entry) => format!("Updated [{}] {}", entry.id, entry.title),
        BoardEvent::Deleted(id) => format!("Deleted [{}]", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Draft, EntryId};

    fn entry(id: i64, title: &str, text: &str) -> Entry {
        Entry::new(EntryId::new(id), Draft::new(title, text).unwrap())
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No news yet");
    }

    #[test]
    fn test_format_entry_multiline_text() {
        let output = format_entry(&entry(5, "Title", "line one\nline two"));
        assert_eq!(output, "[5] Title\n    line one\n    line two\n");
    }

    #[test]
    fn test_format_list_keeps_order() {
        let output = format_entry_list(&[entry(2, "B", "b"), entry(1, "A", "a")]);
        assert_eq!(output, "[2] B\n    b\n\n[1] A\n    a\n\n");
    }

    #[test]
    fn test_format_events() {
        let e = entry(9, "News", "x");
        assert_eq!(format_event(&BoardEvent::Created(e.clone())), "Added [9] News");
        assert_eq!(format_event(&BoardEvent::Updated(e)), "Updated [9] News");
        assert_eq!(
            format_event(&BoardEvent::Deleted(EntryId::new(9))),
            "Deleted [9]"
        );
    }
}
