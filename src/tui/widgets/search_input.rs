//! Single-line search box with submit/cancel semantics.
//!
//! Typing only edits the local buffer; the list filter changes when the
//! operator submits with Enter or cancels with Esc.

use crossterm::event::KeyCode;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::tui::theme;

pub const SEARCH_HINT: &str = "Search for campaign title. Hit enter to search.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Enter pressed; carries the text to merge into the filter.
    Submitted(String),
    /// Esc pressed; the filter's search string should be cleared.
    Cancelled,
    /// Key edited the buffer or moved the cursor.
    Edited,
    /// Key is not handled by the search box.
    Ignored,
}

#[derive(Debug, Default)]
pub struct SearchInput {
    text: String,
    /// Cursor position as a byte offset on a char boundary.
    cursor: usize,
    focused: bool,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing, seeded with the search string currently applied.
    pub fn focus(&mut self, current: &str) {
        self.text = current.to_string();
        self.cursor = self.text.len();
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, code: KeyCode) -> SearchOutcome {
        if !self.focused {
            return SearchOutcome::Ignored;
        }
        match code {
            KeyCode::Enter => {
                self.focused = false;
                SearchOutcome::Submitted(self.text.trim().to_string())
            }
            KeyCode::Esc => {
                self.focused = false;
                self.text.clear();
                self.cursor = 0;
                SearchOutcome::Cancelled
            }
            KeyCode::Char(c) => {
                self.text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                SearchOutcome::Edited
            }
            KeyCode::Backspace => {
                if let Some((prev, _)) = self.text[..self.cursor].char_indices().next_back() {
                    self.text.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                SearchOutcome::Edited
            }
            KeyCode::Delete => {
                if let Some(c) = self.text[self.cursor..].chars().next() {
                    self.text.drain(self.cursor..self.cursor + c.len_utf8());
                }
                SearchOutcome::Edited
            }
            KeyCode::Left => {
                if let Some((prev, _)) = self.text[..self.cursor].char_indices().next_back() {
                    self.cursor = prev;
                }
                SearchOutcome::Edited
            }
            KeyCode::Right => {
                if let Some(c) = self.text[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
                SearchOutcome::Edited
            }
            KeyCode::Home => {
                self.cursor = 0;
                SearchOutcome::Edited
            }
            KeyCode::End => {
                self.cursor = self.text.len();
                SearchOutcome::Edited
            }
            _ => SearchOutcome::Ignored,
        }
    }

    /// Render the search row. `applied` is the search string in the filter,
    /// shown while the box is not being edited.
    pub fn line(&self, applied: &str) -> Line<'static> {
        let mut spans = vec![Span::styled("  / ", theme::key_hint())];

        if self.focused {
            let (before, after) = self.text.split_at(self.cursor);
            spans.push(Span::raw(before.to_string()));
            spans.push(Span::styled("▏", Style::default().fg(theme::ACCENT)));
            spans.push(Span::raw(after.to_string()));
        } else if applied.is_empty() {
            spans.push(Span::styled(SEARCH_HINT, theme::dim()));
        } else {
            spans.push(Span::styled(applied.to_string(), theme::highlight()));
            spans.push(Span::styled("  (/ to edit, Esc in box to clear)", theme::dim()));
        }

        Line::from(spans)
    }
}
