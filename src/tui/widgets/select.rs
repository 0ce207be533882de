//! Compact cycling select, used for the status and sort-by selectors.

use ratatui::text::Span;

use crate::tui::theme;

/// A labelled value with the key that cycles it.
pub struct Select<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub key: &'a str,
}

impl<'a> Select<'a> {
    pub fn new(label: &'a str, value: &'a str, key: &'a str) -> Self {
        Self { label, value, key }
    }

    pub fn spans(&self) -> Vec<Span<'static>> {
        vec![
            Span::styled(format!("{} ", self.label), theme::muted()),
            Span::styled(format!(" {} ▾ ", self.value), theme::select_value()),
            Span::styled(format!(" ({})", self.key), theme::key_hint()),
        ]
    }
}
