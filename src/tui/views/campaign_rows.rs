//! Campaign rows, the list the admin view wraps.
//!
//! Loads campaigns for the current filter and sort through `CampaignApi`,
//! renders them with a row cursor and, in multi-select mode, checkboxes.
//! Checkbox display is seeded from the parent's selection on every sync and
//! flipped locally on click; every toggle is reported upward as a
//! [`CheckedPayload`] carrying the state *before* the click.

use std::collections::HashSet;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

use crate::core::campaign::{CampaignSelection, CampaignSummary, CheckedPayload, ChildListProps};
use crate::core::graphql::CampaignQuery;
use crate::tui::services::Services;
use crate::tui::theme;

/// Lines above the first row in `build_lines`.
const HEADER_LINES: usize = 3;

pub enum RowsResult {
    /// Input consumed, nothing for the parent to do.
    Consumed,
    /// A checkbox was clicked.
    Checked(CheckedPayload),
}

enum LoadOutcome {
    Loaded(u64, Vec<CampaignSummary>),
    Failed(u64, String),
}

pub struct CampaignRowsView {
    props: ChildListProps,
    rows: Vec<CampaignSummary>,
    error: Option<String>,
    loaded: bool,
    loading: bool,
    /// Ids whose checkbox is currently drawn ticked.
    checked: HashSet<String>,
    selected: usize,
    /// Bumped on every load so responses for superseded props are dropped.
    generation: u64,
    data_rx: mpsc::UnboundedReceiver<LoadOutcome>,
    data_tx: mpsc::UnboundedSender<LoadOutcome>,
}

impl CampaignRowsView {
    pub fn new(props: ChildListProps) -> Self {
        let (data_tx, data_rx) = mpsc::unbounded_channel();
        Self {
            props,
            rows: Vec::new(),
            error: None,
            loaded: false,
            loading: false,
            checked: HashSet::new(),
            selected: 0,
            generation: 0,
            data_rx,
            data_tx,
        }
    }

    pub fn props(&self) -> &ChildListProps {
        &self.props
    }

    pub fn rows(&self) -> &[CampaignSummary] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_checked(&self, campaign_id: &str) -> bool {
        self.checked.contains(campaign_id)
    }

    /// Accept new props from the parent, reloading when the query changed.
    pub fn set_props(&mut self, props: ChildListProps, services: &Services) {
        if props == self.props {
            return;
        }
        let query_changed = props.campaigns_filter != self.props.campaigns_filter
            || props.sort_by != self.props.sort_by
            || props.organization_id != self.props.organization_id;

        if !props.select_multiple {
            // Checkboxes are unmounted with multi-select; their state goes too.
            self.checked.clear();
        }
        self.props = props;

        if query_changed {
            self.selected = 0;
            self.load(services);
        }
    }

    /// Redraw checkboxes from the parent's selection. Unticks everything when
    /// multi-select is off.
    pub fn sync_checked(&mut self, selection: &CampaignSelection) {
        self.checked.clear();
        if self.props.select_multiple {
            self.checked.extend(selection.ids());
        }
    }

    /// Trigger async load of the campaigns matching the current props.
    pub fn load(&mut self, services: &Services) {
        self.generation += 1;
        self.loading = true;

        let generation = self.generation;
        let api = services.api.clone();
        let tx = self.data_tx.clone();
        let query = CampaignQuery {
            organization_id: self.props.organization_id.clone(),
            campaigns_filter: self.props.campaigns_filter.clone(),
            sort_by: self.props.sort_by,
        };

        tokio::spawn(async move {
            let outcome = match api.list_campaigns(query).await {
                Ok(rows) => LoadOutcome::Loaded(generation, rows),
                Err(e) => {
                    log::warn!("Failed to load campaigns: {e}");
                    LoadOutcome::Failed(generation, e.summary())
                }
            };
            let _ = tx.send(outcome);
        });
    }

    /// Poll for async load completion. Call from on_tick.
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.data_rx.try_recv() {
            match outcome {
                LoadOutcome::Loaded(generation, rows) if generation == self.generation => {
                    self.rows = rows;
                    self.error = None;
                    self.selected = self.selected.min(self.rows.len().saturating_sub(1));
                    self.loaded = true;
                    self.loading = false;
                }
                LoadOutcome::Failed(generation, message) if generation == self.generation => {
                    self.error = Some(message);
                    self.loading = false;
                }
                _ => log::debug!("Dropping campaign list response for superseded props"),
            }
        }
    }

    // ── Input ────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event, services: &Services) -> Option<RowsResult> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                self.select_next();
                Some(RowsResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.select_prev();
                Some(RowsResult::Consumed)
            }
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                self.selected = self.rows.len().saturating_sub(1);
                Some(RowsResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                self.selected = 0;
                Some(RowsResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char(' ')) if self.props.select_multiple => {
                self.toggle_selected_row().map(RowsResult::Checked)
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                self.load(services);
                Some(RowsResult::Consumed)
            }
            _ => None,
        }
    }

    /// Flip the checkbox under the cursor, reporting the pre-click state.
    fn toggle_selected_row(&mut self) -> Option<CheckedPayload> {
        let id = self.rows.get(self.selected)?.id.clone();
        let was_checked = self.checked.contains(&id);
        if was_checked {
            self.checked.remove(&id);
        } else {
            self.checked.insert(id.clone());
        }
        Some(CheckedPayload::new(id, was_checked))
    }

    fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1).min(self.rows.len() - 1);
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // ── Rendering ────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_default("List");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(ref error) = self.error {
            let msg = Paragraph::new(vec![
                Line::raw(""),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("Failed to load campaigns: {error}"),
                        Style::default().fg(theme::ERROR),
                    ),
                ]),
                Line::from(vec![Span::raw("  "), Span::styled("Press r to retry.", theme::dim())]),
            ]);
            frame.render_widget(msg, inner);
            return;
        }

        if !self.loaded {
            let loading = Paragraph::new(vec![
                Line::raw(""),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled("Loading campaigns...", theme::muted()),
                ]),
            ]);
            frame.render_widget(loading, inner);
            return;
        }

        let lines = build_lines(&self.rows, self.selected, self.props.select_multiple, &self.checked);

        // Keep the cursor row visible
        let visible_height = inner.height as usize;
        let cursor_line = HEADER_LINES + self.selected;
        let scroll = if visible_height > 0 && cursor_line >= visible_height {
            cursor_line + 1 - visible_height
        } else {
            0
        };

        frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);
    }
}

// ── Line builders ────────────────────────────────────────────────────────────

fn build_lines(
    rows: &[CampaignSummary],
    selected: usize,
    select_multiple: bool,
    checked: &HashSet<String>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(rows.len() + HEADER_LINES + 2);

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!(
                "  {}{:<36} {:<12} {}",
                if select_multiple { "    " } else { "" },
                "Title",
                "Status",
                "Due"
            ),
            Style::default()
                .fg(theme::TEXT_MUTED)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", "─".repeat(70)),
        theme::dim(),
    )));

    if rows.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("No campaigns match this filter.", theme::dim()),
        ]));
        return lines;
    }

    for (i, row) in rows.iter().enumerate() {
        let is_selected = i == selected;
        let cursor = if is_selected { "▸ " } else { "  " };

        let mut spans = vec![Span::styled(
            cursor.to_string(),
            if is_selected {
                theme::highlight()
            } else {
                Style::default()
            },
        )];

        if select_multiple {
            let mark = if checked.contains(&row.id) { "[x] " } else { "[ ] " };
            spans.push(Span::styled(mark.to_string(), Style::default().fg(theme::PRIMARY_LIGHT)));
        }

        let (status, status_color) = campaign_status(row);
        let row_style = if is_selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        spans.push(Span::styled(format!("{:<36}", truncate(&row.title, 36)), row_style));
        spans.push(Span::styled(
            format!(" {:<12}", status),
            Style::default().fg(status_color),
        ));
        spans.push(Span::styled(
            format!(" {}", row.due_by.as_deref().map(format_datetime).unwrap_or_default()),
            theme::muted(),
        ));

        lines.push(Line::from(spans));
    }

    lines
}

fn campaign_status(row: &CampaignSummary) -> (&'static str, ratatui::style::Color) {
    if row.is_archived {
        ("Archived", theme::TEXT_MUTED)
    } else if row.is_started {
        ("Started", theme::SUCCESS)
    } else {
        ("Not started", theme::WARNING)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// Format an RFC3339 datetime string into a date for display.
fn format_datetime(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| rfc3339.chars().take(10).collect())
}
