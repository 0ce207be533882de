use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::core::campaign::ListViewParams;

use super::events::{Action, AppEvent, Notification, NotificationLevel, Screen};
use super::layout::AppLayout;
use super::router::parse_route;
use super::services::Services;
use super::theme;
use super::views::admin_campaign_list::AdminCampaignListView;
use super::views::new_campaign::NewCampaignView;

/// Maximum notifications shown at once.
const MAX_NOTIFICATIONS: usize = 3;

pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Screen the router currently shows.
    pub screen: Screen,
    params: ListViewParams,
    /// Campaign list view (Some while its screen is mounted).
    pub campaigns: Option<AdminCampaignListView>,
    /// New-campaign placeholder (Some while its screen is mounted).
    pub new_campaign: Option<NewCampaignView>,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for events from services, routers and background tasks.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    services: Services,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        services: Services,
        params: ListViewParams,
    ) -> Self {
        Self {
            running: true,
            screen: Screen::CampaignList,
            campaigns: Some(AdminCampaignListView::new(params.clone())),
            new_campaign: None,
            params,
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            event_rx,
            services,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        if let Some(view) = self.campaigns.as_mut() {
            view.mount(&self.services);
        }

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Current screen
                if self.dispatch_view_input(&crossterm_event) {
                    return;
                }

                // Priority 3: Global keybindings
                if let Some(action) = map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Navigate(path) => self.navigate(&path),
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    /// Dispatch input to the current screen. Returns true if consumed.
    fn dispatch_view_input(&mut self, event: &Event) -> bool {
        match self.screen {
            Screen::CampaignList => match self.campaigns.as_mut() {
                Some(view) => view.handle_input(event, &self.services),
                None => false,
            },
            Screen::NewCampaign { .. } => {
                let action = self
                    .new_campaign
                    .as_ref()
                    .and_then(|view| view.handle_input(event));
                match action {
                    Some(action) => {
                        self.handle_action(action);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::Back => {
                let path = format!("/admin/{}/campaigns", self.params.organization_id);
                self.navigate(&path);
            }
        }
    }

    /// Switch screens. The screen being left is unmounted.
    fn navigate(&mut self, path: &str) {
        let Some(screen) = parse_route(path) else {
            log::warn!("Unknown route: {path}");
            self.push_notification(format!("Unknown route {path}"), NotificationLevel::Warning);
            return;
        };
        if screen == self.screen {
            return;
        }
        log::info!("Switching to {}", screen.label());

        match &screen {
            Screen::CampaignList => {
                self.new_campaign = None;
                let mut view = AdminCampaignListView::new(self.params.clone());
                view.mount(&self.services);
                self.campaigns = Some(view);
            }
            Screen::NewCampaign { organization_id } => {
                if let Some(mut view) = self.campaigns.take() {
                    view.unmount();
                }
                self.new_campaign = Some(NewCampaignView::new(organization_id.clone()));
            }
        }
        self.screen = screen;
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        let mut notification = Notification::new(message, level);
        notification.id = self.notification_counter;
        self.notifications.push(notification);

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired, poll async data.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);

        if let Some(view) = self.campaigns.as_mut() {
            view.poll(&self.services);
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);

        match self.screen {
            Screen::CampaignList => {
                if let Some(ref view) = self.campaigns {
                    view.render(frame, layout.main);
                }
            }
            Screen::NewCampaign { .. } => {
                if let Some(ref view) = self.new_campaign {
                    view.render(frame, layout.main);
                }
            }
        }

        self.render_status_bar(frame, layout.status);
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" CAMPAIGNS ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                format!("org {}", self.params.organization_id),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
        ];

        let hints = match (&self.screen, &self.campaigns) {
            (Screen::CampaignList, Some(view)) => view.key_hints(),
            _ => vec![("Esc", "back")],
        };
        for (key, desc) in hints {
            spans.push(Span::styled(key, theme::key_hint()));
            spans.push(Span::raw(format!(":{desc} ")));
        }
        spans.push(Span::styled("?", theme::key_hint()));
        spans.push(Span::raw(":help "));
        spans.push(Span::styled("q", theme::key_hint()));
        spans.push(Span::raw(":quit"));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, 1, max_width, height).intersection(area);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(&n.message),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = vec![
            ("Global:", ""),
            ("q / Ctrl+C", "Quit application"),
            ("?", "Toggle this help"),
            ("", ""),
            ("Campaign list:", ""),
            ("+", "New campaign / archive selected"),
            ("m", "Overflow menu (admins)"),
            ("s / S", "Next / previous status"),
            ("o / O", "Next / previous sort"),
            ("/", "Search (Enter submits, Esc clears)"),
            ("j/k", "Move row cursor"),
            ("G / g", "Jump to bottom / top"),
            ("Space", "Tick campaign (bulk mode)"),
            ("r", "Refresh list"),
            ("", ""),
            ("New campaign:", ""),
            ("Esc", "Back to the list"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                " Keybindings",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<16}", key),
                        Style::default().fg(theme::PRIMARY_LIGHT).bold(),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Map help modal input to action.
fn map_help_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };
    match code {
        KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

fn map_input_to_action(event: &Event) -> Option<Action> {
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
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('q')) => Some(Action::Quit),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => Some(Action::ShowHelp),
        _ => None,
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
