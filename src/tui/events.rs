/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs and polling async view data.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// Route change requested through the router.
    Navigate(String),
    /// A resolved action to execute.
    Action(Action),
    /// Notification to display to the user.
    Notification(Notification),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the global input mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowHelp,
    CloseHelp,
    /// Return from a sub-screen to the campaign list.
    Back,
    Quit,
}

/// Which screen the router currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// `/admin/{org}/campaigns`
    CampaignList,
    /// `/admin/{org}/campaigns/new`
    NewCampaign { organization_id: String },
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::CampaignList => "Campaigns",
            Screen::NewCampaign { .. } => "New Campaign",
        }
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}

impl Notification {
    /// Notification whose id is assigned later by `AppState`.
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            id: 0,
            message: message.into(),
            level,
            ttl_ticks: 100,
        }
    }
}
