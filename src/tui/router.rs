//! Route navigation.
//!
//! Views navigate through the [`Router`] trait; the app loop owns the actual
//! screen switch. Only the routes this console knows about are parsed, anything
//! else is reported and ignored.

use tokio::sync::mpsc;

use super::events::{AppEvent, Screen};

#[cfg_attr(test, mockall::automock)]
pub trait Router: Send + Sync {
    /// Navigate to `path`.
    fn push(&self, path: &str);
}

/// Router that forwards navigation into the app event loop.
pub struct EventRouter {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventRouter {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl Router for EventRouter {
    fn push(&self, path: &str) {
        log::debug!("Navigating to {path}");
        if self.tx.send(AppEvent::Navigate(path.to_string())).is_err() {
            log::warn!("Event loop closed, dropping navigation to {path}");
        }
    }
}

/// Resolve a route path to a screen.
pub fn parse_route(path: &str) -> Option<Screen> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        ["admin", org, "campaigns"] if !org.is_empty() => Some(Screen::CampaignList),
        ["admin", org, "campaigns", "new"] if !org.is_empty() => Some(Screen::NewCampaign {
            organization_id: (*org).to_string(),
        }),
        _ => None,
    }
}
