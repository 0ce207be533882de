use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::graphql::{ApiError, CampaignApi, GraphQLClient};

use super::events::{AppEvent, Notification, NotificationLevel};
use super::router::{EventRouter, Router};

/// Centralized handle to the collaborators views depend on.
///
/// Created once at startup, then passed by ref to views. Tests build it from
/// fakes with [`Services::new`].
pub struct Services {
    pub api: Arc<dyn CampaignApi>,
    pub router: Arc<dyn Router>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    pub fn new(
        api: Arc<dyn CampaignApi>,
        router: Arc<dyn Router>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            api,
            router,
            event_tx,
        }
    }

    /// Wire the GraphQL client and the event-loop router from config.
    pub fn init(
        config: &AppConfig,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Result<Self, ApiError> {
        let client = GraphQLClient::from_config(&config.api)?;
        log::info!("GraphQL client targeting {}", client.endpoint());

        let router = EventRouter::new(event_tx.clone());

        Ok(Self::new(Arc::new(client), Arc::new(router), event_tx))
    }
}

/// Push a notification into the app loop from anywhere holding the sender.
pub fn notify(tx: &mpsc::UnboundedSender<AppEvent>, message: impl Into<String>, level: NotificationLevel) {
    let _ = tx.send(AppEvent::Notification(Notification::new(message, level)));
}
