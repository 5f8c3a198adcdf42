//! Outbound notification events.
//!
//! Notifications are emitted as JSON events POSTed to a configured webhook.
//! Delivery is fire-and-forget: each event is dispatched on a spawned task so
//! request handling never waits on the webhook, and failures are logged and
//! dropped. Without a configured webhook URL events are logged at debug level
//! and discarded.

use serde::Serialize;

use crate::model::impression::ImpressionDto;

/// An event emitted to the notification webhook.
///
/// Serialized with an `event` discriminator so consumers can dispatch on the
/// event name, for example `{"event": "prayer_closed", "prayerId": 4, ...}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum NotificationEvent {
    /// A prayer transitioned from open to closed, either explicitly or by
    /// the auto-close scan.
    PrayerClosed { prayer_id: i32, title: String },
    /// A user was added to a prayer's participant set. Groups do not get
    /// individual notifications.
    UserAddedToPrayer { prayer_id: i32, user_id: String },
    /// A user was removed from a prayer's participant set.
    UserRemovedFromPrayer { prayer_id: i32, user_id: String },
    /// An impression was recorded against a visible prayer.
    NewImpression { prayer_id: i32, user_id: String },
    /// A hidden prayer closed; its accumulated impressions are revealed.
    HiddenImpressionsRevealed {
        prayer_id: i32,
        impressions: Vec<ImpressionDto>,
    },
}

impl NotificationEvent {
    /// Event name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrayerClosed { .. } => "prayer_closed",
            Self::UserAddedToPrayer { .. } => "user_added_to_prayer",
            Self::UserRemovedFromPrayer { .. } => "user_removed_from_prayer",
            Self::NewImpression { .. } => "new_impression",
            Self::HiddenImpressionsRevealed { .. } => "hidden_impressions_revealed",
        }
    }
}

/// Where emitted events go.
#[derive(Clone)]
enum Delivery {
    /// POST each event to this webhook URL.
    Webhook(String),
    /// No webhook configured; log at debug level and drop.
    Disabled,
    /// Hand events to an in-process channel so tests can assert exactly
    /// what was emitted, and in what order.
    #[cfg(test)]
    Channel(tokio::sync::mpsc::UnboundedSender<NotificationEvent>),
}

/// Dispatches notification events to the configured webhook.
///
/// Cloneable so the scheduler and every request handler can hold their own
/// handle; clones share the underlying `reqwest` connection pool.
#[derive(Clone)]
pub struct NotificationService {
    http: reqwest::Client,
    delivery: Delivery,
}

impl NotificationService {
    pub fn new(http: reqwest::Client, webhook_url: Option<String>) -> Self {
        let delivery = match webhook_url {
            Some(url) => Delivery::Webhook(url),
            None => Delivery::Disabled,
        };

        Self { http, delivery }
    }

    /// Builds a service that sends every event to the returned channel
    /// instead of a webhook.
    #[cfg(test)]
    pub fn capturing() -> (
        Self,
        tokio::sync::mpsc::UnboundedReceiver<NotificationEvent>,
    ) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        let service = Self {
            http: reqwest::Client::new(),
            delivery: Delivery::Channel(tx),
        };

        (service, rx)
    }

    /// Emits an event to the webhook without waiting for delivery.
    ///
    /// The POST runs on a spawned task; a delivery failure is logged and the
    /// event is dropped. At-most-once, never retried.
    pub fn notify(&self, event: NotificationEvent) {
        let url = match &self.delivery {
            Delivery::Webhook(url) => url.clone(),
            Delivery::Disabled => {
                tracing::debug!(
                    "No notification webhook configured, dropping {}",
                    event.name()
                );
                return;
            }
            #[cfg(test)]
            Delivery::Channel(tx) => {
                let _ = tx.send(event);
                return;
            }
        };

        let http = self.http.clone();
        let name = event.name();

        tokio::spawn(async move {
            match http.post(&url).json(&event).send().await {
                Ok(response) if !response.status().is_success() => {
                    tracing::warn!(
                        "Notification webhook returned {} for {}",
                        response.status(),
                        name
                    );
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!("Failed to deliver {} notification: {}", name, err);
                }
            }
        });
    }
}
