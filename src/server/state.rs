//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::notification::NotificationService;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Outbound notification dispatcher.
    ///
    /// Fire-and-forget: delivery happens on spawned tasks and failures are
    /// logged, never surfaced to request handlers.
    pub notifier: NotificationService,

    /// Whether update/delete require the requester to be the prayer creator.
    ///
    /// The original API only guarded close and participant changes; this flag
    /// optionally extends the same check to update and delete.
    pub strict_ownership: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `notifier` - Notification dispatcher
    /// - `strict_ownership` - Ownership policy for update/delete
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, notifier: NotificationService, strict_ownership: bool) -> Self {
        Self {
            db,
            notifier,
            strict_ownership,
        }
    }
}
