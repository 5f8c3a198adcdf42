use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        impression::add_impression,
        prayer::{
            add_participants, close_prayer, create_prayer, delete_prayer, get_prayer,
            list_prayers, remove_participants, update_prayer,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/prayers", post(create_prayer).get(list_prayers))
        .route(
            "/api/prayers/{id}",
            get(get_prayer).put(update_prayer).delete(delete_prayer),
        )
        .route("/api/prayers/{id}/close", post(close_prayer))
        .route(
            "/api/prayers/{id}/participants",
            post(add_participants).delete(remove_participants),
        )
        .route("/api/prayers/{id}/impressions", post(add_impression))
}
