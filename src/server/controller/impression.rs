use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, impression::CreateImpressionDto},
    server::{
        error::AppError,
        middleware::auth::CurrentUser,
        model::impression::CreateImpressionParams,
        service::{
            impression::ImpressionService, notification::NotificationEvent,
            prayer::PrayerService,
        },
        state::AppState,
    },
};

use entity::prayer::PrayerType;

/// POST /api/prayers/{id}/impressions
/// Record an impression against an open prayer
///
/// Any authenticated user may add impressions. Only visible prayers emit a
/// notification; hidden prayers accumulate impressions silently until they
/// close.
pub async fn add_impression(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(dto): Json<CreateImpressionDto>,
) -> Result<impl IntoResponse, AppError> {
    let prayer = PrayerService::new(&state.db).get(id).await?;

    if !prayer.is_open {
        return Err(AppError::BadRequest(
            "Prayer is closed for impressions".to_string(),
        ));
    }

    let impression = ImpressionService::new(&state.db)
        .add(CreateImpressionParams {
            prayer_id: id,
            content: dto.content,
            user_id: user.id,
        })
        .await?;

    if prayer.prayer_type == PrayerType::Visible {
        state.notifier.notify(NotificationEvent::NewImpression {
            prayer_id: id,
            user_id: impression.user_id.clone(),
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Impression added successfully".to_string(),
        }),
    ))
}
