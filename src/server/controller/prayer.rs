use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::MessageDto,
        prayer::{CreatePrayerDto, ParticipantChangeDto, UpdatePrayerDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::CurrentUser,
        model::prayer::{
            CreatePrayerParams, ParticipantChangeParams, Participants, UpdatePrayerParams,
        },
        service::{notification::NotificationEvent, prayer::PrayerService},
        state::AppState,
    },
};

use entity::prayer::{PrayerAccess, PrayerType};

fn parse_prayer_type(value: &str) -> Result<PrayerType, AppError> {
    PrayerType::parse(value).ok_or_else(|| AppError::BadRequest("Invalid prayer type".to_string()))
}

fn parse_prayer_access(value: &str) -> Result<PrayerAccess, AppError> {
    PrayerAccess::parse(value)
        .ok_or_else(|| AppError::BadRequest("Invalid prayer access modifier".to_string()))
}

/// POST /api/prayers
/// Create a new prayer owned by the authenticated user
pub async fn create_prayer(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(dto): Json<CreatePrayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let prayer_type = parse_prayer_type(&dto.prayer_type)?;
    let prayer_access = parse_prayer_access(&dto.prayer_access)?;

    let participants = dto.participants.unwrap_or_default();

    let prayer = PrayerService::new(&state.db)
        .create(CreatePrayerParams {
            title: dto.title,
            description: dto.description,
            end_date_time: dto.end_date_time,
            prayer_access,
            prayer_type,
            creator_id: user.id,
            participants: Participants {
                users: participants.users,
                groups: participants.groups,
            },
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PrayerService::to_full_dto(prayer))))
}

/// GET /api/prayers/{id}
/// Get a prayer, redacted per the hidden/open visibility rule
pub async fn get_prayer(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let prayer = PrayerService::new(&state.db).get(id).await?;

    Ok(Json(PrayerService::to_view_dto(prayer)))
}

#[derive(Deserialize)]
pub struct ListPrayersQuery {
    /// Optional prayer type filter. Unrecognized values are ignored.
    #[serde(rename = "type")]
    pub prayer_type: Option<String>,
}

/// GET /api/prayers?type=hidden|visible
/// List all prayers, each redacted per the visibility rule
pub async fn list_prayers(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ListPrayersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.prayer_type.as_deref().and_then(PrayerType::parse);

    let prayers = PrayerService::new(&state.db).list(filter).await?;

    let views: Vec<_> = prayers.into_iter().map(PrayerService::to_view_dto).collect();

    Ok(Json(views))
}

/// PUT /api/prayers/{id}
/// Patch a prayer's fields
///
/// Ownership is only enforced when the strict ownership policy is enabled.
pub async fn update_prayer(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(dto): Json<UpdatePrayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let prayer_access = parse_prayer_access(&dto.prayer_access)?;
    let prayer_type = dto
        .prayer_type
        .as_deref()
        .map(parse_prayer_type)
        .transpose()?;

    let service = PrayerService::new(&state.db);

    if state.strict_ownership {
        let prayer = service.get(id).await?;
        if prayer.creator_id != user.id {
            return Err(AuthError::AccessDenied(
                "Only the prayer creator can update the prayer".to_string(),
            )
            .into());
        }
    }

    service
        .update(UpdatePrayerParams {
            id,
            title: dto.title,
            description: dto.description,
            end_date_time: dto.end_date_time,
            prayer_access,
            prayer_type,
        })
        .await?;

    Ok(Json(MessageDto {
        message: "Prayer updated successfully".to_string(),
    }))
}

/// DELETE /api/prayers/{id}
/// Delete a prayer and its participants and impressions
///
/// Idempotent: deleting an absent prayer still returns 200. Ownership is
/// only enforced when the strict ownership policy is enabled.
pub async fn delete_prayer(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PrayerService::new(&state.db);

    if state.strict_ownership {
        match service.get(id).await {
            Ok(prayer) => {
                if prayer.creator_id != user.id {
                    return Err(AuthError::AccessDenied(
                        "Only the prayer creator can delete the prayer".to_string(),
                    )
                    .into());
                }
            }
            // Absent prayers stay deletable by anyone; the delete is a no-op.
            Err(AppError::NotFound(_)) => {}
            Err(err) => return Err(err),
        }
    }

    service.delete(id).await?;

    Ok(Json(MessageDto {
        message: "Prayer deleted successfully".to_string(),
    }))
}

/// POST /api/prayers/{id}/close
/// Close a prayer (creator only)
///
/// The transition fires at most once; re-closing an already closed prayer
/// returns 200 without emitting anything. Hidden prayers do not reveal
/// their impressions on a manual close; the reveal belongs to the
/// deadline-driven auto-close scan.
pub async fn close_prayer(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PrayerService::new(&state.db);

    let prayer = service.get(id).await?;
    if prayer.creator_id != user.id {
        return Err(AuthError::AccessDenied(
            "Only the prayer creator can close the prayer".to_string(),
        )
        .into());
    }

    let transitioned = service.close(id).await?;

    if transitioned {
        state.notifier.notify(NotificationEvent::PrayerClosed {
            prayer_id: prayer.id,
            title: prayer.title,
        });
    }

    Ok(Json(MessageDto {
        message: "Prayer closed successfully".to_string(),
    }))
}

/// POST /api/prayers/{id}/participants
/// Add users and groups to a prayer (creator only)
pub async fn add_participants(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(dto): Json<ParticipantChangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PrayerService::new(&state.db);

    let prayer = service.get(id).await?;
    if prayer.creator_id != user.id {
        return Err(AuthError::AccessDenied(
            "Only the prayer creator can add participants".to_string(),
        )
        .into());
    }

    service
        .add_participants(ParticipantChangeParams {
            prayer_id: id,
            users: dto.users.clone(),
            groups: dto.groups,
        })
        .await?;

    // Only users get individual notifications, groups do not.
    for user_id in dto.users {
        state.notifier.notify(NotificationEvent::UserAddedToPrayer {
            prayer_id: id,
            user_id,
        });
    }

    Ok(Json(MessageDto {
        message: "Participants added successfully".to_string(),
    }))
}

/// DELETE /api/prayers/{id}/participants
/// Remove users and groups from a prayer (creator only)
pub async fn remove_participants(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(dto): Json<ParticipantChangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PrayerService::new(&state.db);

    let prayer = service.get(id).await?;
    if prayer.creator_id != user.id {
        return Err(AuthError::AccessDenied(
            "Only the prayer creator can remove participants".to_string(),
        )
        .into());
    }

    service
        .remove_participants(ParticipantChangeParams {
            prayer_id: id,
            users: dto.users.clone(),
            groups: dto.groups,
        })
        .await?;

    for user_id in dto.users {
        state
            .notifier
            .notify(NotificationEvent::UserRemovedFromPrayer {
                prayer_id: id,
                user_id,
            });
    }

    Ok(Json(MessageDto {
        message: "Participants removed successfully".to_string(),
    }))
}
