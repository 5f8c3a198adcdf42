use crate::server::{
    data::prayer::PrayerRepository,
    model::prayer::{CreatePrayerParams, Participants, UpdatePrayerParams},
};
use chrono::{Duration, Utc};
use entity::prayer::{PrayerAccess, PrayerType};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod close;
mod create;
mod delete;
mod get_by_id;
mod list;
mod update;
