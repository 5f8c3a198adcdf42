use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateImpressionDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ImpressionDto {
    pub id: i32,
    pub content: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
