use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::{ItemRow, ListRow};

/// A single to-do entry
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: i64,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Response for reading a list with its items
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ListResponse {
    pub id: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub items: Vec<ItemResponse>,
}

impl From<ItemRow> for ItemResponse {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            created_at: row.created_at,
        }
    }
}

impl ListResponse {
    pub fn new(list: ListRow, items: Vec<ItemRow>) -> Self {
        Self {
            id: list.id,
            created_at: list.created_at,
            items: items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}
