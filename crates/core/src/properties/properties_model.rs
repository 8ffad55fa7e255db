//! Property domain models.

use serde::{Deserialize, Serialize};

/// A hotel managed by the dashboard, addressed by its `code` slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: String,
    pub property_id: String,
    pub name: String,
    pub rooms_count: i32,
}

/// Sellable rooms across all room types. Negative counts are ignored.
pub fn total_rooms(room_types: &[RoomType]) -> i64 {
    room_types
        .iter()
        .map(|rt| i64::from(rt.rooms_count.max(0)))
        .sum()
}
