//! Database models for properties.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use ratewise_core::properties::{Property, RoomType};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::properties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PropertyDB {
    pub id: String,
    pub code: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::properties)]
pub struct NewPropertyDB {
    pub id: String,
    pub code: String,
    pub name: String,
}

#[derive(
    Queryable, Identifiable, Insertable, Associations, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(belongs_to(PropertyDB, foreign_key = property_id))]
#[diesel(table_name = crate::schema::room_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RoomTypeDB {
    pub id: String,
    pub property_id: String,
    pub name: String,
    pub rooms_count: i32,
}

impl From<PropertyDB> for Property {
    fn from(db: PropertyDB) -> Self {
        Self {
            id: db.id,
            code: db.code,
            name: db.name,
        }
    }
}

impl From<RoomTypeDB> for RoomType {
    fn from(db: RoomTypeDB) -> Self {
        Self {
            id: db.id,
            property_id: db.property_id,
            name: db.name,
            rooms_count: db.rooms_count,
        }
    }
}

impl From<RoomType> for RoomTypeDB {
    fn from(domain: RoomType) -> Self {
        Self {
            id: domain.id,
            property_id: domain.property_id,
            name: domain.name,
            rooms_count: domain.rooms_count,
        }
    }
}
