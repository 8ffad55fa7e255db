use diesel::prelude::*;
use std::sync::Arc;

use ratewise_core::properties::{Property, PropertyRepositoryTrait, RoomType};
use ratewise_core::Result;

use super::model::{PropertyDB, RoomTypeDB};
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::{properties, room_types};

pub struct PropertyRepository {
    pool: Arc<DbPool>,
}

impl PropertyRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl PropertyRepositoryTrait for PropertyRepository {
    fn list(&self) -> Result<Vec<Property>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = properties::table
            .select(PropertyDB::as_select())
            .order(properties::name.asc())
            .load::<PropertyDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Property::from).collect())
    }

    fn get_by_code(&self, code: &str) -> Result<Property> {
        let mut conn = get_connection(&self.pool)?;
        let row = properties::table
            .filter(properties::code.eq(code))
            .select(PropertyDB::as_select())
            .first::<PropertyDB>(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    fn list_room_types(&self, property_id: &str) -> Result<Vec<RoomType>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = room_types::table
            .filter(room_types::property_id.eq(property_id))
            .select(RoomTypeDB::as_select())
            .order(room_types::name.asc())
            .load::<RoomTypeDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(RoomType::from).collect())
    }
}
