use chrono::NaiveDateTime;
use diesel::prelude::*;

use ratewise_core::breakeven::CostProfile;

use crate::errors::StorageError;
use crate::utils::parse_decimal;

/// Stored cost profile; both amounts are decimal text.
#[derive(Queryable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::breakeven_settings)]
#[diesel(primary_key(property_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BreakevenSettingsDB {
    pub property_id: String,
    pub fixed_costs: String,
    pub variable_cost_rate: String,
    pub updated_at: NaiveDateTime,
}

impl BreakevenSettingsDB {
    pub fn new(property_id: &str, profile: &CostProfile, updated_at: NaiveDateTime) -> Self {
        Self {
            property_id: property_id.to_string(),
            fixed_costs: profile.fixed_costs.to_string(),
            variable_cost_rate: profile.variable_cost_rate_pct.to_string(),
            updated_at,
        }
    }
}

impl TryFrom<BreakevenSettingsDB> for CostProfile {
    type Error = StorageError;

    fn try_from(db: BreakevenSettingsDB) -> Result<Self, Self::Error> {
        Ok(CostProfile::new(
            parse_decimal(&db.fixed_costs, "fixed_costs")?,
            parse_decimal(&db.variable_cost_rate, "variable_cost_rate")?,
        ))
    }
}
