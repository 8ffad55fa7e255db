use crate::errors::Result;
use crate::properties::{Property, RoomType};

/// Repository trait for properties and their room inventory.
pub trait PropertyRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Property>>;

    /// Returns `DatabaseError::NotFound` when no property has this code.
    fn get_by_code(&self, code: &str) -> Result<Property>;

    fn list_room_types(&self, property_id: &str) -> Result<Vec<RoomType>>;
}

pub trait PropertyServiceTrait: Send + Sync {
    fn get_properties(&self) -> Result<Vec<Property>>;
    fn get_property(&self, code: &str) -> Result<Property>;
    fn get_room_types(&self, code: &str) -> Result<Vec<RoomType>>;
}
