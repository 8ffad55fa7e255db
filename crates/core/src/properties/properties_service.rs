use std::sync::Arc;

use log::debug;

use crate::errors::{Error, Result};
use crate::properties::{Property, PropertyRepositoryTrait, PropertyServiceTrait, RoomType};

pub struct PropertyService {
    repository: Arc<dyn PropertyRepositoryTrait>,
}

impl PropertyService {
    pub fn new(repository: Arc<dyn PropertyRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl PropertyServiceTrait for PropertyService {
    fn get_properties(&self) -> Result<Vec<Property>> {
        self.repository.list()
    }

    fn get_property(&self, code: &str) -> Result<Property> {
        self.repository.get_by_code(code).map_err(|e| {
            if e.is_not_found() {
                debug!("Lookup of unknown property code '{}'", code);
                Error::NotFound(format!("Property '{}'", code))
            } else {
                e
            }
        })
    }

    fn get_room_types(&self, code: &str) -> Result<Vec<RoomType>> {
        let property = self.get_property(code)?;
        self.repository.list_room_types(&property.id)
    }
}
