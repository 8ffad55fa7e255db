//! Properties module - hotels and their room types.

mod properties_model;
mod properties_service;
mod properties_traits;

pub use properties_model::{total_rooms, Property, RoomType};
pub use properties_service::PropertyService;
pub use properties_traits::{PropertyRepositoryTrait, PropertyServiceTrait};
