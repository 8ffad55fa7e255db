//! SQLite storage implementation for properties and room types.

mod model;
mod repository;

pub use model::{NewPropertyDB, PropertyDB, RoomTypeDB};
pub use repository::PropertyRepository;
