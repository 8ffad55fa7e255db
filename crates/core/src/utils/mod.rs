pub mod numeric;
pub mod time_utils;

pub use numeric::*;
pub use time_utils::*;
