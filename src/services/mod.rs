pub mod donation_service;
pub mod location_service;
pub mod supplies_service;

pub use donation_service::*;
pub use location_service::*;
pub use supplies_service::*;
