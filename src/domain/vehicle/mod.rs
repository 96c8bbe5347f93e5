//! Vehicle module - raw records, inference tables, and normalization.

mod body_segment;
mod fuel_type;
mod normalized;
mod record;

pub use body_segment::BodySegment;
pub use fuel_type::FuelType;
pub use normalized::{propagate_family_images, NormalizedVehicle};
pub use record::VehicleRecord;
