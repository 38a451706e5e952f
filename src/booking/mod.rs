pub mod api;
pub mod availability;
pub mod dates;
pub mod models;
pub mod serializer;
pub mod venues;

pub use availability::{build_timetable, project_available};
pub use serializer::serialize_timetable;
