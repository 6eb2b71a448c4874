// Domain types and value objects
pub mod coordinate_table;
pub mod demand;
pub mod zone;

// Re-export commonly used types
pub use coordinate_table::CoordinateTable;
pub use demand::DemandRecord;
pub use zone::{GeoPoint, ZoneCoordinate, ZoneFilter};
