//! Configuration module for the zone pair scope application.

pub mod overlay;
pub mod palette;
pub mod persistence;
pub mod ranking;

mod debug; // Private: files use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use overlay::OVERLAY;
pub use palette::PALETTE;
pub use persistence::{PERSISTENCE, dataset_filename};
pub use ranking::RANKING;
