pub mod occupancy_report;
pub mod zone_summary;

pub use occupancy_report::*;
pub use zone_summary::*;
