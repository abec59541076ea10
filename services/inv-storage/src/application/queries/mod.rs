pub mod storage_queries;

pub use storage_queries::*;
