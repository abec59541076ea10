pub mod storage_repository;
pub mod wine_repository;

pub use storage_repository::*;
pub use wine_repository::*;
