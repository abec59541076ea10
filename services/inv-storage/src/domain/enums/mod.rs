pub mod naming_scheme;
pub mod storage_kind;

pub use naming_scheme::*;
pub use storage_kind::*;
