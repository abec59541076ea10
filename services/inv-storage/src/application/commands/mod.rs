pub mod storage_commands;

pub use storage_commands::*;
