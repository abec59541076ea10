//! Service library

pub mod application;
pub mod domain;
