//! Domain services

pub mod status;

pub use status::{annotate, classify, filter_by_status, Status, StatusFilter};
