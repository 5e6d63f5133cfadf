pub mod api;
pub mod cli;
pub mod core;
pub mod dashboard;
pub mod records;
pub mod sheets;
