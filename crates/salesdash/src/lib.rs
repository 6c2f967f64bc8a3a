//! SalesDash library: configuration, dispatch and report output.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod report;
pub mod ui;
pub mod version;
