pub mod args;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod session;
pub mod ui;
