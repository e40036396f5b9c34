pub mod app_state;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod state;
pub mod ui;
