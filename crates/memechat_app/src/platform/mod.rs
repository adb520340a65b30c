mod app;
mod auth;
mod clock;
mod effects;
mod logging;
mod persistence;
mod ui;

pub use app::run_app;
