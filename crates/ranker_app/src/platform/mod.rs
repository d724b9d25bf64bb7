//! Terminal front-end: argument parsing, the dispatch loop, and text views.
mod app;
mod cli;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
