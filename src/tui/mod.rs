//! Interactive terminal interface
//!
//! Reads `{stories, is_loading, is_error}` and the live query, and forwards
//! user intents (keystrokes, submit, dismiss) to the core.

pub mod app;
pub mod colors;
pub mod search;
pub mod table;
pub mod ui;

pub use app::App;
