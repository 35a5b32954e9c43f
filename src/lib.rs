//! Lexikon - ordförråd för grekiska texter
//!
//! En native desktop-applikation byggd med Rust och egui.

pub mod models;
pub mod db;
pub mod services;
pub mod ui;
pub mod utils;

// Re-exports
pub use db::Database;
pub use models::*;
pub use ui::{AppState, View};
pub use utils::error::{AppError, AppResult};
