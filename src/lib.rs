pub mod commands;
pub mod models;
pub mod recurrence;
pub mod storage;
pub mod suggestions;
pub mod tui;
