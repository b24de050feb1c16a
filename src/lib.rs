//! Tasklist library - task store, snapshot export and terminal UI

pub mod cli;
pub mod export;
pub mod logging;
pub mod store;
pub mod tui;

pub use store::{TaskError, TaskStore};
