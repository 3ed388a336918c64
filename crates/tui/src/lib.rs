//! TUI module for Ticklist
//!
//! Provides a terminal editor for a Ticklist task list using ratatui and
//! crossterm.

pub mod app;
pub mod error;
pub mod event;
pub mod ui;

pub use app::{App, InputMode};
pub use error::{TuiError, TuiResult};
