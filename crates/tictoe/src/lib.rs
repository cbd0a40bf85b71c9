//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Engine**: [`tictoe_core::GameState`], pure game logic
//! - **Presenter**: owns the game, turns input into engine calls
//! - **UI**: stateless ratatui rendering of the presenter
//! - **Input**: crossterm events to [`Command`]s
//! - **Terminal**: raw mode and alternate screen, restored on drop
//! - **Config / CLI**: TOML settings and command-line flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod presenter;
pub mod terminal;
pub mod ui;

pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Command, Direction};
pub use presenter::{Flow, Notification, Presenter, point_to_cell, turn_label};
