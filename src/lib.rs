//! Neon-styled Snake for the terminal.
//!
//! The game rules live in [`game`], [`snake`] and [`food`] and have no
//! terminal dependency; [`renderer`], [`ui`] and [`terminal_runtime`] draw the
//! state with ratatui over crossterm, and [`tick`] paces the loop.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod starfield;
pub mod terminal_runtime;
pub mod theme;
pub mod tick;
pub mod ui;
