//! Conway's Game of Life on a fixed-size torus, driven by a timed clock and
//! direct cell toggles.
//!
//! [`Controller`] owns the board and the clock. A rendering front end feeds it
//! resolved cell picks and receives a [`Snapshot`] after every change.

pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod patterns;
pub mod rules;

pub use config::LifeConfig;
pub use controller::{Controller, RunState, StateListener};
pub use error::{ConfigError, LifeError};
pub use grid::{Grid, Snapshot};
pub use patterns::{PATTERNS, Pattern};
