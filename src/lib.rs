//! # cell_life
//!
//! Conway's Game of Life in a window: a fixed-size grid seeded at random,
//! advanced with the B3/S23 rule at a fixed frame rate.
//!
//! - **Space** toggles between running and paused (starts paused)
//! - **Mouse click** forces the cell under the pointer alive
//!
//! The grid logic ([`grid`], [`rules`], [`simulation`]) and the draw list
//! ([`render`]) are pure; [`state`] owns the wgpu/egui resources that put the
//! draw list on screen.
//!
//! ```rust
//! use cell_life::{Grid, Pattern};
//!
//! let mut grid = Grid::new(5, 5);
//! grid.place(Pattern::Blinker, 2, 1);
//! assert_eq!(grid.step().step(), grid);
//! ```

pub mod config;
pub mod grid;
pub mod input;
pub mod render;
pub mod rules;
pub mod simulation;
pub mod state;
pub mod timing;

pub use config::Config;
pub use grid::Grid;
pub use render::Layout;
pub use rules::{Cell, Pattern};
pub use simulation::Simulation;
pub use timing::FrameClock;
