#![no_std]

//! Gridmark Core - growable matrix with markers, cursor and directional fill
//!
//! This crate provides the in-memory matrix: cells, rows, named markers,
//! navigation commands and the growth/edit/composition algorithms. It has no
//! I/O and needs only `alloc`.

extern crate alloc;

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod marker;
pub mod matrix;
pub mod navigation;
pub mod row;
pub mod traits;

pub use cell::Cell;
pub use config::MatrixConfig;
pub use direction::{direction_steps, Direction};
pub use error::{ErrorCategory, GridError, Result};
pub use marker::Marker;
pub use matrix::{MapSelector, Matrix};
pub use navigation::{bookmark, move_to, offset, Navigation};
pub use row::Row;
pub use traits::Expandable;
