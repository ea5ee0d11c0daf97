#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time Mandelbrot calculation engine
//!
//! Given a rectangular region of the complex plane and a sample
//! resolution, this crate builds the mesh of complex points covering
//! the region, follows each point's orbit under `z = z*z + c`, and
//! reports how many iterations kept the orbit inside `|z| < 2`,
//! capped at a configured maximum.  The resulting matrix of counts is
//! what a rendering layer colors to draw the Mandelbrot set.
//!
//! The mesh rows are independent, so the engine can fan them out
//! across a fixed number of threads and gather the per-row results
//! back in order; the threaded result is bit-identical to the
//! sequential one.  The `Engine` facade ties the pieces together and
//! remembers the axis vectors of its most recent calculation so a
//! consumer can position the image in data coordinates.

extern crate crossbeam;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate itertools;
extern crate num;

pub mod dispatch;
pub mod engine;
pub mod error;
pub mod escape;
pub mod grid;

pub use dispatch::escape_grid_threaded;
pub use engine::{Config, Engine};
pub use error::EngineError;
pub use escape::{escape_count, escape_grid, escape_row};
pub use grid::{linspace, sample_grid, IterationGrid, Region, Resolution, SampleGrid};
