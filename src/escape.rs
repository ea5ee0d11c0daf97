// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  For each sample `c` we follow the
//! orbit `z = z*z + c` starting from `z = c` and count how many of
//! the allowed iterations kept `|z| < 2`.  A point still inside the
//! bound after the last iteration reports exactly the maximum; a
//! point already outside the bound before the first update reports 0.

use num::Complex;

use grid::{IterationGrid, SampleGrid};

/// Escape-time count for a single point.
///
/// The check happens before each update, so the count is the number
/// of iterations *survived*.  Once `|z| >= 2` this orbit's magnitude
/// never drops below the bound again, so the loop stops there; the
/// count is identical to running all remaining checks.  Stopping at
/// the bound also means `z` is never squared from a huge magnitude,
/// so no intermediate value can overflow to infinity or NaN.
pub fn escape_count(c: Complex<f64>, max_iterations: u32) -> u32 {
    let mut z = c;
    let mut count = 0;
    for _ in 0..max_iterations {
        if !(z.norm_sqr() < 4.0) {
            break;
        }
        count += 1;
        z = z * z + c;
    }
    count
}

/// Evaluate one row of samples, the unit of work handed to a worker
/// by the dispatcher.
pub fn escape_row(row: &[Complex<f64>], max_iterations: u32) -> Vec<u32> {
    row.iter()
        .map(|&c| escape_count(c, max_iterations))
        .collect()
}

/// Evaluate a whole sample mesh on the calling thread.  The result
/// has the same shape as the input.
pub fn escape_grid(grid: &SampleGrid, max_iterations: u32) -> IterationGrid {
    let counts = escape_row(grid.points(), max_iterations);
    IterationGrid::from_counts(counts, grid.rows(), grid.cols())
}
