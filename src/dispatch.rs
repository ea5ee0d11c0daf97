//! Row-strip parallel dispatch.  The sample mesh is split into
//! contiguous bands of rows, each band is evaluated on its own scoped
//! thread, and the per-row results land in disjoint slices of one
//! output buffer, so the gathered matrix is already in original row
//! order.  Rows share no state, so no locking is needed anywhere.

use error::EngineError;
use escape::escape_row;
use grid::{IterationGrid, SampleGrid};

/// Evaluate a sample mesh across `workers` threads.
///
/// The output is bit-identical to `escape::escape_grid` on the same
/// inputs.  A worker count above the number of rows just leaves the
/// extra workers unspawned.  The threads live only for the duration
/// of this call; if any of them panics the whole calculation fails
/// with `WorkerFailure` rather than returning a partial matrix.
pub fn escape_grid_threaded(
    grid: &SampleGrid,
    max_iterations: u32,
    workers: usize,
) -> Result<IterationGrid, EngineError> {
    if workers == 0 {
        return Err(EngineError::InvalidConfiguration(
            "worker count must be at least 1",
        ));
    }
    let rows = grid.rows();
    let cols = grid.cols();
    if grid.is_empty() {
        return Ok(IterationGrid::from_counts(Vec::new(), rows, cols));
    }

    let mut counts = vec![0 as u32; rows * cols];
    // Band size in points, rounded up to whole rows.
    let band = ((rows + workers - 1) / workers) * cols;
    crossbeam::scope(|spawner| {
        for (samples, out) in grid.points().chunks(band).zip(counts.chunks_mut(band)) {
            spawner.spawn(move |_| {
                for (row, out_row) in samples.chunks(cols).zip(out.chunks_mut(cols)) {
                    out_row.copy_from_slice(&escape_row(row, max_iterations));
                }
            });
        }
    })
    .map_err(|_| EngineError::WorkerFailure)?;
    Ok(IterationGrid::from_counts(counts, rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape::escape_grid;
    use grid::{linspace, sample_grid};

    #[test]
    fn threaded_output_matches_sequential_output() {
        let xs = linspace(-2.0, 1.0, 17);
        let ys = linspace(-1.5, 1.5, 13);
        let grid = sample_grid(&xs, &ys);
        let sequential = escape_grid(&grid, 64);
        for &workers in &[1, 2, 3, 5, 64] {
            let threaded = escape_grid_threaded(&grid, 64, workers).unwrap();
            assert_eq!(threaded, sequential);
        }
    }

    #[test]
    fn more_workers_than_rows_is_permitted() {
        let xs = linspace(-2.0, 1.0, 8);
        let ys = linspace(-1.0, 1.0, 3);
        let grid = sample_grid(&xs, &ys);
        let threaded = escape_grid_threaded(&grid, 32, 16).unwrap();
        assert_eq!(threaded, escape_grid(&grid, 32));
    }

    #[test]
    fn zero_workers_is_refused() {
        let grid = sample_grid(&linspace(-1.0, 1.0, 4), &linspace(-1.0, 1.0, 4));
        assert_eq!(
            escape_grid_threaded(&grid, 32, 0),
            Err(EngineError::InvalidConfiguration(
                "worker count must be at least 1"
            ))
        );
    }
}
