//! Grid generation: turns a rectangular region of the complex plane
//! and a sample resolution into axis vectors and the mesh of complex
//! points the evaluator iterates over.  The real axis runs along the
//! columns, the imaginary axis along the rows.

use num::Complex;

use error::EngineError;

/// A rectangular sub-area of the complex plane, described by its
/// bounds on each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    /// Lower bound on the real axis.
    pub min_re: f64,
    /// Upper bound on the real axis.
    pub max_re: f64,
    /// Lower bound on the imaginary axis.
    pub min_im: f64,
    /// Upper bound on the imaginary axis.
    pub max_im: f64,
}

impl Region {
    /// Constructor.  The minimum must lie strictly below the maximum
    /// on both axes; a degenerate or inverted region is refused here
    /// rather than left to produce a meaningless grid.
    pub fn new(min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Result<Region, EngineError> {
        if !(min_re < max_re) {
            return Err(EngineError::InvalidRegion { axis: "real" });
        }
        if !(min_im < max_im) {
            return Err(EngineError::InvalidRegion { axis: "imaginary" });
        }
        Ok(Region {
            min_re,
            max_re,
            min_im,
            max_im,
        })
    }
}

/// Sample counts along the real and imaginary axes, in that order.
/// Both must be at least 1; anything visible wants at least 2.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution(
    /// Samples along the real axis (columns).
    pub usize,
    /// Samples along the imaginary axis (rows).
    pub usize,
);

impl Resolution {
    /// Constructor.  Refuses a zero sample count on either axis.
    pub fn new(x_steps: usize, y_steps: usize) -> Result<Resolution, EngineError> {
        if x_steps == 0 || y_steps == 0 {
            return Err(EngineError::InvalidResolution);
        }
        Ok(Resolution(x_steps, y_steps))
    }
}

/// `steps` evenly spaced values from `min` to `max`, both endpoints
/// included.  The last element is pinned to exactly `max` so that
/// axis endpoints compare equal to the region bounds, not merely
/// close to them.
pub fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![min; steps];
    }
    let step = (max - min) / ((steps - 1) as f64);
    let mut values: Vec<f64> = (0..steps).map(|i| min + (i as f64) * step).collect();
    values[steps - 1] = max;
    values
}

/// The mesh product of two axis vectors: one complex sample
/// `xs[column] + i * ys[row]` per (row, column) pair, stored
/// row-major.  Rows follow the imaginary axis, columns the real axis.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    points: Vec<Complex<f64>>,
    rows: usize,
    cols: usize,
}

impl SampleGrid {
    /// Number of rows (imaginary-axis samples).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (real-axis samples).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One row of samples, all sharing the same imaginary part.
    pub fn row(&self, row: usize) -> &[Complex<f64>] {
        &self.points[row * self.cols..(row + 1) * self.cols]
    }

    /// The whole mesh as a flat row-major slice.
    pub fn points(&self) -> &[Complex<f64>] {
        &self.points
    }

    /// Total number of samples in the mesh.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when either axis has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build the sample mesh for the given axis vectors.
pub fn sample_grid(xs: &[f64], ys: &[f64]) -> SampleGrid {
    let points = iproduct!(ys.iter(), xs.iter())
        .map(|(&im, &re)| Complex::new(re, im))
        .collect();
    SampleGrid {
        points,
        rows: ys.len(),
        cols: xs.len(),
    }
}

/// A matrix of escape-time counts with the same shape as the sample
/// mesh it was computed from.  Every entry lies in
/// `[0, max_iterations]`.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationGrid {
    counts: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl IterationGrid {
    /// Assemble a result matrix from a flat row-major buffer.
    ///
    /// Panics if `counts.len() != rows * cols`.
    pub fn from_counts(counts: Vec<u32>, rows: usize, cols: usize) -> IterationGrid {
        assert!(counts.len() == rows * cols);
        IterationGrid { counts, rows, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One row of counts.
    pub fn row(&self, row: usize) -> &[u32] {
        &self.counts[row * self.cols..(row + 1) * self.cols]
    }

    /// The whole matrix as a flat row-major slice.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_fails_on_inverted_real_axis() {
        let region = Region::new(0.75, -2.25, -1.25, 1.25);
        assert_eq!(region, Err(EngineError::InvalidRegion { axis: "real" }));
    }

    #[test]
    fn region_fails_on_degenerate_imaginary_axis() {
        let region = Region::new(-2.25, 0.75, 1.25, 1.25);
        assert_eq!(
            region,
            Err(EngineError::InvalidRegion { axis: "imaginary" })
        );
    }

    #[test]
    fn region_passes_on_good_bounds() {
        assert!(Region::new(-2.25, 0.75, -1.25, 1.25).is_ok());
    }

    #[test]
    fn resolution_fails_on_zero_steps() {
        assert_eq!(Resolution::new(0, 5), Err(EngineError::InvalidResolution));
        assert_eq!(Resolution::new(5, 0), Err(EngineError::InvalidResolution));
    }

    #[test]
    fn linspace_hits_both_endpoints_exactly() {
        for &steps in &[2, 11, 100, 1024] {
            let values = linspace(-1.0, 1.0, steps);
            assert_eq!(values.len(), steps);
            assert_eq!(values[0], -1.0);
            assert_eq!(values[steps - 1], 1.0);
        }
    }

    #[test]
    fn linspace_is_evenly_spaced() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_with_a_single_step_is_the_minimum() {
        assert_eq!(linspace(0.25, 1.0, 1), vec![0.25]);
    }

    #[test]
    fn sample_grid_has_imaginary_rows_and_real_columns() {
        let xs = linspace(-2.0, 1.0, 3);
        let ys = linspace(-1.0, 1.0, 2);
        let grid = sample_grid(&xs, &ys);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.row(0)[0], Complex::new(-2.0, -1.0));
        assert_eq!(grid.row(1)[2], Complex::new(1.0, 1.0));
        assert_eq!(grid.row(0)[1], Complex::new(-0.5, -1.0));
    }
}
