//! The calculation facade: the one entry point the rendering layer
//! calls.  A caller constructs an `Engine` with a resolution and a
//! configuration, then hands it a region per calculation.  The engine
//! builds the axes and mesh, runs the sequential or threaded
//! evaluator, and keeps the axes of the most recent calculation
//! around as the coordinate labels for its result.

use dispatch::escape_grid_threaded;
use error::EngineError;
use escape::escape_grid;
use grid::{linspace, sample_grid, IterationGrid, Region, Resolution};

/// Calculation parameters.  A plain immutable value: edit a copy and
/// build a new engine when the caller wants different settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Cap on the escape-time count per point.
    pub max_iterations: u32,
    /// Number of threads used when `parallel` is set.
    pub workers: usize,
    /// Whether to dispatch rows across workers or evaluate the whole
    /// mesh on the calling thread.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_iterations: 128,
            workers: 4,
            parallel: true,
        }
    }
}

/// The engine itself.  Holds the resolution and configuration plus
/// the axis vectors of the most recent calculation.
pub struct Engine {
    config: Config,
    resolution: Resolution,
    latest_xs: Vec<f64>,
    latest_ys: Vec<f64>,
}

impl Engine {
    /// Constructor.  Validates the resolution and configuration once,
    /// so `calculate` only has regions left to refuse.
    pub fn new(resolution: Resolution, config: Config) -> Result<Engine, EngineError> {
        if resolution.0 == 0 || resolution.1 == 0 {
            return Err(EngineError::InvalidResolution);
        }
        if config.max_iterations == 0 {
            return Err(EngineError::InvalidConfiguration(
                "maximum iteration count must be at least 1",
            ));
        }
        if config.workers == 0 {
            return Err(EngineError::InvalidConfiguration(
                "worker count must be at least 1",
            ));
        }
        Ok(Engine {
            config,
            resolution,
            latest_xs: Vec::new(),
            latest_ys: Vec::new(),
        })
    }

    /// Calculate the escape-time matrix for `region` at the stored
    /// resolution.  Replaces the cached axis vectors with the ones
    /// used for this result.  Identical inputs give identical output,
    /// whether or not the parallel path is taken.
    pub fn calculate(&mut self, region: Region) -> Result<IterationGrid, EngineError> {
        let xs = linspace(region.min_re, region.max_re, self.resolution.0);
        let ys = linspace(region.min_im, region.max_im, self.resolution.1);
        let grid = sample_grid(&xs, &ys);
        self.latest_xs = xs;
        self.latest_ys = ys;
        if self.config.parallel {
            escape_grid_threaded(&grid, self.config.max_iterations, self.config.workers)
        } else {
            Ok(escape_grid(&grid, self.config.max_iterations))
        }
    }

    /// Real-axis samples of the most recent calculation; empty before
    /// the first one.
    pub fn latest_xs(&self) -> &[f64] {
        &self.latest_xs
    }

    /// Imaginary-axis samples of the most recent calculation.
    pub fn latest_ys(&self) -> &[f64] {
        &self.latest_ys
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The resolution this engine samples at.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}
