//! Error taxonomy for the calculation engine.  Nothing here is
//! retryable: a failed calculation is reported once and the caller
//! decides whether to try again with adjusted parameters.

/// Every way a calculation request can be refused or fail.
#[derive(Debug, Fail, PartialEq)]
pub enum EngineError {
    /// The region's minimum met or exceeded its maximum on an axis.
    #[fail(display = "invalid region: min >= max on the {} axis", axis)]
    InvalidRegion {
        /// Which axis was degenerate or inverted.
        axis: &'static str,
    },
    /// A resolution of zero samples on either axis.
    #[fail(display = "resolution must be at least 1 sample on each axis")]
    InvalidResolution,
    /// A configuration value outside its documented range.
    #[fail(display = "invalid configuration: {}", _0)]
    InvalidConfiguration(&'static str),
    /// A worker thread died mid-calculation.  A partially filled
    /// matrix is not a valid result, so the whole call fails.
    #[fail(display = "a worker thread failed during calculation")]
    WorkerFailure,
}
