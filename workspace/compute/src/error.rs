use thiserror::Error;

/// Error types for the compute module.
///
/// The taxonomy is deliberately narrow: the core is computational, not
/// I/O-bound. An inverted date range, a schedule item whose product has
/// been removed from the catalog, a period with zero billable days and a
/// negative breakage count are all defined outcomes, not errors.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from date or period operations
    #[error("Date error: {0}")]
    Date(String),

    /// Error from production ledger operations
    #[error("Production error: {0}")]
    Production(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
