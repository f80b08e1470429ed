use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Every fallible constructor and setter returns this so core code never
/// needs `.unwrap()`/`.expect()`. The two per-tick passes themselves are
/// infallible: they are unconditional numeric transformations over a
/// fixed-size, never-empty collection, and the one numeric degeneracy
/// (normalizing a zero-length delta) is defined as a no-op rather than a
/// fault.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
