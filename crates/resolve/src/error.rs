use thiserror::Error;

/// Expected, recoverable resolution outcomes. The engine performs no I/O
/// and validates every input against the in-memory catalog, so there is no
/// unrecoverable internal error class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The version is not in the catalog for the requested edition.
    #[error("unknown version '{0}' for the requested edition")]
    InvalidVersion(String),
    /// A date-dependent migration check cannot proceed: no release date is
    /// recorded for this version.
    #[error("no release date is recorded for '{0}'")]
    UnknownReleaseDate(String),
    /// Valid input, but the current catalog holds no qualifying target.
    #[error("no compatible target has been released yet; wait for the next release")]
    NoCompatibleTargetYet,
}
