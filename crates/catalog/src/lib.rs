//! Release catalog and version ordering for the ascent upgrade-path engine.
//!
//! The catalog is a read-only configuration object: per-track ordered
//! release lists, the checkpoint and milestone sets, and the release-date
//! index. It is loaded once (embedded dataset or external JSON config) and
//! borrowed by the resolvers; no operation here performs I/O or mutation.

pub mod catalog;
pub mod config;
pub mod ordering;

pub use catalog::{Edition, ReleaseRef, Track, VersionCatalog};
pub use config::CatalogError;
pub use ordering::{base_of, compare, normalize, ReleaseKey, YEAR_EPOCH_THRESHOLD};
