//! Upgrade-path and edition-migration resolution -- consumes a read-only
//! `VersionCatalog`, produces release sequences with advisory messages.
//!
//! Every operation is a synchronous pure function of (catalog, input):
//! no I/O, no shared mutable state, no locking. The typed resolvers
//! (`UpgradePathResolver`, `EditionMigrationResolver`) return
//! `Result<_, ResolveError>`; the two top-level functions below flatten
//! those results into the shapes the presentation layer displays.

pub mod error;
pub mod migration;
pub mod upgrade;

pub use error::ResolveError;
pub use migration::{Direction, EditionMigrationResolver, MigrationResult};
pub use upgrade::{UpgradePath, UpgradePathResolver};

use ascent_catalog::{Edition, VersionCatalog};

/// Resolve the in-track upgrade path for a version and edition.
///
/// `None` signals an invalid or unknown version for that edition; the
/// presentation layer renders it as an input error.
pub fn resolve_upgrade_path(
    catalog: &VersionCatalog,
    version: &str,
    edition: Edition,
) -> Option<UpgradePath> {
    UpgradePathResolver::new(catalog).resolve(version, edition).ok()
}

/// Resolve a cross-track migration target for a version and direction.
///
/// Failures are flattened into the result shape: empty `targets` with the
/// failure's message (distinct wording per failure kind), never a panic.
pub fn resolve_migration(
    catalog: &VersionCatalog,
    version: &str,
    direction: Direction,
) -> MigrationResult {
    match EditionMigrationResolver::new(catalog).resolve(version, direction) {
        Ok(result) => result,
        Err(e) => MigrationResult {
            targets: Vec::new(),
            messages: vec![e.to_string()],
        },
    }
}
