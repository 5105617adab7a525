//! Cross-track edition migration resolution.
//!
//! Unlike the in-track resolver, migration targets are reconciled through
//! release-date compatibility windows: a release of the other track is a
//! candidate only relative to when it shipped, not where its identifier
//! sorts. Legacy releases are the exception -- they route through the
//! current checkpoint unconditionally.

use serde::Serialize;

use ascent_catalog::{base_of, ReleaseRef, Track, VersionCatalog};

use crate::error::ResolveError;

/// Which track the caller wants to move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToCommercial,
    ToCommunity,
}

/// A resolved migration target plus its advisory messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationResult {
    pub targets: Vec<String>,
    pub messages: Vec<String>,
}

/// Resolves cross-track migration targets against a borrowed catalog.
pub struct EditionMigrationResolver<'a> {
    catalog: &'a VersionCatalog,
}

impl<'a> EditionMigrationResolver<'a> {
    pub fn new(catalog: &'a VersionCatalog) -> Self {
        EditionMigrationResolver { catalog }
    }

    pub fn resolve(
        &self,
        version: &str,
        direction: Direction,
    ) -> Result<MigrationResult, ResolveError> {
        let release = self
            .catalog
            .find(version)
            .ok_or_else(|| ResolveError::InvalidVersion(version.to_string()))?;
        match direction {
            Direction::ToCommercial => self.to_commercial(release),
            Direction::ToCommunity => self.to_community(release),
        }
    }

    /// Community (or legacy) release to the commercial-server track.
    ///
    /// Legacy releases target the current checkpoint's latest patch
    /// unconditionally. Dated releases target the checkpoint when they
    /// predate it, otherwise the latest commercial release dated strictly
    /// after them -- redirected to the checkpoint's latest patch when that
    /// candidate's base is itself a checkpoint.
    fn to_commercial(&self, release: ReleaseRef<'_>) -> Result<MigrationResult, ResolveError> {
        let (cp_base, _) = self
            .catalog
            .last_checkpoint()
            .ok_or(ResolveError::NoCompatibleTargetYet)?;
        let cp_patch = self
            .catalog
            .latest_patch_of(cp_base)
            .ok_or(ResolveError::NoCompatibleTargetYet)?;

        if release.track == Track::Legacy {
            let mut messages = vec![format!(
                "Legacy releases migrate through checkpoint {} unconditionally.",
                cp_base
            )];
            self.append_continue_advisory(cp_patch.id, Track::CommercialServer, &mut messages);
            return Ok(MigrationResult {
                targets: vec![cp_patch.id.to_string()],
                messages,
            });
        }

        let version_date = self
            .catalog
            .release_date(release.id)
            .ok_or_else(|| ResolveError::UnknownReleaseDate(release.id.to_string()))?;
        let checkpoint_date = self
            .catalog
            .release_date(cp_base)
            .ok_or_else(|| ResolveError::UnknownReleaseDate(cp_base.to_string()))?;

        let target = if version_date < checkpoint_date {
            cp_patch
        } else {
            // Latest by ordering among commercial releases dated strictly
            // later; track lists are ascending, so the last match wins.
            let candidate = self
                .catalog
                .releases(Track::CommercialServer)
                .filter(|r| {
                    self.catalog
                        .release_date(r.id)
                        .is_some_and(|d| d > version_date)
                })
                .last()
                .ok_or(ResolveError::NoCompatibleTargetYet)?;
            let candidate_base = base_of(candidate.id);
            if self.catalog.is_checkpoint(&candidate_base) {
                self.catalog
                    .latest_patch_of(&candidate_base)
                    .unwrap_or(candidate)
            } else {
                candidate
            }
        };

        let mut messages = Vec::new();
        self.append_continue_advisory(target.id, Track::CommercialServer, &mut messages);
        Ok(MigrationResult {
            targets: vec![target.id.to_string()],
            messages,
        })
    }

    /// Commercial release to the community-build track: the date-ordered
    /// nearest successor, not the latest available.
    fn to_community(&self, release: ReleaseRef<'_>) -> Result<MigrationResult, ResolveError> {
        let version_date = self
            .catalog
            .release_date(release.id)
            .ok_or_else(|| ResolveError::UnknownReleaseDate(release.id.to_string()))?;

        let target = self
            .catalog
            .releases(Track::CommunityBuild)
            .filter_map(|r| self.catalog.release_date(r.id).map(|d| (r, d)))
            .filter(|(_, d)| *d > version_date)
            .min_by_key(|(_, d)| *d)
            .map(|(r, _)| r)
            .ok_or(ResolveError::NoCompatibleTargetYet)?;

        let mut messages = Vec::new();
        if self.catalog.is_milestone(&base_of(target.id)) {
            messages.push(format!(
                "{} is a yearly milestone build; future upgrade paths will require passing \
                 through it.",
                target.id
            ));
        }
        self.append_continue_advisory(target.id, Track::CommunityBuild, &mut messages);
        Ok(MigrationResult {
            targets: vec![target.id.to_string()],
            messages,
        })
    }

    /// Unless the target is already its track's latest, direct the caller
    /// back to the in-track resolver after migrating.
    fn append_continue_advisory(&self, target: &str, track: Track, messages: &mut Vec<String>) {
        if self.catalog.latest_release(track).map(|r| r.id) != Some(target) {
            messages.push(format!(
                "After migrating to {}, run the in-track upgrade path to reach the latest \
                 release.",
                target
            ));
        }
    }
}
