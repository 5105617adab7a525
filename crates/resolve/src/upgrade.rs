//! In-track upgrade path resolution.
//!
//! Computes the ordered release sequence from a starting release to the
//! current latest reachable by the requested edition, inserting every
//! non-skippable checkpoint (and, within the community-build track, every
//! pending milestone) along the way. Paths are pure functions of the
//! catalog: same input, same output.

use std::collections::HashSet;

use serde::Serialize;

use ascent_catalog::{base_of, Edition, ReleaseRef, Track, VersionCatalog};

use crate::error::ResolveError;

/// A resolved upgrade path plus its advisory messages.
///
/// Advisories annotate an otherwise-successful result (scheme-rename
/// notices, recommended-vs-optional hops, milestone warnings); they are
/// never failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradePath {
    pub path: Vec<String>,
    pub messages: Vec<String>,
}

/// Resolves in-track upgrade paths against a borrowed catalog.
pub struct UpgradePathResolver<'a> {
    catalog: &'a VersionCatalog,
}

impl<'a> UpgradePathResolver<'a> {
    pub fn new(catalog: &'a VersionCatalog) -> Self {
        UpgradePathResolver { catalog }
    }

    /// Resolve the path from `start` for `edition`.
    ///
    /// The returned path is non-decreasing under the release-key order,
    /// begins with `start` as written by the caller, ends at the latest
    /// release reachable by the edition, contains no duplicates, and never
    /// skips a checkpoint lying strictly between its endpoints.
    pub fn resolve(&self, start: &str, edition: Edition) -> Result<UpgradePath, ResolveError> {
        let release = self
            .catalog
            .find_for_edition(start, edition)
            .ok_or_else(|| ResolveError::InvalidVersion(start.to_string()))?;
        let latest = self
            .catalog
            .latest_for_edition(edition)
            .ok_or_else(|| ResolveError::InvalidVersion(start.to_string()))?;

        let mut path = vec![start.to_string()];
        let mut messages = Vec::new();

        if release.id == latest.id {
            messages.push("Already on the most recent release; no upgrade required.".to_string());
            return Ok(UpgradePath { path, messages });
        }

        match (edition, release.track) {
            (Edition::Community, Track::Legacy) => {
                self.community_from_legacy(release, latest, &mut path, &mut messages);
            }
            (Edition::Community, _) => {
                self.walk_community(release, latest, &mut path, &mut messages);
            }
            _ => {
                self.commercial_route(release, latest, &mut path, &mut messages);
            }
        }

        dedup_preserving_order(&mut path);
        Ok(UpgradePath { path, messages })
    }

    /// Community edition, legacy start: checkpoints up to (strictly before)
    /// the rename boundary, then the scheme-rename notice, then the first
    /// community-build release and the milestone walk to the latest.
    fn community_from_legacy(
        &self,
        release: ReleaseRef<'_>,
        latest: ReleaseRef<'_>,
        path: &mut Vec<String>,
        messages: &mut Vec<String>,
    ) {
        let boundary = self.catalog.rename_boundary();
        for (base, key) in self.catalog.checkpoints_after(release.key) {
            if key >= boundary {
                continue;
            }
            if let Some(patch) = self.catalog.latest_patch_of(base) {
                path.push(patch.id.to_string());
            }
        }

        match self.catalog.first_release(Track::CommunityBuild) {
            Some(first) => {
                messages.push(
                    "Community Edition has been renamed to Community Build and now uses a \
                     year-based versioning scheme."
                        .to_string(),
                );
                path.push(first.id.to_string());
                if first.id != latest.id {
                    self.walk_community(first, latest, path, messages);
                }
            }
            // Successor track not populated yet: the legacy latest is the
            // applicable target.
            None => path.push(latest.id.to_string()),
        }
    }

    /// Walk within the community-build track from `from` to `latest`,
    /// inserting the latest patch of every milestone strictly between.
    fn walk_community(
        &self,
        from: ReleaseRef<'_>,
        latest: ReleaseRef<'_>,
        path: &mut Vec<String>,
        messages: &mut Vec<String>,
    ) {
        for base in self.catalog.milestones_between(from.key, latest.key) {
            if let Some(patch) = self.catalog.latest_patch_of(base) {
                path.push(patch.id.to_string());
                messages.push(format!(
                    "{} is a yearly milestone build; future upgrade paths will require \
                     passing through it.",
                    patch.id
                ));
            }
        }
        path.push(latest.id.to_string());
    }

    /// Non-community editions: checkpoint chain to the overall latest,
    /// with the direct route past the last checkpoint and the
    /// current-checkpoint dual-hop rule.
    fn commercial_route(
        &self,
        release: ReleaseRef<'_>,
        latest: ReleaseRef<'_>,
        path: &mut Vec<String>,
        messages: &mut Vec<String>,
    ) {
        let Some((last_cp, last_cp_key)) = self.catalog.last_checkpoint() else {
            path.push(latest.id.to_string());
            return;
        };

        if release.key.base_key() > last_cp_key.base_key() {
            path.push(latest.id.to_string());
            messages.push(format!(
                "No checkpoint releases remain between {} and {}; you can upgrade directly.",
                release.id, latest.id
            ));
            return;
        }

        // Starting on the current checkpoint itself leaves two valid next
        // hops: its own latest patch (recommended) and the overall latest
        // (optional).
        if base_of(release.id) == last_cp {
            if let Some(cp_patch) = self.catalog.latest_patch_of(last_cp) {
                if cp_patch.id != release.id {
                    path.push(cp_patch.id.to_string());
                    messages.push(format!(
                        "Upgrading to {} (the latest patch of checkpoint {}) is recommended.",
                        cp_patch.id, last_cp
                    ));
                }
            }
            path.push(latest.id.to_string());
            messages.push(format!("Continuing to {} is optional.", latest.id));
            return;
        }

        for (base, _) in self.catalog.checkpoints_after(release.key) {
            if let Some(patch) = self.catalog.latest_patch_of(base) {
                path.push(patch.id.to_string());
            }
        }
        path.push(latest.id.to_string());
        messages.push(format!(
            "The final step to {} is optional; the last checkpoint patch is a supported \
             resting point.",
            latest.id
        ));
    }
}

/// Remove duplicate identifiers, keeping the first occurrence of each.
fn dedup_preserving_order(path: &mut Vec<String>) {
    let mut seen = HashSet::new();
    path.retain(|v| seen.insert(v.clone()));
}
