//! The immutable release catalog and its query surface.
//!
//! A `VersionCatalog` is loaded once at process start (either the embedded
//! dataset or an external JSON config) and answers every membership,
//! ordering, checkpoint, milestone, and release-date question the resolvers
//! ask. No mutation API exists; resolvers borrow the catalog.

use std::collections::BTreeMap;

use time::Date;

use crate::ordering::{base_of, normalize, ReleaseKey};

/// Distribution track a release belongs to. Every release belongs to
/// exactly one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Classic `major.minor[.patch]` history shared by the community and
    /// commercial products before the rename.
    Legacy,
    /// Year-based `YY.M` successor of the legacy community edition.
    CommunityBuild,
    /// Year-based `YYYY.M[.patch]` commercial server releases.
    CommercialServer,
}

/// Product edition requesting a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    Community,
    Developer,
    Enterprise,
    Datacenter,
}

impl Edition {
    /// Case-insensitive parse of the presentation-layer edition string.
    pub fn parse(value: &str) -> Option<Edition> {
        match value.to_ascii_lowercase().as_str() {
            "community" => Some(Edition::Community),
            "developer" => Some(Edition::Developer),
            "enterprise" => Some(Edition::Enterprise),
            "datacenter" => Some(Edition::Datacenter),
            _ => None,
        }
    }

    /// Tracks whose releases this edition may start from.
    pub fn eligible_tracks(self) -> [Track; 2] {
        match self {
            Edition::Community => [Track::Legacy, Track::CommunityBuild],
            _ => [Track::Legacy, Track::CommercialServer],
        }
    }
}

/// A release resolved against the catalog: its canonical identifier, owning
/// track, and comparable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseRef<'a> {
    pub track: Track,
    pub id: &'a str,
    pub key: ReleaseKey,
}

#[derive(Debug, Clone)]
pub(crate) struct ReleaseEntry {
    pub id: String,
    pub key: ReleaseKey,
    pub base: String,
}

/// Immutable aggregate of the per-track release lists, checkpoint set,
/// milestone set, and release-date index.
///
/// Track lists, checkpoints, and milestones are kept sorted ascending under
/// the epoch-aware key order at construction time.
#[derive(Debug, Clone)]
pub struct VersionCatalog {
    pub(crate) legacy: Vec<ReleaseEntry>,
    pub(crate) community_build: Vec<ReleaseEntry>,
    pub(crate) commercial: Vec<ReleaseEntry>,
    /// Checkpoint bases, ascending by key.
    pub(crate) checkpoints: Vec<(String, ReleaseKey)>,
    /// Milestone bases (community-build track), ascending by key.
    pub(crate) milestones: Vec<(String, ReleaseKey)>,
    pub(crate) dates: BTreeMap<String, Date>,
    /// Base key of the last legacy release shipped before the community
    /// product rename; community paths never route through checkpoints at
    /// or past this boundary.
    pub(crate) rename_boundary: ReleaseKey,
}

impl VersionCatalog {
    fn entries(&self, track: Track) -> &[ReleaseEntry] {
        match track {
            Track::Legacy => &self.legacy,
            Track::CommunityBuild => &self.community_build,
            Track::CommercialServer => &self.commercial,
        }
    }

    /// Resolve an identifier against the whole catalog.
    ///
    /// Membership is by exact identifier, by the normalized three-component
    /// form, or by the identifier's base -- mirroring how operators write
    /// versions with or without a trailing patch component.
    pub fn find(&self, version: &str) -> Option<ReleaseRef<'_>> {
        let key = ReleaseKey::parse(version)?;
        for track in [Track::Legacy, Track::CommunityBuild, Track::CommercialServer] {
            if let Some(entry) = self.find_in(track, version) {
                return Some(ReleaseRef {
                    track,
                    id: &entry.id,
                    key,
                });
            }
        }
        None
    }

    /// Resolve an identifier, restricted to the tracks the edition may
    /// start from.
    pub fn find_for_edition(&self, version: &str, edition: Edition) -> Option<ReleaseRef<'_>> {
        self.find(version)
            .filter(|r| edition.eligible_tracks().contains(&r.track))
    }

    fn find_in(&self, track: Track, version: &str) -> Option<&ReleaseEntry> {
        let entries = self.entries(track);
        let normalized = normalize(version);
        let base = base_of(version);
        entries
            .iter()
            .find(|e| e.id == version || e.id == normalized)
            .or_else(|| entries.iter().find(|e| e.id == base))
    }

    /// All releases of a track, ascending.
    pub fn releases(&self, track: Track) -> impl Iterator<Item = ReleaseRef<'_>> {
        self.entries(track).iter().map(move |e| ReleaseRef {
            track,
            id: &e.id,
            key: e.key,
        })
    }

    /// Earliest release of a track.
    pub fn first_release(&self, track: Track) -> Option<ReleaseRef<'_>> {
        self.releases(track).next()
    }

    /// Latest release of a track.
    pub fn latest_release(&self, track: Track) -> Option<ReleaseRef<'_>> {
        self.releases(track).last()
    }

    /// The latest release an edition can reach: the community-build latest
    /// for Community, the commercial-server latest otherwise, falling back
    /// to the legacy latest while a successor track is still empty.
    pub fn latest_for_edition(&self, edition: Edition) -> Option<ReleaseRef<'_>> {
        let successor = match edition {
            Edition::Community => Track::CommunityBuild,
            _ => Track::CommercialServer,
        };
        self.latest_release(successor)
            .or_else(|| self.latest_release(Track::Legacy))
    }

    /// Latest patch release of a base, searched across all tracks.
    pub fn latest_patch_of(&self, base: &str) -> Option<ReleaseRef<'_>> {
        for track in [Track::Legacy, Track::CommunityBuild, Track::CommercialServer] {
            // Lists are ascending, so the last matching entry is the
            // latest patch. Bases are track-unique by numbering scheme.
            if let Some(entry) = self
                .entries(track)
                .iter()
                .rev()
                .find(|e| e.base == base)
            {
                return Some(ReleaseRef {
                    track,
                    id: &entry.id,
                    key: entry.key,
                });
            }
        }
        None
    }

    /// Checkpoint bases with a base key strictly above `after`, ascending.
    pub fn checkpoints_after(&self, after: ReleaseKey) -> Vec<(&str, ReleaseKey)> {
        let after = after.base_key();
        self.checkpoints
            .iter()
            .filter(|(_, key)| *key > after)
            .map(|(base, key)| (base.as_str(), *key))
            .collect()
    }

    /// The newest checkpoint base, if any checkpoint is defined.
    pub fn last_checkpoint(&self) -> Option<(&str, ReleaseKey)> {
        self.checkpoints
            .last()
            .map(|(base, key)| (base.as_str(), *key))
    }

    /// True if `base` is a checkpoint base.
    pub fn is_checkpoint(&self, base: &str) -> bool {
        self.checkpoints.iter().any(|(b, _)| b == base)
    }

    /// Milestone bases whose key lies strictly between `lo` and `hi`,
    /// ascending.
    pub fn milestones_between(&self, lo: ReleaseKey, hi: ReleaseKey) -> Vec<&str> {
        let lo = lo.base_key();
        let hi = hi.base_key();
        self.milestones
            .iter()
            .filter(|(_, key)| *key > lo && *key < hi)
            .map(|(base, _)| base.as_str())
            .collect()
    }

    /// True if `base` is a calendar-milestone base.
    pub fn is_milestone(&self, base: &str) -> bool {
        self.milestones.iter().any(|(b, _)| b == base)
    }

    /// Release date of an identifier. Absence is a reportable condition,
    /// not "incompatible".
    pub fn release_date(&self, version: &str) -> Option<Date> {
        self.dates.get(version).copied()
    }

    /// Base key of the community-product rename boundary.
    pub fn rename_boundary(&self) -> ReleaseKey {
        self.rename_boundary
    }
}
