//! End-to-end properties of the resolvers against the embedded catalog.
//!
//! Sweeps every catalog release through every edition and checks the
//! path-shape guarantees, then pins the named scenarios: the community
//! track rename, terminal already-current results, and the legacy
//! migration rule.

use std::cmp::Ordering;
use std::collections::HashSet;

use ascent_catalog::{base_of, compare, Edition, ReleaseKey, Track, VersionCatalog};
use ascent_resolve::{
    resolve_migration, resolve_upgrade_path, Direction, UpgradePath, UpgradePathResolver,
};

const ALL_EDITIONS: [Edition; 4] = [
    Edition::Community,
    Edition::Developer,
    Edition::Enterprise,
    Edition::Datacenter,
];

fn catalog() -> VersionCatalog {
    VersionCatalog::builtin().expect("embedded dataset is valid")
}

fn resolve(catalog: &VersionCatalog, start: &str, edition: Edition) -> UpgradePath {
    UpgradePathResolver::new(catalog)
        .resolve(start, edition)
        .unwrap_or_else(|e| panic!("{} should resolve for {:?}: {}", start, edition, e))
}

fn assert_non_decreasing(path: &[String]) {
    for pair in path.windows(2) {
        let ord = compare(&pair[0], &pair[1]).expect("path identifiers are comparable");
        assert_ne!(
            ord,
            Ordering::Greater,
            "path out of order: {} before {}",
            pair[0],
            pair[1]
        );
    }
}

/// Checkpoints the edition's paths are required to pass through: all of
/// them for commercial editions, only legacy-track checkpoints below the
/// rename boundary for community.
fn required_checkpoints(catalog: &VersionCatalog, edition: Edition) -> Vec<(String, ReleaseKey)> {
    catalog
        .checkpoints_after(ReleaseKey::Classic {
            major: 0,
            minor: 0,
            patch: 0,
        })
        .into_iter()
        .filter(|(_, key)| edition != Edition::Community || *key < catalog.rename_boundary())
        .map(|(base, key)| (base.to_string(), key))
        .collect()
}

// ──────────────────────────────────────────────
// Path-shape guarantees
// ──────────────────────────────────────────────

#[test]
fn every_path_is_sorted_deduplicated_and_anchored() {
    let catalog = catalog();
    for edition in ALL_EDITIONS {
        let latest = catalog
            .latest_for_edition(edition)
            .expect("catalog has a latest release")
            .id
            .to_string();
        for track in edition.eligible_tracks() {
            let starts: Vec<String> =
                catalog.releases(track).map(|r| r.id.to_string()).collect();
            for start in starts {
                let result = resolve(&catalog, &start, edition);

                assert_eq!(result.path.first(), Some(&start));
                assert_eq!(result.path.last(), Some(&latest));
                assert_non_decreasing(&result.path);

                let mut seen = HashSet::new();
                for v in &result.path {
                    assert!(seen.insert(v.clone()), "duplicate {} in {:?}", v, result.path);
                }
            }
        }
    }
}

#[test]
fn no_required_checkpoint_is_ever_skipped() {
    let catalog = catalog();
    for edition in ALL_EDITIONS {
        let checkpoints = required_checkpoints(&catalog, edition);
        for track in edition.eligible_tracks() {
            let starts: Vec<String> =
                catalog.releases(track).map(|r| r.id.to_string()).collect();
            for start in starts {
                let result = resolve(&catalog, &start, edition);
                let start_key = ReleaseKey::parse(&start).expect("catalog identifiers parse");
                let end_key = ReleaseKey::parse(result.path.last().expect("non-empty path"))
                    .expect("catalog identifiers parse");

                for (cp_base, cp_key) in &checkpoints {
                    if *cp_key > start_key.base_key() && *cp_key < end_key.base_key() {
                        assert!(
                            result.path.iter().any(|v| base_of(v) == *cp_base),
                            "{:?} path from {} skips checkpoint {}: {:?}",
                            edition,
                            start,
                            cp_base,
                            result.path
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn resolving_twice_yields_identical_output() {
    let catalog = catalog();
    for edition in ALL_EDITIONS {
        let first = resolve(&catalog, "9.2", edition);
        let second = resolve(&catalog, "9.2", edition);
        assert_eq!(first, second);
    }
    let first = resolve_migration(&catalog, "25.2", Direction::ToCommercial);
    let second = resolve_migration(&catalog, "25.2", Direction::ToCommercial);
    assert_eq!(first, second);
}

// ──────────────────────────────────────────────
// Terminal success
// ──────────────────────────────────────────────

#[test]
fn latest_release_resolves_to_a_single_element_path() {
    let catalog = catalog();
    for edition in ALL_EDITIONS {
        let latest = catalog.latest_for_edition(edition).unwrap().id.to_string();
        let result = resolve(&catalog, &latest, edition);
        assert_eq!(result.path, vec![latest]);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].contains("Already"));
    }
}

// ──────────────────────────────────────────────
// Named scenarios
// ──────────────────────────────────────────────

#[test]
fn community_9_9_crosses_the_rename_into_the_build_track() {
    let catalog = catalog();
    let result = resolve(&catalog, "9.9", Edition::Community);

    assert_eq!(result.path, vec!["9.9", "24.12", "25.1", "25.7"]);
    assert!(
        result.messages.iter().any(|m| m.contains("renamed")),
        "rename advisory missing: {:?}",
        result.messages
    );
}

#[test]
fn community_8_2_passes_every_remaining_legacy_checkpoint() {
    let catalog = catalog();
    let result = resolve(&catalog, "8.2", Edition::Community);
    assert_eq!(
        result.path,
        vec!["8.2", "8.9.10", "9.9.8", "24.12", "25.1", "25.7"]
    );
}

#[test]
fn enterprise_6_7_chains_every_checkpoint_to_the_commercial_latest() {
    let catalog = catalog();
    let result = resolve(&catalog, "6.7", Edition::Enterprise);
    assert_eq!(
        result.path,
        vec!["6.7", "7.9.6", "8.9.10", "9.9.8", "2025.1.2", "2025.4"]
    );
}

#[test]
fn presentation_entry_points_follow_the_external_contract() {
    let catalog = catalog();

    assert!(resolve_upgrade_path(&catalog, "not-a-version", Edition::Community).is_none());

    let path = resolve_upgrade_path(&catalog, "10.2", Edition::Datacenter)
        .expect("10.2 is commercial-eligible");
    assert_eq!(path.path, vec!["10.2", "2025.1.2", "2025.4"]);
}

// ──────────────────────────────────────────────
// Migration scenarios
// ──────────────────────────────────────────────

#[test]
fn every_legacy_release_migrates_through_the_checkpoint_patch() {
    let catalog = catalog();
    let legacy: Vec<String> = catalog
        .releases(Track::Legacy)
        .map(|r| r.id.to_string())
        .collect();
    for version in legacy {
        let result = resolve_migration(&catalog, &version, Direction::ToCommercial);
        assert_eq!(
            result.targets,
            vec!["2025.1.2".to_string()],
            "legacy {} should route through the checkpoint",
            version
        );
    }
}

#[test]
fn newest_community_build_has_no_commercial_target_yet() {
    let catalog = catalog();
    let result = resolve_migration(&catalog, "25.7", Direction::ToCommercial);
    assert!(result.targets.is_empty());
    assert!(result.messages.iter().any(|m| m.contains("wait")));
}

#[test]
fn commercial_release_finds_its_date_nearest_community_successor() {
    let catalog = catalog();
    let result = resolve_migration(&catalog, "2025.2", Direction::ToCommunity);
    // 2025.2 shipped 2025-03-26; the nearest later community build is
    // 25.4, not the track latest.
    assert_eq!(result.targets, vec!["25.4"]);
    assert!(result
        .messages
        .iter()
        .any(|m| m.contains("in-track upgrade path")));
}
