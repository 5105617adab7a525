//! Release identifier ordering across the two numbering epochs.
//!
//! Classic identifiers (`major.minor[.patch]`, e.g. `9.9.4`) and year-based
//! identifiers (`YY.M[.patch]` or `YYYY.M[.patch]`, e.g. `24.12` or
//! `2025.1.2`) are mapped into a single total order: every year-based key
//! compares strictly above every classic key, never by string comparison.

use std::cmp::Ordering;

/// Two-digit leading components at or above this value are year-based
/// identifiers (promoted to `2000 + yy`); below it they are classic majors.
pub const YEAR_EPOCH_THRESHOLD: u32 = 24;

/// Epoch-tagged comparable key for a release identifier.
///
/// The derived `Ord` places every `YearBased` key above every `Classic` key
/// (variant order), then compares component-wise within an epoch. Missing
/// trailing components parse as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseKey {
    Classic {
        major: u32,
        minor: u32,
        patch: u32,
    },
    YearBased {
        /// `year * 100 + month`, e.g. `202501` for January 2025.
        month_index: u32,
        patch: u32,
    },
}

impl ReleaseKey {
    /// Parse an identifier into a key. Returns `None` for anything that is
    /// not one to three dot-separated decimal components.
    pub fn parse(version: &str) -> Option<ReleaseKey> {
        let mut parts = version.split('.');
        let first: u32 = parts.next()?.parse().ok()?;
        let second: u32 = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        let third: u32 = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }

        if first >= 2000 {
            Some(ReleaseKey::YearBased {
                month_index: first * 100 + second,
                patch: third,
            })
        } else if first >= YEAR_EPOCH_THRESHOLD && first < 100 {
            Some(ReleaseKey::YearBased {
                month_index: (2000 + first) * 100 + second,
                patch: third,
            })
        } else {
            Some(ReleaseKey::Classic {
                major: first,
                minor: second,
                patch: third,
            })
        }
    }

    /// Key of the identifier's base (first two components, patch zeroed).
    pub fn base_key(&self) -> ReleaseKey {
        match *self {
            ReleaseKey::Classic { major, minor, .. } => ReleaseKey::Classic {
                major,
                minor,
                patch: 0,
            },
            ReleaseKey::YearBased { month_index, .. } => ReleaseKey::YearBased {
                month_index,
                patch: 0,
            },
        }
    }

}

/// Compare two identifiers under the epoch-aware total order.
///
/// `None` when either side does not parse; two releases are comparable iff
/// both normalize to a key.
pub fn compare(a: &str, b: &str) -> Option<Ordering> {
    Some(ReleaseKey::parse(a)?.cmp(&ReleaseKey::parse(b)?))
}

/// Expand a two-component identifier to three by appending a zero patch.
///
/// Membership checks only -- never use the result for display.
pub fn normalize(version: &str) -> String {
    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() == 2 {
        format!("{}.{}.0", parts[0], parts[1])
    } else {
        version.to_string()
    }
}

/// First two components of an identifier (`major.minor` or `yy.m`) -- the
/// unit of checkpoint identity.
pub fn base_of(version: &str) -> String {
    version.split('.').take(2).collect::<Vec<_>>().join(".")
}
