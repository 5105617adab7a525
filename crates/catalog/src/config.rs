//! Catalog configuration deserialization.
//!
//! The catalog is described by a JSON document (the embedded dataset or an
//! external config) and deserialized once at startup into the immutable
//! `VersionCatalog`. Test doubles construct synthetic catalogs through the
//! same entry point.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use time::macros::format_description;
use time::Date;

use crate::catalog::{ReleaseEntry, VersionCatalog};
use crate::ordering::{base_of, ReleaseKey};

/// Errors surfaced while loading a catalog config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The config JSON does not have the expected shape.
    #[error("invalid catalog config: {0}")]
    InvalidConfig(String),
    /// An identifier in the named section does not parse as a release key.
    #[error("unparseable version '{version}' in '{section}'")]
    BadVersion { section: String, version: String },
    /// A release-date value is not an ISO `year-month-day` date.
    #[error("unparseable release date '{value}' for '{version}'")]
    BadDate { version: String, value: String },
}

#[derive(Debug, Deserialize)]
struct CatalogConfig {
    legacy: Vec<String>,
    community_build: Vec<String>,
    commercial: Vec<String>,
    checkpoints: Vec<String>,
    milestones: Vec<String>,
    rename_boundary: String,
    #[serde(default)]
    release_dates: BTreeMap<String, String>,
}

fn parse_track(section: &str, ids: &[String]) -> Result<Vec<ReleaseEntry>, CatalogError> {
    let mut entries = Vec::with_capacity(ids.len());
    for id in ids {
        let key = ReleaseKey::parse(id).ok_or_else(|| CatalogError::BadVersion {
            section: section.to_string(),
            version: id.clone(),
        })?;
        entries.push(ReleaseEntry {
            id: id.clone(),
            key,
            base: base_of(id),
        });
    }
    entries.sort_by_key(|e| e.key);
    Ok(entries)
}

fn parse_bases(section: &str, bases: &[String]) -> Result<Vec<(String, ReleaseKey)>, CatalogError> {
    let mut parsed = Vec::with_capacity(bases.len());
    for base in bases {
        let key = ReleaseKey::parse(base).ok_or_else(|| CatalogError::BadVersion {
            section: section.to_string(),
            version: base.clone(),
        })?;
        parsed.push((base.clone(), key));
    }
    parsed.sort_by_key(|(_, key)| *key);
    Ok(parsed)
}

impl VersionCatalog {
    /// Build a catalog from a JSON config value.
    ///
    /// Every identifier must parse as a release key and every date as an
    /// ISO `year-month-day` string; track lists, checkpoints, and
    /// milestones are sorted ascending under the key order here so the
    /// resolvers never sort again.
    pub fn from_config(value: &serde_json::Value) -> Result<VersionCatalog, CatalogError> {
        let config: CatalogConfig = serde_json::from_value(value.clone())
            .map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;

        let rename_boundary = ReleaseKey::parse(&config.rename_boundary)
            .ok_or_else(|| CatalogError::BadVersion {
                section: "rename_boundary".to_string(),
                version: config.rename_boundary.clone(),
            })?
            .base_key();

        let date_format = format_description!("[year]-[month]-[day]");
        let mut dates = BTreeMap::new();
        for (version, value) in &config.release_dates {
            let date = Date::parse(value, &date_format).map_err(|_| CatalogError::BadDate {
                version: version.clone(),
                value: value.clone(),
            })?;
            dates.insert(version.clone(), date);
        }

        Ok(VersionCatalog {
            legacy: parse_track("legacy", &config.legacy)?,
            community_build: parse_track("community_build", &config.community_build)?,
            commercial: parse_track("commercial", &config.commercial)?,
            checkpoints: parse_bases("checkpoints", &config.checkpoints)?,
            milestones: parse_bases("milestones", &config.milestones)?,
            dates,
            rename_boundary,
        })
    }

    /// Load the dataset shipped with the crate.
    ///
    /// Updating the dataset to reflect new releases is external data
    /// maintenance; the engine only reads it.
    pub fn builtin() -> Result<VersionCatalog, CatalogError> {
        let raw: serde_json::Value = serde_json::from_str(include_str!("../data/releases.json"))
            .map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;
        VersionCatalog::from_config(&raw)
    }
}
