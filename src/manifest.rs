//! Icon manifest for the frontend.
//!
//! The manifest reflects what is actually on disk, not what this run
//! managed to download: an icon left over from a previous run still counts,
//! and a chain whose sources all failed is listed anyway if an old file
//! exists. `manifest.json` is rewritten from scratch every run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::registry::{ChainEntry, CHAINS};

pub const MANIFEST_FILENAME: &str = "manifest.json";

/// One available icon, keyed by chain code in [`Manifest::chains`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    /// Web path the frontend loads the icon from (e.g. `/icons/eth.png`).
    pub icon: String,
    /// Brand color as a `#rrggbb` hex string.
    pub color: String,
}

/// Index of available icons, served alongside them as `manifest.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub chains: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Scan `output_dir` and list every registry chain whose icon file
    /// exists. Chains with no file are omitted.
    pub fn from_disk(output_dir: &Path) -> Self {
        Self::from_registry(CHAINS, output_dir)
    }

    /// Same scan against an explicit chain table.
    pub fn from_registry(registry: &[ChainEntry], output_dir: &Path) -> Self {
        let mut chains = BTreeMap::new();
        for chain in registry {
            if chain.icon_path(output_dir).exists() {
                chains.insert(
                    chain.code.to_string(),
                    ManifestEntry {
                        name: chain.name.to_string(),
                        icon: chain.icon_web_path(),
                        color: chain.color.to_string(),
                    },
                );
            }
        }
        Self { chains }
    }

    /// Write the manifest as indented JSON, replacing any previous file.
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(MANIFEST_FILENAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
