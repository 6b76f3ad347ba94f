//! Fetch loop: one chain at a time, one URL at a time.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::fetch::{FetchError, IconFetcher, DEFAULT_TIMEOUT};
use crate::manifest::Manifest;
use crate::registry::{ChainEntry, CHAINS};

/// Default output directory, relative to the project root. The frontend
/// serves this directory at `/icons/`.
pub const DEFAULT_OUTPUT_DIR: &str = "public/icons";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// What a run accomplished.
#[derive(Debug)]
pub struct RunSummary {
    /// Chains whose icon was downloaded this run.
    pub fetched: usize,
    /// Total chains in the registry.
    pub total: usize,
    pub manifest_path: PathBuf,
}

/// Try a chain's candidate URLs in order; first success wins.
///
/// Any pre-existing file is overwritten, never reused. Returns `false` only
/// if every candidate failed, in which case no file was written this run.
pub async fn fetch_chain_icon(
    fetcher: &IconFetcher,
    chain: &ChainEntry,
    options: &RunOptions,
) -> bool {
    let dest = chain.icon_path(&options.output_dir);
    tracing::info!("fetching {} ({}) icon", chain.name, chain.code);

    for (i, url) in chain.urls.iter().enumerate() {
        tracing::debug!("trying source {}/{}: {}", i + 1, chain.urls.len(), url);
        match fetcher.fetch(url, &dest).await {
            Ok(bytes) => {
                tracing::info!("saved {} ({} bytes)", dest.display(), bytes);
                return true;
            }
            Err(err) => {
                log_fetch_failure(url, &err);
            }
        }
    }

    tracing::warn!("all sources failed for {}, skipping", chain.code);
    false
}

fn log_fetch_failure(url: &str, err: &FetchError) {
    match err {
        FetchError::NotAnImage { content_type } => {
            tracing::warn!("{} is not an image (content-type: {})", url, content_type);
        }
        other => {
            tracing::warn!("{} failed: {}", url, other);
        }
    }
}

/// Fetch every registry chain, then rebuild the manifest from disk state.
///
/// Per-chain failures are tallied, not fatal; the manifest is written even
/// when nothing was fetched. Only creating the output directory or writing
/// the manifest can abort the run.
pub async fn run(options: RunOptions) -> Result<RunSummary> {
    std::fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            options.output_dir.display()
        )
    })?;

    let fetcher = IconFetcher::new(options.timeout)?;

    let mut fetched = 0;
    for chain in CHAINS {
        if fetch_chain_icon(&fetcher, chain, &options).await {
            fetched += 1;
        }
    }

    let manifest = Manifest::from_disk(&options.output_dir);
    let manifest_path = manifest.write(&options.output_dir)?;
    tracing::info!("manifest saved: {}", manifest_path.display());

    Ok(RunSummary {
        fetched,
        total: CHAINS.len(),
        manifest_path,
    })
}
