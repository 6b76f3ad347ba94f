//! Icon scraper for the chains the wallet frontend supports.
//!
//! Downloads each chain's icon from a prioritized list of public sources,
//! stores the first good hit under the output directory, and writes a
//! `manifest.json` the frontend uses to discover which icons exist.
//!
//! - [`registry`]: Static chain table (codes, names, source URLs, colors)
//! - [`fetch`]: Single-URL HTTP fetcher with content-type validation
//! - [`runner`]: Per-chain fallback loop and the top-level run
//! - [`manifest`]: Manifest model, built from disk state

pub mod fetch;
pub mod manifest;
pub mod registry;
pub mod runner;

pub use fetch::{FetchError, IconFetcher, DEFAULT_TIMEOUT};
pub use manifest::{Manifest, ManifestEntry, MANIFEST_FILENAME};
pub use registry::{ChainEntry, CHAINS};
pub use runner::{fetch_chain_icon, run, RunOptions, RunSummary, DEFAULT_OUTPUT_DIR};
