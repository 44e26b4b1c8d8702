//! Remote data-file resolution
//!
//! This module provides:
//! - Shorthand reference parsing (`gh:owner/repo[@ref]/path`)
//! - Latest-release lookup with default-branch fallback
//! - Cache layout and the release-tag/branch refresh policy
//! - Raw file retrieval into the cache

pub mod cache;
pub mod fetcher;
pub mod reference;
pub mod release;

use crate::config::Settings;
use crate::error::Result;
use anyhow::Context;
use colored::Colorize;
use std::path::PathBuf;
use url::Url;

pub use cache::{CacheAction, DataCache, VersionKind};
pub use fetcher::DataFetcher;
pub use reference::{Reference, ResolvedReference, SHORTHAND_PREFIX};
pub use release::{LookupError, ReleaseResolver};

/// Build a URL by appending path segments, preserving the base path
pub fn build_url(base: &Url, segments: &[&str]) -> anyhow::Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `<raw base>/<owner>/<repo>/<version>/<file path>`
pub fn raw_file_url(raw_base: &Url, reference: &ResolvedReference) -> anyhow::Result<Url> {
    let mut segments = vec![
        reference.owner.as_str(),
        reference.repository.as_str(),
        reference.version.as_str(),
    ];
    segments.extend(reference.file_path.split('/'));
    build_url(raw_base, &segments)
}

/// Shared HTTP client carrying the wrapper's user agent
pub fn http_client(user_agent: &str) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Resolve a parsed reference to a local file, fetching it if needed
pub async fn fetch_reference(
    reference: Reference,
    settings: &Settings,
    client: &reqwest::Client,
) -> Result<PathBuf> {
    let resolver = ReleaseResolver::new(client, &settings.api_base, settings.release_timeout);
    let resolved = resolver.resolve(reference, &settings.default_branch).await;

    println!(
        "{} {}/{} ({}: {})",
        "Data source:".bold(),
        resolved.slug(),
        resolved.file_path,
        resolved.kind().label(),
        resolved.version
    );

    let cache = DataCache::new(&settings.cache_root);
    let dir = cache.ensure_repo_dir(&resolved)?;
    cache.prepare(&resolved)?;

    let url = raw_file_url(&settings.raw_base, &resolved)
        .with_context(|| format!("Failed to build download URL for {}", resolved))?;

    DataFetcher::new(client)
        .retrieve(&url, &dir, &resolved.cache_file_name())
        .await
}
