//! Stable reference lookup via the "latest release" endpoint

use crate::remote::build_url;
use crate::remote::reference::{Reference, ResolvedReference};
use colored::Colorize;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Why a release lookup produced no tag; `stable_ref` collapses it to the default branch
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("release has an empty tag name")]
    EmptyTag,
    #[error("{0}")]
    Url(String),
}

#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Resolves the most recent published release of a repository
pub struct ReleaseResolver<'a> {
    client: &'a reqwest::Client,
    api_base: &'a Url,
    timeout: Duration,
}

impl<'a> ReleaseResolver<'a> {
    pub fn new(client: &'a reqwest::Client, api_base: &'a Url, timeout: Duration) -> Self {
        Self {
            client,
            api_base,
            timeout,
        }
    }

    /// `<api>/repos/<owner>/<repo>/releases/latest`
    pub fn latest_release_url(&self, owner: &str, repo: &str) -> Result<Url, LookupError> {
        build_url(self.api_base, &["repos", owner, repo, "releases", "latest"])
            .map_err(|e| LookupError::Url(e.to_string()))
    }

    /// Tag name of the latest release
    pub async fn latest_release(&self, owner: &str, repo: &str) -> Result<String, LookupError> {
        let url = self.latest_release_url(owner, repo)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let release: LatestRelease = response.json().await?;
        let tag = release.tag_name.trim();
        if tag.is_empty() {
            return Err(LookupError::EmptyTag);
        }
        Ok(tag.to_string())
    }

    /// Latest release tag, or `default_branch` when there is none
    pub async fn stable_ref(&self, owner: &str, repo: &str, default_branch: &str) -> String {
        match self.latest_release(owner, repo).await {
            Ok(tag) => {
                println!(
                    "{} {}/{} {}",
                    "Latest release of".dimmed(),
                    owner,
                    repo,
                    tag.green()
                );
                tag
            }
            Err(e) => {
                println!(
                    "{} {}/{} ({}), using {}",
                    "No release found for".dimmed(),
                    owner,
                    repo,
                    e,
                    default_branch.yellow()
                );
                default_branch.to_string()
            }
        }
    }

    /// Pin a reference: an explicit version is kept, a missing one is looked up
    pub async fn resolve(&self, reference: Reference, default_branch: &str) -> ResolvedReference {
        let version = match reference.version.as_deref() {
            Some(explicit) => explicit.to_string(),
            None => {
                self.stable_ref(&reference.owner, &reference.repository, default_branch)
                    .await
            }
        };
        reference.pin(version)
    }
}
