//! Raw file retrieval into the local cache
//!
//! Retrieval is a no-op when the destination already exists, so callers that
//! want fresh content must remove the old file first (see `DataCache::prepare`).
//! Content is not verified.

use crate::error::{Error, Result};
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

/// Downloads single files over HTTP
pub struct DataFetcher<'a> {
    client: &'a reqwest::Client,
}

impl<'a> DataFetcher<'a> {
    pub fn new(client: &'a reqwest::Client) -> Self {
        Self { client }
    }

    /// Retrieve `url` into `dir/file_name` and return the local path
    ///
    /// `dir` is created if missing, so the fetcher works without a `DataCache`.
    pub async fn retrieve(&self, url: &Url, dir: &Path, file_name: &str) -> Result<PathBuf> {
        let dest = dir.join(file_name);
        if dest.is_file() {
            return Ok(dest);
        }

        std::fs::create_dir_all(dir).map_err(|e| Error::fetch(url, e))?;

        println!("{} {}", "Downloading".cyan(), url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::fetch(url, e))?;

        if !response.status().is_success() {
            return Err(Error::fetch(
                url,
                anyhow::anyhow!("HTTP {}", response.status()),
            ));
        }

        let bytes = response.bytes().await.map_err(|e| Error::fetch(url, e))?;

        // Write next to the destination and rename, so an interrupted download leaves nothing behind
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::fetch(url, e))?;
        tmp.write_all(&bytes).map_err(|e| Error::fetch(url, e))?;
        tmp.persist(&dest).map_err(|e| Error::fetch(url, e.error))?;

        println!(
            "{} {} ({} bytes)",
            "Saved".green(),
            dest.display(),
            bytes.len()
        );
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client, StubServer};

    #[tokio::test]
    async fn test_downloads_missing_file() {
        let server = StubServer::start(&[("/acme/widgets/master/config.yaml", 200, "name: widgets\n")]);
        let temp = tempfile::tempdir().unwrap();
        let client = client();
        let url = server.base().join("acme/widgets/master/config.yaml").unwrap();

        let path = DataFetcher::new(&client)
            .retrieve(&url, temp.path(), "master_config.yaml")
            .await
            .unwrap();

        assert_eq!(path, temp.path().join("master_config.yaml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "name: widgets\n");
    }

    #[tokio::test]
    async fn test_creates_missing_destination_dir() {
        let server = StubServer::start(&[("/acme/widgets/dev/a/b.yaml", 200, "nested")]);
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("not/yet/there");
        let client = client();
        let url = server.base().join("acme/widgets/dev/a/b.yaml").unwrap();

        let path = DataFetcher::new(&client)
            .retrieve(&url, &dir, "dev_a_b.yaml")
            .await
            .unwrap();

        assert_eq!(path, dir.join("dev_a_b.yaml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "nested");
    }

    #[tokio::test]
    async fn test_existing_file_is_not_downloaded_again() {
        let server = StubServer::start(&[("/acme/widgets/v1.0.0/config.yaml", 200, "new")]);
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("v1.0.0_config.yaml"), "old").unwrap();
        let client = client();
        let url = server.base().join("acme/widgets/v1.0.0/config.yaml").unwrap();

        let path = DataFetcher::new(&client)
            .retrieve(&url, temp.path(), "v1.0.0_config.yaml")
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_http_error_is_fetch_error() {
        let server = StubServer::start(&[]);
        let temp = tempfile::tempdir().unwrap();
        let client = client();
        let url = server.base().join("acme/widgets/master/missing.yaml").unwrap();

        let err = DataFetcher::new(&client)
            .retrieve(&url, temp.path(), "master_missing.yaml")
            .await
            .unwrap_err();

        match err {
            Error::Fetch { url: failed, source } => {
                assert!(failed.ends_with("/acme/widgets/master/missing.yaml"));
                assert!(source.to_string().contains("404"));
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
        assert!(!temp.path().join("master_missing.yaml").exists());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
