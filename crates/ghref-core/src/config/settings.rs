use crate::error::{Error, Result};
use crate::profile::ToolProfile;
use directories::BaseDirs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Upper bound on the release metadata request
pub const RELEASE_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings threaded through resolution, fetching and forwarding
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root under which `<owner>/<repo>/` cache directories are created
    pub cache_root: PathBuf,
    /// Release metadata API base
    pub api_base: Url,
    /// Raw file host base
    pub raw_base: Url,
    /// Program invoked with the assembled arguments
    pub program: String,
    /// Branch substituted when no release can be found
    pub default_branch: String,
    pub release_timeout: Duration,
}

impl Settings {
    /// Resolve settings from a profile and the process environment
    pub fn from_profile<P: ToolProfile>(profile: &P) -> Result<Self> {
        Self::from_lookup(profile, |key| std::env::var(key).ok())
    }

    /// Resolve settings from a profile and an arbitrary variable lookup
    pub fn from_lookup<P, F>(profile: &P, lookup: F) -> Result<Self>
    where
        P: ToolProfile,
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cache_root = match var(profile.cache_dir_env()) {
            Some(dir) => PathBuf::from(dir),
            None => default_cache_root()?,
        };

        let api_base = parse_base(
            profile.api_url_env(),
            var(profile.api_url_env()).as_deref(),
            profile.api_base_url(),
        )?;
        let raw_base = parse_base(
            profile.raw_url_env(),
            var(profile.raw_url_env()).as_deref(),
            profile.raw_base_url(),
        )?;

        Ok(Self {
            cache_root,
            api_base,
            raw_base,
            program: var(profile.program_env()).unwrap_or_else(|| profile.program().to_string()),
            default_branch: profile.default_branch().to_string(),
            release_timeout: RELEASE_LOOKUP_TIMEOUT,
        })
    }
}

/// `~/.cache`, shared with other tools that keep per-repository caches there
fn default_cache_root() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".cache"))
        .ok_or_else(|| Error::Config("could not determine the home directory".to_string()))
}

fn parse_base(env: &str, value: Option<&str>, default: &str) -> Result<Url> {
    let raw = value.unwrap_or(default);
    let url = Url::parse(raw).map_err(|e| Error::Config(format!("invalid URL in {}: {} ({})", env, raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("{} is not a base URL: {}", env, raw)));
    }
    Ok(url)
}
