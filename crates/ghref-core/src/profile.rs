//! Tool profile trait for wrapper binaries
//!
//! This trait defines the interface each wrapper (e.g. `copier-gh`) implements
//! to describe the scaffolding tool it forwards to and where data files live.

/// Configuration trait for a wrapped scaffolding tool
///
/// Each wrapper implements this trait to define:
/// - Wrapper identity (name, display name)
/// - The external program and its data-file option
/// - The shorthand option recognized by the wrapper
/// - Remote host endpoints and the fallback branch
/// - Environment variables overriding the defaults
pub trait ToolProfile: Clone + Send + Sync + 'static {
    /// Internal wrapper name (used for env vars and user agent)
    fn name(&self) -> &'static str;

    /// Human-readable name of the wrapped tool
    fn display_name(&self) -> &'static str;

    /// Executable invoked as a subprocess
    fn program(&self) -> &'static str;

    /// Option recognized by the wrapper, carrying a local path or shorthand reference
    fn shorthand_flag(&self) -> &'static str;

    /// Option appended for the wrapped tool, pointing at the resolved local file
    fn data_file_flag(&self) -> &'static str;

    /// Branch used when no release has been published
    fn default_branch(&self) -> &'static str {
        "master"
    }

    /// Base URL of the release metadata API
    fn api_base_url(&self) -> &'static str {
        "https://api.github.com"
    }

    /// Base URL serving raw repository files
    fn raw_base_url(&self) -> &'static str {
        "https://raw.githubusercontent.com"
    }

    /// Install instructions shown when the program is missing
    fn install_hint(&self) -> &'static str;

    /// Environment variable overriding the cache root
    fn cache_dir_env(&self) -> &'static str;

    /// Environment variable overriding the release API base URL
    fn api_url_env(&self) -> &'static str;

    /// Environment variable overriding the raw content base URL
    fn raw_url_env(&self) -> &'static str;

    /// Environment variable overriding the program to run
    fn program_env(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
