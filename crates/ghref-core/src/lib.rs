//! ghref Core - data-file reference resolution for scaffolding tool wrappers
//!
//! Wrappers accept a data-file option whose value is either a local path or a
//! shorthand reference `gh:owner/repo[@ref]/path`. Shorthand references are
//! resolved to a concrete version (latest release, or the default branch),
//! fetched into a per-repository cache and handed to the wrapped tool as a
//! plain local path.
//!
//! # Architecture
//!
//! - **remote**: reference parsing, release lookup, cache policy, fetching
//! - **runtime**: locating and running the wrapped tool
//! - **forward**: argument partitioning and the end-to-end flow
//! - **update**: fixed-default `update` flow built on `forward`
//! - **config** / **profile**: settings threaded into every component
//!
//! # Example Usage
//!
//! ```ignore
//! use ghref_core::{forward, Settings, ToolProfile};
//!
//! let settings = Settings::from_profile(&MyProfile)?;
//! let code = forward::run(&MyProfile, &settings, &args).await?;
//! std::process::exit(code);
//! ```

pub mod config;
pub mod error;
pub mod forward;
pub mod profile;
pub mod remote;
pub mod runtime;
pub mod update;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types for convenience
pub use config::Settings;
pub use error::{Error, Result};
pub use profile::ToolProfile;
pub use remote::{CacheAction, DataCache, Reference, ResolvedReference, VersionKind};
