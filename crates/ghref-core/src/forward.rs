//! Command forwarding: swap the shorthand option for a local data file and run the tool
//!
//! Arguments are handled as `OsString` so anything the tool accepts passes
//! through untouched. Parsing and usage problems are reported before the tool
//! is looked up, and the tool is looked up before any network access or cache
//! change.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::profile::ToolProfile;
use crate::remote::{self, Reference};
use crate::runtime::ScaffoldTool;
use colored::Colorize;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Arguments split into those for the tool and the recognized data option
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardArgs {
    pub passthrough: Vec<OsString>,
    pub data: Option<OsString>,
}

/// Where the data file comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Shorthand(Reference),
    Local(PathBuf),
}

impl DataSource {
    /// Classify an option value; shorthand references are parsed eagerly
    pub fn parse(value: &OsStr) -> Result<Self> {
        match value.to_str() {
            Some(text) if Reference::is_shorthand(text) => {
                Ok(Self::Shorthand(Reference::parse(text)?))
            }
            _ => Ok(Self::Local(PathBuf::from(value))),
        }
    }
}

/// Pull `flag VALUE` / `flag=VALUE` out of `args`; the last occurrence wins
pub fn partition_args<A: AsRef<OsStr>>(args: &[A], flag: &str) -> Result<ForwardArgs> {
    let inline_prefix = format!("{}=", flag);
    let usage = || Error::Usage {
        flag: flag.to_string(),
    };

    let mut parsed = ForwardArgs::default();
    let mut iter = args.iter().map(AsRef::<OsStr>::as_ref);
    while let Some(arg) = iter.next() {
        if arg == flag {
            let value = iter.next().ok_or_else(usage)?;
            parsed.data = Some(value.to_os_string());
        } else if let Some(value) = arg.to_str().and_then(|a| a.strip_prefix(&inline_prefix)) {
            parsed.data = Some(OsString::from(value));
        } else {
            parsed.passthrough.push(arg.to_os_string());
        }
    }

    if parsed.data.as_deref().is_some_and(OsStr::is_empty) {
        return Err(usage());
    }
    Ok(parsed)
}

/// Pass-through arguments followed by `data_file_flag <path>` when a data file is set
pub fn assemble_args(
    passthrough: &[OsString],
    data_file_flag: &str,
    data_file: Option<&Path>,
) -> Vec<OsString> {
    let mut args = passthrough.to_vec();
    if let Some(path) = data_file {
        args.push(OsString::from(data_file_flag));
        args.push(path.as_os_str().to_os_string());
    }
    args
}

/// Resolve the data option, run the tool and return its exit code
pub async fn run<P, A>(profile: &P, settings: &Settings, args: &[A]) -> Result<i32>
where
    P: ToolProfile,
    A: AsRef<OsStr>,
{
    let client = remote::http_client(profile.user_agent());
    run_with_client(profile, settings, &client, args).await
}

/// `run` with a caller-supplied HTTP client
pub async fn run_with_client<P, A>(
    profile: &P,
    settings: &Settings,
    client: &reqwest::Client,
    args: &[A],
) -> Result<i32>
where
    P: ToolProfile,
    A: AsRef<OsStr>,
{
    let forward = partition_args(args, profile.shorthand_flag())?;
    let source = forward.data.as_deref().map(DataSource::parse).transpose()?;

    let tool = ScaffoldTool::from_profile(profile, settings);
    tool.locate()?;

    let data_file = match source {
        Some(DataSource::Shorthand(reference)) => {
            let path = remote::fetch_reference(reference, settings, client).await?;
            println!();
            Some(path)
        }
        Some(DataSource::Local(path)) => {
            println!("{} {}", "Data source:".bold(), path.display());
            if !path.exists() {
                eprintln!(
                    "{} Data file not found: {}",
                    "Warning:".yellow(),
                    path.display()
                );
            }
            Some(path)
        }
        None => None,
    };

    let tool_args = assemble_args(
        &forward.passthrough,
        profile.data_file_flag(),
        data_file.as_deref(),
    );
    tool.run(&tool_args).await
}
