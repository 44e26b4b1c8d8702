//! Update-only flow: `update` with a required data file and fixed defaults
//!
//! Builds an argument list and hands it to `forward`, so shorthand resolution
//! and caching are shared. Unlike the general forwarder, a local data file
//! that does not exist is an error here.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::forward::{self, DataSource};
use crate::profile::ToolProfile;
use crate::remote;
use colored::Colorize;
use std::ffi::OsString;

/// Template reference used when none is given
pub const DEFAULT_VCS_REF: &str = "master";

/// Answers file used when none is given
pub const DEFAULT_ANSWERS_FILE: &str = ".copier-answers.lib.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub vcs_ref: String,
    pub answers_file: String,
    /// Local path or shorthand reference
    pub data_file: OsString,
}

impl UpdateRequest {
    pub fn new(data_file: impl Into<OsString>) -> Self {
        Self {
            vcs_ref: DEFAULT_VCS_REF.to_string(),
            answers_file: DEFAULT_ANSWERS_FILE.to_string(),
            data_file: data_file.into(),
        }
    }

    /// `update --vcs-ref R --answers-file F <shorthand flag> DATA`
    pub fn to_args(&self, shorthand_flag: &str) -> Vec<OsString> {
        vec![
            OsString::from("update"),
            OsString::from("--vcs-ref"),
            OsString::from(&self.vcs_ref),
            OsString::from("--answers-file"),
            OsString::from(&self.answers_file),
            OsString::from(shorthand_flag),
            self.data_file.clone(),
        ]
    }
}

/// Run the update and return the tool's exit code
pub async fn run_update<P: ToolProfile>(
    profile: &P,
    settings: &Settings,
    request: &UpdateRequest,
) -> Result<i32> {
    let client = remote::http_client(profile.user_agent());
    run_update_with_client(profile, settings, &client, request).await
}

/// `run_update` with a caller-supplied HTTP client
pub async fn run_update_with_client<P: ToolProfile>(
    profile: &P,
    settings: &Settings,
    client: &reqwest::Client,
    request: &UpdateRequest,
) -> Result<i32> {
    if let DataSource::Local(path) = DataSource::parse(&request.data_file)? {
        if !path.exists() {
            return Err(Error::DataFileNotFound { path });
        }
    }

    println!(
        "{}",
        format!("Updating project from {} template...", profile.display_name())
            .cyan()
            .bold()
    );
    println!("   VCS reference: {}", request.vcs_ref);
    println!("   Answers file: {}", request.answers_file);
    println!();

    let code =
        forward::run_with_client(profile, settings, client, &request.to_args(profile.shorthand_flag()))
            .await?;

    println!();
    if code == 0 {
        println!("{}", "Project updated successfully from template!".green().bold());
    } else {
        eprintln!(
            "{} {} exited with code {}",
            "Update failed:".red().bold(),
            profile.display_name(),
            code
        );
    }
    Ok(code)
}
