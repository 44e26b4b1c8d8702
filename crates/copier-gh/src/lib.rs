//! Shared pieces of the copier wrapper binaries
//!
//! - `copier-gh`: forwards every argument to copier, resolving `--gh-data`
//! - `copier-gh-update`: `copier update` with fixed defaults and a required data file

use colored::Colorize;
use ghref_core::ToolProfile;

/// copier wrapper profile
#[derive(Clone)]
pub struct CopierProfile;

impl ToolProfile for CopierProfile {
    fn name(&self) -> &'static str {
        "copier-gh"
    }

    fn display_name(&self) -> &'static str {
        "copier"
    }

    fn program(&self) -> &'static str {
        "copier"
    }

    fn shorthand_flag(&self) -> &'static str {
        "--gh-data"
    }

    fn data_file_flag(&self) -> &'static str {
        "--data-file"
    }

    fn install_hint(&self) -> &'static str {
        "Please install copier (pip install copier)."
    }

    fn cache_dir_env(&self) -> &'static str {
        "COPIER_GH_CACHE_DIR"
    }

    fn api_url_env(&self) -> &'static str {
        "COPIER_GH_API_URL"
    }

    fn raw_url_env(&self) -> &'static str {
        "COPIER_GH_RAW_URL"
    }

    fn program_env(&self) -> &'static str {
        "COPIER_GH_TOOL"
    }
}

/// Exit with 130 on Ctrl+C unless copier is running, in which case copier handles it
pub fn install_interrupt_handler() {
    ctrlc::set_handler(move || {
        if !ghref_core::runtime::child_running() {
            std::process::exit(130);
        }
    })
    .ok();
}

/// Map a run outcome to a process exit code, reporting failures
pub fn exit_code(result: ghref_core::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            report(e);
            1
        }
    }
}

fn report(err: ghref_core::Error) {
    let err = anyhow::Error::from(err);
    eprintln!("{} {:#}", "❌ Error:".red().bold(), err);
}
