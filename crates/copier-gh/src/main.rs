//! copier-gh - copier wrapper with `gh:` data-file references
//!
//! Every argument is passed to `copier` unchanged, except `--gh-data VALUE`,
//! which is resolved to a local file and forwarded as `--data-file PATH`.
//!
//! ```text
//! copier-gh copy gh:easyscience/template-lib . --gh-data gh:easyscience/peasy/project.yaml
//! copier-gh update --answers-file .copier-answers.yml --gh-data gh:easyscience/peasy@master/project.yaml
//! copier-gh recopy --vcs-ref v1.2.0 --gh-data gh:easyscience/peasy@v2.0.0/project.yaml
//! copier-gh update --gh-data ../peasy/project.yaml
//! ```

use clap::Parser;
use copier_gh::{exit_code, install_interrupt_handler, CopierProfile};
use ghref_core::{forward, Settings};
use std::ffi::OsString;

/// All arguments are collected raw; help and version belong to copier.
#[derive(Parser, Debug)]
#[command(name = "copier-gh")]
#[command(about = "copier wrapper that fetches data files from gh:owner/repo[@ref]/path references")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Arguments for copier, plus `--gh-data <path or gh:owner/repo[@ref]/path>`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<OsString>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    install_interrupt_handler();

    let args = Args::parse();
    let profile = CopierProfile;

    let result = match Settings::from_profile(&profile) {
        Ok(settings) => forward::run(&profile, &settings, &args.args).await,
        Err(e) => Err(e),
    };
    std::process::exit(exit_code(result));
}
