//! copier-gh-update - update a project from its copier template
//!
//! ```text
//! copier-gh-update --data-file gh:easyscience/peasy/project.yaml
//! copier-gh-update --vcs-ref v1.2.0 --answers-file .copier-answers.shared.yml \
//!     --data-file gh:easyscience/peasy@master/project.yaml
//! copier-gh-update --data-file ../peasy/project.yaml
//! ```

use clap::Parser;
use copier_gh::{exit_code, install_interrupt_handler, CopierProfile};
use ghref_core::update::{self, UpdateRequest, DEFAULT_ANSWERS_FILE, DEFAULT_VCS_REF};
use ghref_core::Settings;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "copier-gh-update")]
#[command(about = "Update project from copier template with GitHub data file support")]
#[command(version)]
pub struct Args {
    /// Template VCS reference
    #[arg(long = "vcs-ref", default_value = DEFAULT_VCS_REF)]
    pub vcs_ref: String,

    /// Copier answers file
    #[arg(long = "answers-file", default_value = DEFAULT_ANSWERS_FILE)]
    pub answers_file: String,

    /// Data file path (local or gh:owner/repo[@ref]/path)
    #[arg(long = "data-file")]
    pub data_file: OsString,
}

impl From<Args> for UpdateRequest {
    fn from(args: Args) -> Self {
        UpdateRequest {
            vcs_ref: args.vcs_ref,
            answers_file: args.answers_file,
            data_file: args.data_file,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    install_interrupt_handler();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help / --version print to stdout and succeed; usage errors exit 1
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    let profile = CopierProfile;

    let result = match Settings::from_profile(&profile) {
        Ok(settings) => update::run_update(&profile, &settings, &args.into()).await,
        Err(e) => Err(e),
    };
    std::process::exit(exit_code(result));
}
