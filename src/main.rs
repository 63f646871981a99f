use std::str::FromStr;

use env_logger::Env;
use structopt::StructOpt;

mod error;
mod helper;
mod macos;
mod service;

use error::{Error, Result};
use service::controller::IconVisibilityController;
use service::operation::Operation;
use service::system::{HostEnvironment, PreferenceStore, ProcessControl};

/// Show, hide or toggle the macOS desktop icons.
#[derive(StructOpt)]
struct Cli {
    /// show, hide or toggle [default: toggle]
    operation: Option<String>,
}

impl Cli {
    fn operation(&self) -> Result<Operation> {
        match &self.operation {
            Some(word) => Operation::from_str(word),
            None => Ok(Operation::default()),
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

// DEBUG bypasses dispatch and exercises the read/invert/write path without
// restarting Finder
fn run<H, S, P>(args: &Cli, debug: bool, host: &H, store: S, shell: P) -> Result<bool>
where
    H: HostEnvironment,
    S: PreferenceStore,
    P: ProcessControl,
{
    if debug {
        let controller = IconVisibilityController::new(host, store, shell)?;
        return controller.diagnose();
    }
    let operation = args.operation()?;
    let controller = IconVisibilityController::new(host, store, shell)?;
    operation.apply(&controller)
}

// external command failures keep the host's own wording
fn report(e: &Error) -> String {
    match e {
        Error::Io(_) => e.to_string(),
        _ => format!("desktopicons: {}", e),
    }
}

fn main() {
    let args = Cli::from_args();
    let debug = std::env::var_os("DEBUG").is_some();
    init_logging(debug);

    let host = helper::system_host();
    match run(&args, debug, &host, helper::system_store(), helper::system_shell()) {
        Ok(showing) => log::info!("desktop icons {}", if showing { "shown" } else { "hidden" }),
        Err(e) => {
            eprintln!("{}", report(&e));
            std::process::exit(e.exit_code());
        }
    }
}
