pub mod check;
pub mod parse;
pub mod token_loader;
pub mod tokens;


use std::io;
use std::path::PathBuf;

use tpa_core::TokenLoadError;

/// Failures surfaced by CLI commands as `error: <message>`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error(transparent)]
    Load(#[from] TokenLoadError),

    #[error(transparent)]
    Parse(#[from] tpa_lib::Error),

    #[error("failed to render tree: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Prints the error and terminates with status 1.
pub fn exit_with(err: CliError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
