use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tpa_core::{LoadOptions, Token, load_tokens};

use super::CliError;

/// Reads token records from `path` (`-` for stdin) and converts them.
pub fn load_token_file(path: &Path, strict: bool) -> Result<Vec<Token>, CliError> {
    let json = if path.as_os_str() == "-" {
        read_stdin()?
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::debug!(path = %path.display(), bytes = json.len(), "read token records");
    Ok(load_tokens(&json, LoadOptions { strict })?)
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::Stdin)?;
    Ok(buf)
}
