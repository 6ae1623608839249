use std::path::PathBuf;

use tpa_lib::{Parser, ProgramTerminators};

use super::token_loader::load_token_file;
use super::{CliError, exit_with};

pub struct CheckArgs {
    pub tokens_path: PathBuf,
    pub terminators: ProgramTerminators,
    pub max_depth: u32,
    pub strict: bool,
}

pub fn run(args: CheckArgs) {
    if let Err(e) = execute(&args) {
        exit_with(e);
    }

    // Silent on success (like cargo check)
}

pub fn execute(args: &CheckArgs) -> Result<(), CliError> {
    let tokens = load_token_file(&args.tokens_path, args.strict)?;

    Parser::new(&tokens)
        .with_terminators(args.terminators)
        .with_recursion_fuel(Some(args.max_depth))
        .parse()?;

    Ok(())
}
