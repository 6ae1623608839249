use std::io::{self, Write};
use std::path::PathBuf;

use tpa_core::{Colors, Token};

use super::token_loader::load_token_file;
use super::{CliError, exit_with};

pub struct TokensArgs {
    pub tokens_path: PathBuf,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let stdout = io::stdout();
    if let Err(e) = execute(&args, &mut stdout.lock()) {
        exit_with(e);
    }
}

pub fn execute(args: &TokensArgs, out: &mut impl Write) -> Result<(), CliError> {
    let tokens = load_token_file(&args.tokens_path, args.strict)?;
    let colors = Colors::new(args.color);

    for (index, token) in tokens.iter().enumerate() {
        write_token(out, index, token, colors).map_err(CliError::Output)?;
    }

    Ok(())
}

fn write_token(out: &mut impl Write, index: usize, token: &Token, c: Colors) -> io::Result<()> {
    writeln!(
        out,
        "{}{}{} {}{}{} {}{}{}",
        c.punct, index, c.reset, c.kind, token.kind_name(), c.reset, c.value, token.value, c.reset
    )
}
