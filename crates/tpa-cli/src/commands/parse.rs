use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tpa_lib::{Colors, Parser, ProgramTerminators, TreeFormat, TreePrinter};

use super::token_loader::load_token_file;
use super::{CliError, exit_with};

pub struct ParseArgs {
    pub tokens_path: PathBuf,
    /// Where to persist the rendered tree; `None` skips persistence.
    pub output: Option<PathBuf>,
    pub format: TreeFormat,
    pub terminators: ProgramTerminators,
    pub max_depth: u32,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: ParseArgs) {
    let stdout = io::stdout();
    if let Err(e) = execute(&args, &mut stdout.lock()) {
        exit_with(e);
    }
}

pub fn execute(args: &ParseArgs, out: &mut impl Write) -> Result<(), CliError> {
    let tokens = load_token_file(&args.tokens_path, args.strict)?;

    let program = Parser::new(&tokens)
        .with_terminators(args.terminators)
        .with_recursion_fuel(Some(args.max_depth))
        .parse()?;
    let root = program.to_syntax();

    let rendered = args.format.render(&root)?;
    let shown = match args.format {
        TreeFormat::Text => TreePrinter::new(&root).colors(Colors::new(args.color)).dump(),
        TreeFormat::Json => rendered.clone(),
    };

    writeln!(out, "Parsing completed successfully!").map_err(CliError::Output)?;
    out.write_all(shown.as_bytes()).map_err(CliError::Output)?;

    if let Some(path) = &args.output {
        fs::write(path, rendered).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote tree");
    }

    Ok(())
}
