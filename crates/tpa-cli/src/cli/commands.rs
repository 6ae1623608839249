//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tpa")
        .about("Predictive parser for pre-classified tpa token streams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(parse_command())
        .subcommand(check_command())
        .subcommand(tokens_command())
}

/// Parse tokens, print the tree and persist it.
pub fn parse_command() -> Command {
    Command::new("parse")
        .about("Parse token records and print the syntax tree")
        .override_usage(
            "\
  tpa parse [TOKENS]
  tpa parse [TOKENS] -o <FILE>
  tpa parse [TOKENS] --format json --no-write",
        )
        .after_help(
            r#"EXAMPLES:
  tpa parse                           # input.tpa -> tree.txt
  tpa parse tokens.json -o out.txt    # explicit input and output
  tpa parse --format json             # input.tpa -> tree.json
  cat tokens.json | tpa parse - --no-write"#,
        )
        .arg(tokens_path_arg())
        .arg(output_file_arg())
        .arg(no_write_arg())
        .arg(format_arg())
        .arg(terminators_arg())
        .arg(max_depth_arg())
        .arg(strict_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Validate tokens without output.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate token records against the grammar")
        .after_help(
            r#"EXAMPLES:
  tpa check                           # validate input.tpa
  tpa check tokens.json --strict      # also reject unknown kinds"#,
        )
        .arg(tokens_path_arg())
        .arg(terminators_arg())
        .arg(max_depth_arg())
        .arg(strict_arg())
        .arg(verbose_arg())
}

/// List the loaded tokens.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("List token records as loaded")
        .arg(tokens_path_arg())
        .arg(strict_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
