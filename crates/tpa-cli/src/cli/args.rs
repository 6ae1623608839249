//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Token records file (positional). `-` reads stdin.
pub fn tokens_path_arg() -> Arg {
    Arg::new("tokens_path")
        .value_name("TOKENS")
        .default_value("input.tpa")
        .value_parser(value_parser!(PathBuf))
        .help("JSON token records file, or - for stdin")
}

/// Write tree to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write tree to file [default: tree.txt, or tree.json with --format json]")
        .long_help(
            "Write tree to file. Text output defaults to tree.txt and --format json output to \
             tree.json, so a text tree is never written under a .json name.",
        )
}

/// Skip writing the tree file (--no-write).
pub fn no_write_arg() -> Arg {
    Arg::new("no_write")
        .long("no-write")
        .action(ArgAction::SetTrue)
        .conflicts_with("output")
        .help("Print the tree without writing it to a file")
}

/// Tree output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Tree output format")
}

/// Accepted program terminators (--terminators).
pub fn terminators_arg() -> Arg {
    Arg::new("terminators")
        .long("terminators")
        .value_name("SET")
        .default_value("end-or-finish")
        .value_parser(["end", "end-or-finish"])
        .help("Markers that may close a program")
}

/// Block nesting limit (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .default_value("256")
        .value_parser(value_parser!(u32))
        .help("Maximum statement nesting depth")
}

/// Reject unknown token kinds while loading (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Reject token records with unknown kinds")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace logs)")
}
