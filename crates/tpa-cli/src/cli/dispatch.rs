//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Output file resolution for `parse` (`--no-write`, format-dependent default)

use std::path::PathBuf;

use clap::ArgMatches;
use tpa_lib::{ProgramTerminators, TreeFormat};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::parse::ParseArgs;
use crate::commands::tokens::TokensArgs;

pub struct ParseParams {
    pub tokens_path: PathBuf,
    pub output: Option<PathBuf>,
    pub no_write: bool,
    pub format: TreeFormat,
    pub terminators: ProgramTerminators,
    pub max_depth: u32,
    pub strict: bool,
    pub color: ColorChoice,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tokens_path: parse_tokens_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            no_write: m.get_flag("no_write"),
            format: parse_format(m),
            terminators: parse_terminators(m),
            max_depth: parse_max_depth(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        let output = if p.no_write {
            None
        } else {
            Some(
                p.output
                    .unwrap_or_else(|| PathBuf::from(p.format.default_file_name())),
            )
        };

        Self {
            tokens_path: p.tokens_path,
            output,
            format: p.format,
            terminators: p.terminators,
            max_depth: p.max_depth,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub tokens_path: PathBuf,
    pub terminators: ProgramTerminators,
    pub max_depth: u32,
    pub strict: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tokens_path: parse_tokens_path(m),
            terminators: parse_terminators(m),
            max_depth: parse_max_depth(m),
            strict: m.get_flag("strict"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            tokens_path: p.tokens_path,
            terminators: p.terminators,
            max_depth: p.max_depth,
            strict: p.strict,
        }
    }
}

pub struct TokensParams {
    pub tokens_path: PathBuf,
    pub strict: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tokens_path: parse_tokens_path(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            tokens_path: p.tokens_path,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_tokens_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("tokens_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("input.tpa"))
}

fn parse_format(m: &ArgMatches) -> TreeFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => TreeFormat::Json,
        _ => TreeFormat::Text,
    }
}

fn parse_terminators(m: &ArgMatches) -> ProgramTerminators {
    match m.get_one::<String>("terminators").map(|s| s.as_str()) {
        Some("end") => ProgramTerminators::EndOnly,
        _ => ProgramTerminators::EndOrFinish,
    }
}

fn parse_max_depth(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("max_depth").copied().unwrap_or(256)
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
