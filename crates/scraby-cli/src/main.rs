#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod commands;


use clap::Parser;

use cli::{Cli, Command};
use commands::ast::AstArgs;
use commands::check::CheckArgs;
use commands::fmt::FmtArgs;
use commands::tokens::TokensArgs;

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Check {
            query,
            parse,
            output,
        } => commands::check::run(CheckArgs {
            query,
            options: parse.options(),
            color: output.color.should_colorize(),
        }),
        Command::Ast {
            query,
            parse,
            json,
            spans,
            output,
        } => commands::ast::run(AstArgs {
            query,
            options: parse.options(),
            json,
            spans,
            color: output.color.should_colorize(),
        }),
        Command::Fmt {
            query,
            parse,
            output,
        } => commands::fmt::run(FmtArgs {
            query,
            options: parse.options(),
            color: output.color.should_colorize(),
        }),
        Command::Tokens { query, raw, output } => commands::tokens::run(TokensArgs {
            query,
            raw,
            color: output.color.should_colorize(),
        }),
    }
}
