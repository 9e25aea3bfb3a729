use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Parser)]
#[command(name = "scraby", bin_name = "scraby")]
#[command(about = "SQL dialect for web scraping: HTML tags as identifiers, LOAD as a row source")]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "scraby=trace")
    #[arg(long, global = true, default_value = "warn", value_name = "FILTER")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a query (silent on success)
    #[command(after_help = r#"EXAMPLES:
  scraby check query.sql
  scraby check -q "SELECT <div class=\"price\"> FROM LOAD('https://example.org')"
  cat query.sql | scraby check -"#)]
    Check {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        parse: ParseArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the syntax tree of a query
    #[command(after_help = r#"EXAMPLES:
  scraby ast query.sql
  scraby ast query.sql --spans
  scraby ast -q "SELECT <p> FROM t" --json"#)]
    Ast {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        parse: ParseArgs,

        /// Print the tree as JSON
        #[arg(long, conflicts_with = "spans")]
        json: bool,

        /// Show source positions
        #[arg(long)]
        spans: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the query in canonical form
    Fmt {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        parse: ParseArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the token stream the parser sees
    Tokens {
        #[command(flatten)]
        query: QueryArgs,

        /// Show tokenizer output before the keyword guard and tag rewriting, trivia included
        #[arg(long)]
        raw: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
#[group(id = "query_input", required = true, multiple = false)]
pub struct QueryArgs {
    /// Query file (use "-" for stdin)
    #[arg(value_name = "FILE")]
    pub query_path: Option<PathBuf>,

    /// Query as inline text
    #[arg(short = 'q', long = "query", value_name = "TEXT")]
    pub query_text: Option<String>,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Maximum nesting depth of expressions and subqueries (0 disables the limit)
    #[arg(long, value_name = "N", default_value_t = scraby_lib::parser::DEFAULT_RECURSION_FUEL)]
    pub max_depth: u32,
}

impl ParseArgs {
    pub fn options(&self) -> scraby_lib::ParseOptions {
        let fuel = (self.max_depth > 0).then_some(self.max_depth);
        scraby_lib::ParseOptions::new().with_recursion_fuel(fuel)
    }
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Colorize diagnostics (auto-detected by default)
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,
}
