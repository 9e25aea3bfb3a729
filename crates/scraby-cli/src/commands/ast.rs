//! Show the syntax tree of a query.

use scraby_lib::dump::AstPrinter;
use scraby_lib::{ParseOptions, Statement};

use super::run_common::{load_or_exit, parse_or_exit};
use crate::cli::QueryArgs;

pub struct AstArgs {
    pub query: QueryArgs,
    pub options: ParseOptions,
    pub json: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let input = load_or_exit(&args.query);
    let statements = parse_or_exit(&input, &args.options, args.color);

    if args.json {
        match render_json(&statements) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", render_tree(&statements, args.spans));
}

pub fn render_tree(statements: &[Statement], spans: bool) -> String {
    AstPrinter::new(statements).with_spans(spans).dump()
}

pub fn render_json(statements: &[Statement]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(statements)
}
