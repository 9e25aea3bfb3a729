use scraby_lib::{ParseOptions, Statement};

use super::run_common::{load_or_exit, parse_or_exit};
use crate::cli::QueryArgs;

pub struct FmtArgs {
    pub query: QueryArgs,
    pub options: ParseOptions,
    pub color: bool,
}

pub fn run(args: FmtArgs) {
    let input = load_or_exit(&args.query);
    let statements = parse_or_exit(&input, &args.options, args.color);
    print!("{}", render_statements(&statements));
}

/// One statement per line, each terminated with `;`.
pub fn render_statements(statements: &[Statement]) -> String {
    let mut out = String::new();
    for statement in statements {
        out.push_str(&scraby_lib::render(statement));
        out.push_str(";\n");
    }
    out
}
