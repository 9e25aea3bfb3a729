use scraby_lib::ParseOptions;

use super::run_common::{load_or_exit, parse_or_exit};
use crate::cli::QueryArgs;

pub struct CheckArgs {
    pub query: QueryArgs,
    pub options: ParseOptions,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let input = load_or_exit(&args.query);
    parse_or_exit(&input, &args.options, args.color);

    // Silent on success (like cargo check)
}
