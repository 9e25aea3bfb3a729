//! Show the token stream.
//!
//! Default output is what the parser consumes: guarded, trivia-free, tags collapsed.
//! `--raw` shows the tokenizer output unchanged, which is useful when the guard or the
//! tag rewriter rejects or reshapes input unexpectedly.

use scraby_lib::Error;
use scraby_lib::parser::lexer::lex;
use scraby_lib::parser::{Token, token_text};

use super::query_loader::QueryInput;
use super::run_common::{load_or_exit, render_error};
use crate::cli::QueryArgs;

pub struct TokensArgs {
    pub query: QueryArgs,
    pub raw: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let input = load_or_exit(&args.query);

    match render_tokens(&input, args.raw) {
        Ok(out) => print!("{}", out),
        Err(err) => {
            eprint!("{}", render_error(&err, &input, args.color));
            std::process::exit(1);
        }
    }
}

pub fn render_tokens(input: &QueryInput, raw: bool) -> Result<String, Error> {
    let tokens = if raw {
        lex(&input.text)
    } else {
        scraby_lib::tokenize(&input.text)?
    };
    tracing::debug!(tokens = tokens.len(), raw, "tokenized query");

    let mut out = String::new();
    for token in &tokens {
        out.push_str(&format_token(&input.text, token));
        out.push('\n');
    }
    Ok(out)
}

fn format_token(source: &str, token: &Token) -> String {
    let start = u32::from(token.span.start());
    let end = u32::from(token.span.end());
    let kind = if token.is_collapsed_tag() {
        "Tag".to_owned()
    } else {
        format!("{:?}", token.kind)
    };
    format!("{} {:?} {}..{}", kind, token_text(source, token), start, end)
}
