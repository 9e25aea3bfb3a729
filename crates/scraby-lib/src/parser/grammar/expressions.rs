//! Expressions: Pratt loop over binary operators, prefix signs, postfix `.field`.

use rowan::TextRange;

use crate::Result;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::Parser;
use crate::parser::ast::{BinaryOp, Column, Expr, FunctionCall, Literal, UnaryOp};
use crate::parser::syntax_kind::SyntaxKind;
use crate::parser::syntax_kind::token_sets::NAME_FIRST;

/// Binds tighter than every binary operator.
const PREFIX_BINDING_POWER: u8 = 11;

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_expr_bp(0)
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr> {
        self.enter_recursion()?;
        let result = self.parse_expr_bp_body(min_bp);
        self.exit_recursion();
        result
    }

    fn parse_expr_bp_body(&mut self, min_bp: u8) -> Result<Expr> {
        let mut lhs = self.parse_prefix()?;

        while let Some(op) = binary_op(self.current()) {
            let (left_bp, right_bp) = infix_binding_power(op);
            if left_bp < min_bp {
                break;
            }
            self.bump();
            let rhs = self.parse_expr_bp(right_bp)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Expr> {
        let op = match self.current() {
            SyntaxKind::Minus => Some(UnaryOp::Neg),
            SyntaxKind::Plus => Some(UnaryOp::Plus),
            SyntaxKind::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        };

        if let Some(op) = op {
            let start = self.bump().span.start();
            let operand = self.parse_expr_bp(PREFIX_BINDING_POWER)?;
            let span = TextRange::new(start, operand.span().end());
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
                span,
            });
        }

        let primary = self.parse_primary()?;
        self.parse_field_access(primary)
    }

    /// `.field` chains. Columns grow in place; anything else nests in `Expr::Dot`.
    fn parse_field_access(&mut self, mut expr: Expr) -> Result<Expr> {
        while self.eat_token(SyntaxKind::Dot) {
            let field = self.parse_ident()?;
            expr = match expr {
                Expr::Column(mut column) => {
                    column.parts.push(field);
                    Expr::Column(column)
                }
                base => Expr::Dot {
                    base: Box::new(base),
                    field,
                },
            };
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        match self.current() {
            SyntaxKind::Number => {
                let value = self.current_text();
                let span = self.bump().span;
                Ok(Expr::Literal(Literal::number(value, span)))
            }
            SyntaxKind::StringLit => {
                let value = unquote_string(self.current_text());
                let span = self.bump().span;
                Ok(Expr::Literal(Literal::string(value, span)))
            }
            SyntaxKind::Star => Ok(Expr::Star(self.bump().span)),
            SyntaxKind::KwLoad => Ok(Expr::LoadPage(Box::new(self.parse_load_page()?))),
            SyntaxKind::ParenOpen => self.parse_paren_or_subquery(),
            SyntaxKind::Var if !self.currently_at_tag() && self.next_is(SyntaxKind::ParenOpen) => {
                Ok(Expr::Function(self.parse_function_call()?))
            }
            _ if self.currently_is_one_of(NAME_FIRST) => Ok(Expr::Column(Column {
                parts: vec![self.parse_ident()?],
            })),
            _ => Err(self.expected_expression()),
        }
    }

    /// `(expr)` or `(SELECT ...)`
    fn parse_paren_or_subquery(&mut self) -> Result<Expr> {
        let open = self.expect(SyntaxKind::ParenOpen, "`(`")?.span;

        if self.currently_is(SyntaxKind::KwSelect) {
            let select = self.parse_select()?;
            let close = self.expect_closing_paren(open)?;
            return Ok(Expr::Subquery(Box::new(select), open.cover(close)));
        }

        let inner = self.parse_expr()?;
        let close = self.expect_closing_paren(open)?;
        Ok(Expr::Paren(Box::new(inner), open.cover(close)))
    }

    fn parse_function_call(&mut self) -> Result<FunctionCall> {
        let name = self.parse_name()?;
        let (args, close) = self.parse_call_args()?;
        let span = name.span.cover(close);
        Ok(FunctionCall { name, args, span })
    }

    /// `( [expr {, expr}] )`. Returns the arguments and the span of `)`.
    pub(super) fn parse_call_args(&mut self) -> Result<(Vec<Expr>, TextRange)> {
        let open = self.expect(SyntaxKind::ParenOpen, "`(`")?.span;
        let mut args = Vec::new();
        if !self.currently_is(SyntaxKind::ParenClose) {
            args.push(self.parse_expr()?);
            while self.eat_token(SyntaxKind::Comma) {
                args.push(self.parse_expr()?);
            }
        }
        let close = self.expect_closing_paren(open)?;
        Ok((args, close))
    }

    fn expected_expression(&self) -> crate::Error {
        let found = if self.eof() {
            "found end of input".to_owned()
        } else {
            format!("found `{}`", self.current_text())
        };
        Diagnostic::with_detail(DiagnosticKind::ExpectedExpression, self.current_span(), found)
            .into()
    }
}

fn binary_op(kind: SyntaxKind) -> Option<BinaryOp> {
    let op = match kind {
        SyntaxKind::Eq | SyntaxKind::EqEq => BinaryOp::Eq,
        SyntaxKind::LtGt | SyntaxKind::BangEq => BinaryOp::NotEq,
        SyntaxKind::Lt => BinaryOp::Lt,
        SyntaxKind::Gt => BinaryOp::Gt,
        SyntaxKind::LtEq => BinaryOp::LtEq,
        SyntaxKind::GtEq => BinaryOp::GtEq,
        SyntaxKind::Concat => BinaryOp::Concat,
        SyntaxKind::Plus => BinaryOp::Add,
        SyntaxKind::Minus => BinaryOp::Sub,
        SyntaxKind::Star => BinaryOp::Mul,
        SyntaxKind::Slash => BinaryOp::Div,
        SyntaxKind::Percent => BinaryOp::Mod,
        SyntaxKind::KwDiv => BinaryOp::IntDiv,
        _ => return None,
    };
    Some(op)
}

/// Left-associative: right power is one above left.
fn infix_binding_power(op: BinaryOp) -> (u8, u8) {
    match op {
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::Gt
        | BinaryOp::LtEq
        | BinaryOp::GtEq => (3, 4),
        BinaryOp::Concat => (5, 6),
        BinaryOp::Add | BinaryOp::Sub => (7, 8),
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod | BinaryOp::IntDiv => (9, 10),
    }
}

/// `'it''s'` -> `it's`
fn unquote_string(raw: &str) -> String {
    raw.strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(raw)
        .replace("''", "'")
}
