//! Precedence-climbing expression grammar (§4.2, design note in §9): one recursive routine
//! parameterized by a precedence floor, rather than one parsing function per precedence level.
//!
//! Binding power, loosest to tightest:
//! 1. `=`                           (right-associative)
//! 2. `== < <= > >=`                (left-associative)
//! 3. `& | << >>`                   (left-associative)
//! 4. `+ -`                         (left-associative)
//! 5. `* /`                         (left-associative)
//! and, tighter still, the unary prefix operators and primaries.
use crate::ast::{
    BinOp, BinOpKind, Expression, FuncCall, Number, Str, UnOp, UnOpKind, Variable,
};
use crate::lexer::TokenKind;

use super::stmt::MAX_PARAMS;
use super::{ParseError, ParseResult, Parser};

fn binop_info(kind: &TokenKind) -> Option<(BinOpKind, u8, bool)> {
    use BinOpKind::*;
    Some(match kind {
        TokenKind::Assign => (Assign, 1, true),
        TokenKind::Equal => (Equal, 2, false),
        TokenKind::Less => (Less, 2, false),
        TokenKind::LEqual => (LEqual, 2, false),
        TokenKind::Greater => (Greater, 2, false),
        TokenKind::GEqual => (GEqual, 2, false),
        TokenKind::Ampersand => (BitAnd, 3, false),
        TokenKind::Pipe => (BitOr, 3, false),
        TokenKind::DblLess => (ShLeft, 3, false),
        TokenKind::DblGreater => (ShRight, 3, false),
        TokenKind::Plus => (Add, 4, false),
        TokenKind::Minus => (Sub, 4, false),
        TokenKind::Asterisk => (Mul, 5, false),
        TokenKind::Slash => (Div, 5, false),
        _ => return None,
    })
}

impl Parser {
    pub(super) fn parse_expr(&mut self) -> ParseResult<Expression> {
        self.parse_binary(1)
    }

    fn parse_binary(&mut self, min_precedence: u8) -> ParseResult<Expression> {
        let mut lhs = self.parse_unary()?;

        while let Some((kind, precedence, right_assoc)) =
            self.peek_kind().and_then(binop_info)
        {
            if precedence < min_precedence {
                break;
            }
            let line = self.current_line();
            self.advance();
            let next_min = if right_assoc { precedence } else { precedence + 1 };
            let rhs = self.parse_binary(next_min)?;
            lhs = Expression::BinOp(BinOp {
                kind,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                line,
            });
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> ParseResult<Expression> {
        match self.peek_kind() {
            Some(TokenKind::Minus) => {
                let line = self.current_line();
                self.advance();
                let operand = self.parse_unary()?;
                Ok(Expression::UnOp(UnOp {
                    kind: UnOpKind::Negate,
                    operand: Box::new(operand),
                    line,
                }))
            }
            Some(TokenKind::At) => {
                let line = self.current_line();
                self.advance();
                let operand = if self.at(&TokenKind::LParen) {
                    self.advance();
                    let inner = self.parse_expr()?;
                    self.expect(&TokenKind::RParen, "')'")?;
                    inner
                } else {
                    let (name, var_line) = self.expect_identifier()?;
                    Expression::Variable(Variable {
                        name,
                        line: var_line,
                    })
                };
                Ok(Expression::UnOp(UnOp {
                    kind: UnOpKind::Deref,
                    operand: Box::new(operand),
                    line,
                }))
            }
            Some(TokenKind::Ampersand) => {
                let line = self.current_line();
                self.advance();
                let (name, var_line) = self.expect_identifier()?;
                Ok(Expression::UnOp(UnOp {
                    kind: UnOpKind::AddressOf,
                    operand: Box::new(Expression::Variable(Variable {
                        name,
                        line: var_line,
                    })),
                    line,
                }))
            }
            _ => self.parse_postfix(),
        }
    }

    fn parse_postfix(&mut self) -> ParseResult<Expression> {
        let primary = self.parse_primary()?;

        if let Expression::Variable(Variable { name, line }) = &primary {
            if self.at(&TokenKind::LParen) {
                let name = name.clone();
                let line = *line;
                self.advance();
                let args = self.parse_args()?;
                self.expect(&TokenKind::RParen, "')'")?;
                return Ok(Expression::FuncCall(FuncCall { name, args, line }));
            }
            if self.at(&TokenKind::LSquare) {
                let name = name.clone();
                let line = *line;
                self.advance();
                let index = self.parse_expr()?;
                self.expect(&TokenKind::RSquare, "']'")?;
                // `a[i]` desugars to `@(a + i * 8)`: every cell is one 8-byte i64 slot (§3, §9).
                let address = Expression::BinOp(BinOp {
                    kind: BinOpKind::Add,
                    lhs: Box::new(Expression::Variable(Variable {
                        name,
                        line,
                    })),
                    rhs: Box::new(Expression::BinOp(BinOp {
                        kind: BinOpKind::Mul,
                        lhs: Box::new(index),
                        rhs: Box::new(Expression::Number(Number { value: 8, line })),
                        line,
                    })),
                    line,
                });
                return Ok(Expression::UnOp(UnOp {
                    kind: UnOpKind::Deref,
                    operand: Box::new(address),
                    line,
                }));
            }
        }

        Ok(primary)
    }

    fn parse_args(&mut self) -> ParseResult<Vec<Expression>> {
        let mut args = Vec::new();
        if self.at(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            let line = self.current_line();
            if args.len() >= MAX_PARAMS {
                return Err(ParseError {
                    line,
                    expected: format!("at most {MAX_PARAMS} arguments"),
                    found: "another argument".to_owned(),
                });
            }
            args.push(self.parse_expr()?);
            if self.at(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(args)
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let line = self.current_line();
        match self.peek_kind() {
            Some(TokenKind::Number(_)) => {
                let Some(TokenKind::Number(value)) = self.advance().map(|t| t.kind) else {
                    unreachable!()
                };
                Ok(Expression::Number(Number { value, line }))
            }
            Some(TokenKind::String(_)) => {
                let Some(TokenKind::String(value)) = self.advance().map(|t| t.kind) else {
                    unreachable!()
                };
                Ok(Expression::Str(Str { value, line }))
            }
            Some(TokenKind::Identifier(_)) => {
                let Some(TokenKind::Identifier(name)) = self.advance().map(|t| t.kind) else {
                    unreachable!()
                };
                Ok(Expression::Variable(Variable { name, line }))
            }
            Some(TokenKind::LParen) => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            _ => {
                let found = self.describe_next();
                Err(ParseError {
                    line,
                    expected: "an expression".to_owned(),
                    found,
                })
            }
        }
    }
}
