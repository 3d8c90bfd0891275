//! Statement and declaration grammar:
//! ```text
//! func_def      := 'func' IDENT '(' params? ')' compound
//! params        := IDENT (',' IDENT)*
//! var_def       := 'var' IDENT ( '[' expr ']' | ('=' expr)? ) ';'
//! statement     := var_def
//!                | 'if' '(' expr ')' statement ('else' statement)?
//!                | 'while' '(' expr ')' statement
//!                | 'return' expr? ';'
//!                | compound
//!                | expr ';'
//! compound      := '{' statement* '}'
//! ```
use crate::ast::{
    ArrDef, Compound, Definition, FuncDef, If, Return, Statement, VarDef, While,
};
use crate::lexer::{Keyword, TokenKind};

use super::{ParseError, ParseResult, Parser};

/// Matches the call-argument cap (§4.2): "cap at an implementation-defined maximum parameter
/// count" is the same bound used on both sides of a call.
pub const MAX_PARAMS: usize = 255;

impl Parser {
    pub(super) fn parse_func_def(&mut self) -> ParseResult<FuncDef> {
        let line = self.current_line();
        self.advance(); // 'func'
        let (name, _) = self.expect_identifier()?;
        self.expect(&TokenKind::LParen, "'('")?;

        let mut params = Vec::new();
        if !self.at(&TokenKind::RParen) {
            loop {
                let (param, param_line) = self.expect_identifier()?;
                if params.len() >= MAX_PARAMS {
                    return Err(ParseError {
                        line: param_line,
                        expected: format!("at most {MAX_PARAMS} parameters"),
                        found: format!("parameter '{param}'"),
                    });
                }
                params.push(param);
                if self.at(&TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen, "')'")?;
        let body = self.parse_compound()?;

        Ok(FuncDef {
            name,
            params,
            body,
            line,
        })
    }

    /// Parses the shared `var_def` production, returning either a [`Definition::VarDef`] or a
    /// [`Definition::ArrDef`] depending on which alternative matched.
    pub(super) fn parse_var_or_arr_def(&mut self) -> ParseResult<Definition> {
        match self.parse_var_statement()? {
            Statement::VarDef(v) => Ok(Definition::VarDef(v)),
            Statement::ArrDef(a) => Ok(Definition::ArrDef(a)),
            _ => unreachable!("parse_var_statement only ever returns VarDef or ArrDef"),
        }
    }

    fn parse_var_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();
        self.advance(); // 'var'
        let (name, _) = self.expect_identifier()?;

        if self.at(&TokenKind::LSquare) {
            self.advance();
            let size = self.parse_expr()?;
            self.expect(&TokenKind::RSquare, "']'")?;
            self.expect(&TokenKind::Semicolon, "';'")?;
            return Ok(Statement::ArrDef(ArrDef { name, size, line }));
        }

        let init = if self.at(&TokenKind::Assign) {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(&TokenKind::Semicolon, "';'")?;
        Ok(Statement::VarDef(VarDef { name, init, line }))
    }

    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.peek_kind() {
            Some(TokenKind::Keyword(Keyword::Var)) => self.parse_var_statement(),
            Some(TokenKind::Keyword(Keyword::If)) => self.parse_if(),
            Some(TokenKind::Keyword(Keyword::While)) => self.parse_while(),
            Some(TokenKind::Keyword(Keyword::Return)) => self.parse_return(),
            Some(TokenKind::LBrace) => Ok(Statement::Compound(self.parse_compound()?)),
            _ => {
                let line = self.current_line();
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon, "';'")?;
                let _ = line;
                Ok(Statement::Expression(expr))
            }
        }
    }

    pub(super) fn parse_compound(&mut self) -> ParseResult<Compound> {
        let line = self.current_line();
        self.expect(&TokenKind::LBrace, "'{'")?;
        let mut statements = Vec::new();
        while !self.at(&TokenKind::RBrace) {
            if self.peek_kind().is_none() {
                return Err(ParseError {
                    line: self.current_line(),
                    expected: "'}'".to_owned(),
                    found: "end of input".to_owned(),
                });
            }
            statements.push(self.parse_statement()?);
        }
        self.advance(); // '}'
        Ok(Compound { statements, line })
    }

    fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();
        self.advance(); // 'if'
        self.expect(&TokenKind::LParen, "'('")?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen, "')'")?;
        let then_branch = Box::new(self.parse_statement()?);

        // Dangling-else: bind to the nearest unmatched `if` by greedily consuming an `else`
        // right here, before returning control to whichever caller parsed the outer `if`.
        let else_branch = if matches!(self.peek_kind(), Some(TokenKind::Keyword(Keyword::Else))) {
            self.advance();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Statement::If(If {
            condition,
            then_branch,
            else_branch,
            line,
        }))
    }

    fn parse_while(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();
        self.advance(); // 'while'
        self.expect(&TokenKind::LParen, "'('")?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen, "')'")?;
        let body = Box::new(self.parse_statement()?);
        Ok(Statement::While(While {
            condition,
            body,
            line,
        }))
    }

    fn parse_return(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();
        self.advance(); // 'return'
        let value = if self.at(&TokenKind::Semicolon) {
            crate::ast::Expression::Number(crate::ast::Number { value: 0, line })
        } else {
            self.parse_expr()?
        };
        self.expect(&TokenKind::Semicolon, "';'")?;
        Ok(Statement::Return(Return { value, line }))
    }
}
