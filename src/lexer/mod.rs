//! The lexer: turns raw source bytes into a [`TokenStream`].
//!
//! The source is treated as an opaque byte buffer (UTF-8-oblivious ASCII, no BOM handling, §6 of
//! the spec); the scanner dispatches on the leading byte at each position and never looks more
//! than one byte past the token it is currently building.
mod token;
mod tokens;

pub use token::*;
pub use tokens::*;

use std::{error::Error, fmt::Display};

/// Failure to recognize a byte as the start of any valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub line: usize,
    pub character: char,
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lex error at line {}: unexpected character '{}'",
            self.line, self.character
        )
    }
}

impl Error for LexError {}

pub type LexResult<T> = Result<T, LexError>;

/// Scans `source` into a flat token sequence. The source is consumed in a single forward pass;
/// line-comments and whitespace are discarded without producing tokens.
pub struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    pub fn lex(mut self) -> LexResult<TokenStream> {
        while let Some(&byte) = self.bytes.get(self.pos) {
            match byte {
                b'0'..=b'9' => self.lex_number(),
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.lex_identifier(),
                b'"' => self.lex_string()?,
                b' ' | b'\t' | b'\r' => self.pos += 1,
                b'\n' => {
                    self.pos += 1;
                    self.line += 1;
                }
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line_comment(),
                b'(' => self.emit_single(TokenKind::LParen),
                b')' => self.emit_single(TokenKind::RParen),
                b'{' => self.emit_single(TokenKind::LBrace),
                b'}' => self.emit_single(TokenKind::RBrace),
                b'[' => self.emit_single(TokenKind::LSquare),
                b']' => self.emit_single(TokenKind::RSquare),
                b';' => self.emit_single(TokenKind::Semicolon),
                b',' => self.emit_single(TokenKind::Comma),
                b'+' => self.emit_single(TokenKind::Plus),
                b'-' => self.emit_single(TokenKind::Minus),
                b'*' => self.emit_single(TokenKind::Asterisk),
                b'&' => self.emit_single(TokenKind::Ampersand),
                b'@' => self.emit_single(TokenKind::At),
                b'|' => self.emit_single(TokenKind::Pipe),
                b'/' => self.emit_single(TokenKind::Slash),
                b'=' => self.lex_one_or_two(b'=', TokenKind::Assign, TokenKind::Equal),
                b'<' => self.lex_less(),
                b'>' => self.lex_greater(),
                other => {
                    return Err(LexError {
                        line: self.line,
                        character: other as char,
                    })
                }
            }
        }

        Ok(TokenStream::new(self.tokens))
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn emit_single(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.line));
        self.pos += 1;
    }

    /// Handles tokens whose second byte either extends them (`==`) or doesn't (`=`).
    fn lex_one_or_two(&mut self, second: u8, one: TokenKind, two: TokenKind) {
        let line = self.line;
        self.pos += 1;
        if self.peek_at(0) == Some(second) {
            self.pos += 1;
            self.tokens.push(Token::new(two, line));
        } else {
            self.tokens.push(Token::new(one, line));
        }
    }

    fn lex_less(&mut self) {
        let line = self.line;
        self.pos += 1;
        match self.peek_at(0) {
            Some(b'=') => {
                self.pos += 1;
                self.tokens.push(Token::new(TokenKind::LEqual, line));
            }
            Some(b'<') => {
                self.pos += 1;
                self.tokens.push(Token::new(TokenKind::DblLess, line));
            }
            _ => self.tokens.push(Token::new(TokenKind::Less, line)),
        }
    }

    fn lex_greater(&mut self) {
        let line = self.line;
        self.pos += 1;
        match self.peek_at(0) {
            Some(b'=') => {
                self.pos += 1;
                self.tokens.push(Token::new(TokenKind::GEqual, line));
            }
            Some(b'>') => {
                self.pos += 1;
                self.tokens.push(Token::new(TokenKind::DblGreater, line));
            }
            _ => self.tokens.push(Token::new(TokenKind::Greater, line)),
        }
    }

    fn lex_number(&mut self) {
        let line = self.line;
        let start = self.pos;
        while matches!(self.bytes.get(self.pos), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).expect("ASCII digits");
        // Parse as the unsigned magnitude, then cast: a digit run has no sign of its own, and
        // unary minus is a separate AST node (§3), so `-9223372036854775808` must round-trip to
        // i64::MIN through `Negate(Number(9223372036854775808))`, which only works if the literal
        // itself doesn't first saturate down to i64::MAX.
        let value = text.parse::<u64>().map(|v| v as i64).unwrap_or(i64::MAX);
        self.tokens.push(Token::new(TokenKind::Number(value), line));
    }

    fn lex_identifier(&mut self) {
        let line = self.line;
        let start = self.pos;
        while matches!(self.bytes.get(self.pos), Some(b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'))
        {
            self.pos += 1;
        }
        let word = std::str::from_utf8(&self.bytes[start..self.pos]).expect("ASCII identifier");
        let kind = match Keyword::lookup(word) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(word.to_owned()),
        };
        self.tokens.push(Token::new(kind, line));
    }

    /// Consumes `"..."` with no escape-sequence handling: a backslash is just a literal byte
    /// and does not suppress the closing quote. Undocumented by design (§4.1).
    fn lex_string(&mut self) -> LexResult<()> {
        let line = self.line;
        self.pos += 1; // opening quote
        let start = self.pos;
        while let Some(&byte) = self.bytes.get(self.pos) {
            if byte == b'"' {
                let content = self.bytes[start..self.pos].to_vec();
                self.pos += 1; // closing quote
                self.tokens.push(Token::new(TokenKind::String(content), line));
                return Ok(());
            }
            if byte == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }

        Err(LexError {
            line,
            character: '"',
        })
    }

    fn skip_line_comment(&mut self) {
        while let Some(&byte) = self.bytes.get(self.pos) {
            if byte == b'\n' {
                break;
            }
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .lex()
            .unwrap()
            .into_vec()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lexes_arithmetic_and_precedence_tokens() {
        assert_eq!(
            kinds("1 + 2 * 3"),
            vec![
                TokenKind::Number(1),
                TokenKind::Plus,
                TokenKind::Number(2),
                TokenKind::Asterisk,
                TokenKind::Number(3),
            ]
        );
    }

    #[test]
    fn distinguishes_assign_from_equal() {
        assert_eq!(kinds("="), vec![TokenKind::Assign]);
        assert_eq!(kinds("=="), vec![TokenKind::Equal]);
    }

    #[test]
    fn distinguishes_relational_and_shift_operators() {
        assert_eq!(kinds("<"), vec![TokenKind::Less]);
        assert_eq!(kinds("<="), vec![TokenKind::LEqual]);
        assert_eq!(kinds("<<"), vec![TokenKind::DblLess]);
        assert_eq!(kinds(">"), vec![TokenKind::Greater]);
        assert_eq!(kinds(">="), vec![TokenKind::GEqual]);
        assert_eq!(kinds(">>"), vec![TokenKind::DblGreater]);
    }

    #[test]
    fn recognizes_keywords_and_identifiers() {
        assert_eq!(
            kinds("func while2"),
            vec![
                TokenKind::Keyword(Keyword::Func),
                TokenKind::Identifier("while2".to_owned()),
            ]
        );
    }

    #[test]
    fn tracks_line_numbers_across_newlines() {
        let tokens = Lexer::new("var a;\nvar b;\n").lex().unwrap();
        let lines: Vec<usize> = tokens.into_vec().into_iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn line_comments_are_skipped() {
        assert_eq!(
            kinds("1 // comment\n+ 2"),
            vec![TokenKind::Number(1), TokenKind::Plus, TokenKind::Number(2)]
        );
    }

    #[test]
    fn strings_have_no_escape_handling() {
        assert_eq!(
            kinds(r#""hi""#),
            vec![TokenKind::String(b"hi".to_vec())]
        );
    }

    #[test]
    fn unterminated_string_is_a_lex_error() {
        assert!(Lexer::new("\"oops").lex().is_err());
    }

    #[test]
    fn unrecognized_byte_is_a_lex_error() {
        let err = Lexer::new("var a = 1 $ 2;").lex().unwrap_err();
        assert_eq!(err.character, '$');
    }
}
