use super::Token;

/// A token sequence with a mutable cursor, consumed left-to-right by the parser without
/// backtracking beyond a single token of lookahead.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Look at the next unconsumed token without advancing the cursor.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// Consume and return the next token, advancing the cursor.
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// The line of the last token in the stream, used to report "unexpected end of input".
    pub fn last_line(&self) -> usize {
        self.tokens.last().map(|t| t.line).unwrap_or(1)
    }

    pub fn is_empty(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Consumes the stream, discarding cursor position, and returns the raw token vector.
    /// Used by debug dumps and tests.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
