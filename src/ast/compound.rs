use super::{Line, Statement};

/// `{ stmt* }`. Does *not* introduce its own variable scope: the language has two-level lexical
/// scoping (global + one local frame per function call), not nested block scoping (§4.3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    pub statements: Vec<Statement>,
    pub line: Line,
}
