use super::{Expression, Line};

/// A call `name(args...)`, resolved against the user-function table and then the built-in table
/// at evaluation time (§4.3) — both live in one flat namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncCall {
    pub name: String,
    pub args: Vec<Expression>,
    pub line: Line,
}
