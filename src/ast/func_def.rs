use super::{Compound, Line};

/// `func NAME(params) body`. Functions do not capture enclosing scope — there are no closures
/// (§1) — so the body is evaluated with only the global scope and a fresh local frame in view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Compound,
    pub line: Line,
}
