use super::{ArrDef, Compound, Expression, If, Line, Return, VarDef, While};

/// A statement node. Covers the full statement grammar of §4.2 except top-level definitions,
/// which live in [`super::Definition`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    VarDef(VarDef),
    ArrDef(ArrDef),
    If(If),
    While(While),
    Return(Return),
    Compound(Compound),
    Expression(Expression),
}

impl Statement {
    pub fn line(&self) -> Line {
        match self {
            Statement::VarDef(v) => v.line,
            Statement::ArrDef(a) => a.line,
            Statement::If(i) => i.line,
            Statement::While(w) => w.line,
            Statement::Return(r) => r.line,
            Statement::Compound(c) => c.line,
            Statement::Expression(e) => e.line(),
        }
    }
}
