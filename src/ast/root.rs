use super::{ArrDef, FuncDef, Line, VarDef};

/// A top-level declaration. The grammar's `var_def` production yields either [`VarDef`] or
/// [`ArrDef`] depending on whether the bracketed-size form was used (§4.2); both are valid at
/// the top level alongside [`FuncDef`] (see DESIGN.md for why the bracket form is not singled
/// out as a top-level exception).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    FuncDef(FuncDef),
    VarDef(VarDef),
    ArrDef(ArrDef),
}

impl Definition {
    pub fn line(&self) -> Line {
        match self {
            Definition::FuncDef(f) => f.line,
            Definition::VarDef(v) => v.line,
            Definition::ArrDef(a) => a.line,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Definition::FuncDef(f) => &f.name,
            Definition::VarDef(v) => &v.name,
            Definition::ArrDef(a) => &a.name,
        }
    }
}

/// The root of a parsed program: an ordered sequence of top-level definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Root {
    pub definitions: Vec<Definition>,
}
