//! AST node definitions produced by the parser and walked by the evaluator.
//!
//! Each node owns its children directly (`Box`, `Vec`); the tree is a strict spanning tree with
//! no sharing and no cycles, so ordinary `Drop` frees it — there is no hand-written free pass.
mod arr_def;
mod binary;
mod compound;
mod expression;
mod func_call;
mod func_def;
mod if_stmt;
mod number;
mod return_stmt;
mod root;
mod statement;
mod string_lit;
mod unary;
mod var_def;
mod variable;
mod while_stmt;

pub use arr_def::*;
pub use binary::*;
pub use compound::*;
pub use expression::*;
pub use func_call::*;
pub use func_def::*;
pub use if_stmt::*;
pub use number::*;
pub use return_stmt::*;
pub use root::*;
pub use statement::*;
pub use string_lit::*;
pub use unary::*;
pub use var_def::*;
pub use variable::*;
pub use while_stmt::*;

/// Every node carries the 1-based source line it was parsed from, for diagnostics.
pub type Line = usize;
