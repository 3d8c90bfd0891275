//! A tree-walking interpreter for a small imperative language with 64-bit integers, raw
//! pointers, fixed-size arrays, strings, and functions. The three pipeline stages — [`lexer`],
//! [`parser`], and [`interpreter`] — are each consumed once, left to right; the evaluator never
//! reinvokes the parser.
pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;

use std::io::Write;

use interpreter::Evaluator;
use lexer::Lexer;
use parser::Parser;

/// Runs a complete program from source text, writing built-in output to `out`. A thin
/// convenience wrapper over `Lexer` → `Parser` → `Evaluator::run`, used by both the CLI binary
/// and the integration tests under `tests/`.
pub fn run_source(source: &str, out: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = Lexer::new(source).lex()?;
    let root = Parser::new(tokens).parse()?;
    Evaluator::run(&root, out)?;
    Ok(())
}
