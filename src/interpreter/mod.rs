//! The tree-walking evaluator (§4.3): scoped variable environments, function dispatch, pointer
//! semantics, array address arithmetic, and return-unwind control flow.
mod builtins;
mod error;
mod memory;
mod scope;

pub use error::{RuntimeError, RuntimeResult};
pub use memory::Memory;
pub use scope::Scope;

use std::collections::HashMap;
use std::io::Write;

use log::{debug, trace};

use crate::ast::{
    BinOp, BinOpKind, Compound, Definition, Expression, FuncCall, FuncDef, Root, Statement, UnOp,
    UnOpKind, Variable,
};

/// How deep user-function calls may nest before the interpreter gives up and reports a runtime
/// error instead of letting the host stack overflow (§5 "Recursion").
const MAX_CALL_DEPTH: usize = 1024;

/// Non-local exit from a function body, threaded as the `Ok` value of every statement-evaluation
/// call (§9 design note, replacing the source's process-wide "returning" flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Normal,
    Returning(i64),
}

/// Owns every piece of process-wide state the original implementation kept as module globals:
/// the function tables, the scope stack, the memory arena, and the string pool (§9 "Globals as
/// process-wide state"). `'ast` ties borrowed function definitions to the `Root` being evaluated.
pub struct Evaluator<'ast, W: Write> {
    functions: HashMap<&'ast str, &'ast FuncDef>,
    scope: Scope,
    memory: Memory,
    strings: HashMap<Vec<u8>, i64>,
    out: W,
}

impl<'ast, W: Write> Evaluator<'ast, W> {
    fn new(out: W) -> Self {
        Self {
            functions: HashMap::new(),
            scope: Scope::new(),
            memory: Memory::new(),
            strings: HashMap::new(),
            out,
        }
    }

    /// Runs a parsed program to completion: installs globals and functions, requires and calls
    /// `main`, and returns the evaluator so callers can inspect the final global-scope snapshot
    /// (`--dump-vars`) before it drops and tears everything down (§4.3 step 5).
    pub fn run(root: &'ast Root, out: W) -> RuntimeResult<Self> {
        let mut eval = Self::new(out);
        eval.install(root)?;
        eval.call_main()?;
        Ok(eval)
    }

    fn install(&mut self, root: &'ast Root) -> RuntimeResult<()> {
        for def in &root.definitions {
            match def {
                Definition::FuncDef(f) => {
                    if self.functions.insert(f.name.as_str(), f).is_some() {
                        return Err(RuntimeError::new(
                            f.line,
                            format!("duplicate function '{}'", f.name),
                        ));
                    }
                    debug!("registered function `{}`", f.name);
                }
                Definition::VarDef(v) => {
                    let value = match &v.init {
                        Some(expr) => self.eval_expr(expr)?,
                        None => 0,
                    };
                    let addr = self.memory.allocate_i64();
                    self.memory.write_i64(addr, value);
                    self.scope.define_global(v.line, &v.name, addr)?;
                }
                Definition::ArrDef(a) => {
                    let size = self.eval_expr(&a.size)?;
                    let base = self.memory.allocate(size.max(0) as usize * 8);
                    let cell = self.memory.allocate_i64();
                    self.memory.write_i64(cell, base);
                    self.scope.define_global(a.line, &a.name, cell)?;
                }
            }
        }
        Ok(())
    }

    fn call_main(&mut self) -> RuntimeResult<()> {
        let main = *self
            .functions
            .get("main")
            .ok_or_else(|| RuntimeError::new(0, "no function named 'main' found"))?;
        self.call_function(main, &[], 0)?;
        Ok(())
    }

    /// The final global-scope snapshot used by `--dump-vars`: name, address, and current value.
    pub fn global_snapshot(&mut self) -> Vec<(String, i64, i64)> {
        let addrs: Vec<(String, i64)> = self
            .scope
            .globals()
            .map(|(name, addr)| (name.to_owned(), addr))
            .collect();
        addrs
            .into_iter()
            .map(|(name, addr)| {
                let value = self.memory.read_i64(addr);
                (name, addr, value)
            })
            .collect()
    }

    fn call_function(&mut self, func: &'ast FuncDef, args: &[i64], line: usize) -> RuntimeResult<i64> {
        if func.params.len() != args.len() {
            return Err(RuntimeError::new(
                line,
                format!(
                    "function '{}' expects {} argument(s), got {}",
                    func.name,
                    func.params.len(),
                    args.len()
                ),
            ));
        }
        if self.scope.depth() >= MAX_CALL_DEPTH {
            return Err(RuntimeError::new(line, "maximum call depth exceeded"));
        }

        self.scope.push_frame();
        trace!("entering function `{}` at depth {}", func.name, self.scope.depth());

        let bind_result = (|| {
            for (param, value) in func.params.iter().zip(args) {
                let addr = self.memory.allocate_i64();
                self.memory.write_i64(addr, *value);
                self.scope.define_local(func.line, param, addr)?;
            }
            Ok(())
        })();

        let result = match bind_result {
            Ok(()) => self.exec_compound(&func.body),
            Err(e) => Err(e),
        };

        self.scope.pop_frame();

        match result? {
            Signal::Returning(value) => Ok(value),
            Signal::Normal => Ok(0),
        }
    }

    fn exec_compound(&mut self, compound: &'ast Compound) -> RuntimeResult<Signal> {
        for stmt in &compound.statements {
            match self.exec_stmt(stmt)? {
                Signal::Normal => continue,
                returning => return Ok(returning),
            }
        }
        Ok(Signal::Normal)
    }

    fn exec_stmt(&mut self, stmt: &'ast Statement) -> RuntimeResult<Signal> {
        match stmt {
            Statement::VarDef(v) => {
                let value = match &v.init {
                    Some(expr) => self.eval_expr(expr)?,
                    None => 0,
                };
                let addr = self.memory.allocate_i64();
                self.memory.write_i64(addr, value);
                self.scope.define_local(v.line, &v.name, addr)?;
                Ok(Signal::Normal)
            }
            Statement::ArrDef(a) => {
                let size = self.eval_expr(&a.size)?;
                let base = self.memory.allocate(size.max(0) as usize * 8);
                let cell = self.memory.allocate_i64();
                self.memory.write_i64(cell, base);
                self.scope.define_local(a.line, &a.name, cell)?;
                Ok(Signal::Normal)
            }
            Statement::If(i) => {
                if self.eval_expr(&i.condition)? != 0 {
                    self.exec_stmt(&i.then_branch)
                } else if let Some(else_branch) = &i.else_branch {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(Signal::Normal)
                }
            }
            Statement::While(w) => {
                while self.eval_expr(&w.condition)? != 0 {
                    match self.exec_stmt(&w.body)? {
                        Signal::Normal => continue,
                        returning => return Ok(returning),
                    }
                }
                Ok(Signal::Normal)
            }
            Statement::Return(r) => {
                let value = self.eval_expr(&r.value)?;
                Ok(Signal::Returning(value))
            }
            Statement::Compound(c) => self.exec_compound(c),
            Statement::Expression(e) => {
                self.eval_expr(e)?;
                Ok(Signal::Normal)
            }
        }
    }

    fn eval_expr(&mut self, expr: &'ast Expression) -> RuntimeResult<i64> {
        match expr {
            Expression::Number(n) => Ok(n.value),
            Expression::Str(s) => Ok(self.intern(&s.value)),
            Expression::Variable(v) => self.read_var(v),
            Expression::UnOp(u) => self.eval_unop(u),
            Expression::BinOp(b) => self.eval_binop(b),
            Expression::FuncCall(c) => self.eval_call(c),
        }
    }

    fn read_var(&mut self, v: &Variable) -> RuntimeResult<i64> {
        let addr = self.address_of(v)?;
        Ok(self.memory.read_i64(addr))
    }

    fn address_of(&self, v: &Variable) -> RuntimeResult<i64> {
        self.scope
            .lookup(&v.name)
            .ok_or_else(|| RuntimeError::new(v.line, format!("unknown variable '{}'", v.name)))
    }

    fn eval_unop(&mut self, u: &'ast UnOp) -> RuntimeResult<i64> {
        match u.kind {
            UnOpKind::Negate => Ok(self.eval_expr(&u.operand)?.wrapping_neg()),
            UnOpKind::Deref => {
                let addr = self.eval_expr(&u.operand)?;
                Ok(self.memory.read_i64(addr))
            }
            UnOpKind::AddressOf => match u.operand.as_ref() {
                Expression::Variable(v) => self.address_of(v),
                _ => unreachable!("the parser only ever builds AddressOf over a bare identifier"),
            },
        }
    }

    fn eval_binop(&mut self, b: &'ast BinOp) -> RuntimeResult<i64> {
        if b.kind == BinOpKind::Assign {
            return self.eval_assign(b);
        }

        let lhs = self.eval_expr(&b.lhs)?;
        let rhs = self.eval_expr(&b.rhs)?;
        Ok(match b.kind {
            BinOpKind::Add => lhs.wrapping_add(rhs),
            BinOpKind::Sub => lhs.wrapping_sub(rhs),
            BinOpKind::Mul => lhs.wrapping_mul(rhs),
            BinOpKind::Div => {
                if rhs == 0 {
                    return Err(RuntimeError::new(b.line, "division by zero"));
                }
                lhs.wrapping_div(rhs)
            }
            BinOpKind::Equal => (lhs == rhs) as i64,
            BinOpKind::Less => (lhs < rhs) as i64,
            BinOpKind::LEqual => (lhs <= rhs) as i64,
            BinOpKind::Greater => (lhs > rhs) as i64,
            BinOpKind::GEqual => (lhs >= rhs) as i64,
            BinOpKind::BitAnd => lhs & rhs,
            BinOpKind::BitOr => lhs | rhs,
            BinOpKind::ShLeft => lhs.wrapping_shl(rhs as u32),
            BinOpKind::ShRight => lhs.wrapping_shr(rhs as u32),
            BinOpKind::Assign => unreachable!("handled above"),
        })
    }

    /// `lhs` is restricted to a `Variable` or a `UnOp(Deref, _)` (§4.2 "Assignment semantics");
    /// the left side's address is resolved before the right side is evaluated (§5 "Ordering").
    fn eval_assign(&mut self, b: &'ast BinOp) -> RuntimeResult<i64> {
        let addr = match b.lhs.as_ref() {
            Expression::Variable(v) => self.address_of(v)?,
            Expression::UnOp(UnOp {
                kind: UnOpKind::Deref,
                operand,
                ..
            }) => self.eval_expr(operand)?,
            _ => {
                return Err(RuntimeError::new(
                    b.line,
                    "cannot assign to this expression",
                ))
            }
        };
        let value = self.eval_expr(&b.rhs)?;
        self.memory.write_i64(addr, value);
        Ok(value)
    }

    fn eval_call(&mut self, call: &'ast FuncCall) -> RuntimeResult<i64> {
        if let Some(func) = self.functions.get(call.name.as_str()).copied() {
            let args = self.eval_args(&call.args)?;
            self.call_function(func, &args, call.line)
        } else if let Some(builtin) = builtins::lookup(&call.name) {
            if builtin.arity != call.args.len() {
                return Err(RuntimeError::new(
                    call.line,
                    format!(
                        "built-in '{}' expects {} argument(s), got {}",
                        builtin.name,
                        builtin.arity,
                        call.args.len()
                    ),
                ));
            }
            let args = self.eval_args(&call.args)?;
            (builtin.call)(&mut self.out, &self.memory, &args, call.line)
        } else {
            Err(RuntimeError::new(
                call.line,
                format!("unknown function '{}'", call.name),
            ))
        }
    }

    /// Arguments are evaluated in the *caller's* scope, left to right, into a staging buffer
    /// before any callee scope exists (§4.3 "Function call protocol", step b).
    fn eval_args(&mut self, args: &'ast [Expression]) -> RuntimeResult<Vec<i64>> {
        args.iter().map(|arg| self.eval_expr(arg)).collect()
    }

    fn intern(&mut self, bytes: &[u8]) -> i64 {
        if let Some(&addr) = self.strings.get(bytes) {
            return addr;
        }
        let mut data = bytes.to_vec();
        data.push(0);
        let addr = self.memory.allocate(data.len());
        self.memory.write_bytes(addr, &data);
        self.strings.insert(bytes.to_vec(), addr);
        addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn run(source: &str) -> RuntimeResult<String> {
        let tokens = Lexer::new(source).lex().expect("lex");
        let root = Parser::new(tokens).parse().expect("parse");
        let mut out = Vec::new();
        Evaluator::run(&root, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn arithmetic_and_precedence() {
        let out = run("func main() { print(1 + 2 * 3); print((1 + 2) * 3); }").unwrap();
        assert_eq!(out, "7\n9\n");
    }

    #[test]
    fn recursive_factorial() {
        let out = run(
            "func fact(n) { if (n <= 1) return 1; return n * fact(n - 1); }\n\
             func main() { print(fact(5)); }",
        )
        .unwrap();
        assert_eq!(out, "120\n");
    }

    #[test]
    fn while_loop_and_local_shadowing() {
        let out = run(
            "var x = 100;\n\
             func main() { var x = 0; while (x < 3) { print(x); x = x + 1; } print(x); }",
        )
        .unwrap();
        assert_eq!(out, "0\n1\n2\n3\n");
    }

    #[test]
    fn address_of_and_deref() {
        let out = run(
            "func main() { var a = 7; var p = &a; @p = @p + 1; print(a); }",
        )
        .unwrap();
        assert_eq!(out, "8\n");
    }

    #[test]
    fn array_indexing() {
        let out = run(
            "func main() { var a[3]; a[0] = 10; a[1] = 20; a[2] = 30; print(a[0] + a[1] + a[2]); }",
        )
        .unwrap();
        assert_eq!(out, "60\n");
    }

    #[test]
    fn string_pool_interns_identical_literals() {
        let out = run(r#"func main() { puts("hi"); puts("hi"); }"#).unwrap();
        assert_eq!(out, "hi\nhi\n");
    }

    #[test]
    fn missing_main_is_a_runtime_error() {
        let err = run("func helper() { return 0; }").unwrap_err();
        assert!(err.message.contains("main"));
    }

    #[test]
    fn division_by_zero_is_trapped() {
        let err = run("func main() { return 1 / 0; }").unwrap_err();
        assert!(err.message.contains("division"));
    }

    #[test]
    fn chained_assignment_is_right_associative_in_value() {
        let out = run("func main() { var a = 0; var b = 0; a = b = 5; print(a); print(b); }").unwrap();
        assert_eq!(out, "5\n5\n");
    }

    #[test]
    fn zero_iteration_while_runs_body_zero_times() {
        let out = run("func main() { var x = 0; while (x < 0) { print(99); } print(x); }").unwrap();
        assert_eq!(out, "0\n");
    }

    #[test]
    fn return_unwinds_out_of_nested_compounds() {
        let out = run(
            "func f() { { { return 1; } } return 2; }\n\
             func main() { print(f()); }",
        )
        .unwrap();
        assert_eq!(out, "1\n");
    }

    #[test]
    fn unary_minus_on_most_negative_i64_wraps_rather_than_panics() {
        let out = run(&format!(
            "func main() {{ var m = {}; print(-m); }}",
            i64::MIN
        ))
        .unwrap();
        assert_eq!(out, format!("{}\n", i64::MIN));
    }
}
