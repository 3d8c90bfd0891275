//! The built-in function table (§6). Built-ins live in the same namespace as user functions but
//! are consulted second, so a user-defined `print` would shadow this one.
use std::collections::HashMap;
use std::io::{self, Read, Write};

use once_cell::sync::Lazy;

use super::error::{RuntimeError, RuntimeResult};
use super::memory::Memory;

pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    pub call: fn(&mut dyn Write, &Memory, &[i64], usize) -> RuntimeResult<i64>,
}

static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "print",
        arity: 1,
        call: print,
    },
    Builtin {
        name: "printu",
        arity: 1,
        call: printu,
    },
    Builtin {
        name: "putc",
        arity: 1,
        call: putc,
    },
    Builtin {
        name: "puts",
        arity: 1,
        call: puts,
    },
    Builtin {
        name: "input_num",
        arity: 0,
        call: input_num,
    },
];

/// Indexed by name once, lazily, on first lookup — the same dispatch-table idiom as the
/// teacher's lexer keyword map, just keyed by built-in name instead of leading character.
static BUILTIN_TABLE: Lazy<HashMap<&'static str, &'static Builtin>> =
    Lazy::new(|| BUILTINS.iter().map(|b| (b.name, b)).collect());

pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.get(name).copied()
}

fn io_err(line: usize, err: io::Error) -> RuntimeError {
    RuntimeError::new(line, format!("I/O error: {err}"))
}

fn print(out: &mut dyn Write, _mem: &Memory, args: &[i64], line: usize) -> RuntimeResult<i64> {
    writeln!(out, "{}", args[0]).map_err(|e| io_err(line, e))?;
    Ok(0)
}

fn printu(out: &mut dyn Write, _mem: &Memory, args: &[i64], line: usize) -> RuntimeResult<i64> {
    writeln!(out, "{}", args[0] as u64).map_err(|e| io_err(line, e))?;
    Ok(0)
}

fn putc(out: &mut dyn Write, _mem: &Memory, args: &[i64], line: usize) -> RuntimeResult<i64> {
    out.write_all(&[(args[0] & 0xff) as u8])
        .map_err(|e| io_err(line, e))?;
    Ok(0)
}

fn puts(out: &mut dyn Write, mem: &Memory, args: &[i64], line: usize) -> RuntimeResult<i64> {
    let bytes = mem.read_cstring(args[0]);
    out.write_all(&bytes).map_err(|e| io_err(line, e))?;
    writeln!(out).map_err(|e| io_err(line, e))?;
    Ok(0)
}

fn input_num(_out: &mut dyn Write, _mem: &Memory, _args: &[i64], _line: usize) -> RuntimeResult<i64> {
    let mut buf = [0u8; 10];
    let n = io::stdin().read(&mut buf).unwrap_or(0);
    // A non-numeric line and EOF are indistinguishable to the caller (§9): both yield 0.
    Ok(String::from_utf8_lossy(&buf[..n])
        .trim()
        .parse()
        .unwrap_or(0))
}
