use std::path::PathBuf;

use clap::{Parser as ClapParser, ValueEnum};

/// The entire configuration surface of the interpreter — there is no config file (§10).
#[derive(Debug, ClapParser)]
#[command(name = "tanager", about = "A tree-walking interpreter for a small imperative language")]
pub struct Cli {
    /// Path to the source file to run.
    pub source: PathBuf,

    /// Print the token stream produced by the lexer before parsing.
    #[arg(long)]
    pub dump_tokens: bool,

    /// Print the parsed AST before evaluation.
    #[arg(long)]
    pub dump_ast: bool,

    /// Print the final global-variable snapshot after `main` returns.
    #[arg(long)]
    pub dump_vars: bool,

    /// Verbosity of internal diagnostic logging.
    #[arg(long, value_enum, default_value_t = LogLevel::Error)]
    pub verbosity: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
