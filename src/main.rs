mod cli;

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser as ClapParser;
use log::debug;

use cli::Cli;
use tanager::ast::Root;
use tanager::interpreter::Evaluator;
use tanager::lexer::{Lexer, TokenStream};
use tanager::parser::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    simple_logger::init_with_level(cli.verbosity.into()).expect("failed to initialize logger");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(&cli.source)?;
    let source = String::from_utf8_lossy(&bytes);

    let tokens = Lexer::new(&source).lex()?;
    debug!("lexed {} tokens from {}", token_count(&tokens), cli.source.display());
    if cli.dump_tokens {
        dump_tokens(&tokens);
    }

    let root = Parser::new(tokens).parse()?;
    debug!("parsed {} top-level definition(s)", root.definitions.len());
    if cli.dump_ast {
        dump_ast(&root);
    }

    let stdout = io::stdout();
    let mut evaluator = Evaluator::run(&root, stdout.lock())?;

    if cli.dump_vars {
        dump_vars(&mut evaluator);
    }

    Ok(())
}

fn token_count(tokens: &TokenStream) -> usize {
    tokens.clone().into_vec().len()
}

fn dump_tokens(tokens: &TokenStream) {
    for token in tokens.clone().into_vec() {
        println!("{token:?}");
    }
}

fn dump_ast(root: &Root) {
    println!("{root:#?}");
}

fn dump_vars<W: Write>(evaluator: &mut Evaluator<'_, W>) {
    for (name, addr, value) in evaluator.global_snapshot() {
        println!("{name} @ {addr} = {value}");
    }
}
