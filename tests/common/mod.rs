//! Shared helper for integration tests: runs a source string through the full
//! lexer → parser → evaluator pipeline and returns whatever it wrote to stdout.
use tanager::run_source;

pub fn run(source: &str) -> String {
    let mut out = Vec::new();
    run_source(source, &mut out).expect("program should run without error");
    String::from_utf8(out).expect("built-in output should be valid UTF-8")
}

/// Like [`run`], but surfaces the error message instead of panicking, for tests that assert on
/// failure.
pub fn run_err(source: &str) -> String {
    let mut out = Vec::new();
    match run_source(source, &mut out) {
        Ok(()) => panic!("expected an error, program ran to completion"),
        Err(err) => err.to_string(),
    }
}
