mod common;

#[test]
fn missing_main_is_reported_by_name() {
    let message = common::run_err("func helper() { return 0; }");
    assert!(message.contains("main"), "message was: {message}");
}

#[test]
fn division_by_zero_is_a_runtime_error_not_a_panic() {
    let message = common::run_err("func main() { return 1 / 0; }");
    assert!(message.contains("division"), "message was: {message}");
}

#[test]
fn calling_an_unknown_function_is_a_runtime_error() {
    let message = common::run_err("func main() { return mystery(1); }");
    assert!(message.contains("mystery"), "message was: {message}");
}

#[test]
fn referencing_an_unknown_variable_is_a_runtime_error() {
    let message = common::run_err("func main() { return missing; }");
    assert!(message.contains("missing"), "message was: {message}");
}

#[test]
fn wrong_arity_call_is_a_runtime_error() {
    let message = common::run_err("func add(a, b) { return a + b; } func main() { return add(1); }");
    assert!(message.contains("add"), "message was: {message}");
}

#[test]
fn assigning_to_a_literal_is_rejected() {
    let message = common::run_err("func main() { 5 = 1; return 0; }");
    assert!(message.contains("assign"), "message was: {message}");
}

#[test]
fn duplicate_function_names_are_rejected() {
    let message =
        common::run_err("func dup() { return 1; } func dup() { return 2; } func main() { return 0; }");
    assert!(message.contains("dup"), "message was: {message}");
}

#[test]
fn unrecognized_byte_is_a_lex_error() {
    let message = common::run_err("func main() { return 1 $ 2; }");
    assert!(message.contains("line"), "message was: {message}");
}

#[test]
fn else_without_a_preceding_if_is_a_parse_error() {
    let message = common::run_err("func main() { else; }");
    assert!(message.contains("expected"), "message was: {message}");
}
