mod common;

#[test]
fn empty_argument_list() {
    let out = common::run("func greet() { print(1); } func main() { greet(); }");
    assert_eq!(out, "1\n");
}

#[test]
fn unary_minus_on_most_negative_i64_wraps_instead_of_panicking() {
    let out = common::run(&format!("func main() {{ var m = {}; print(-m); }}", i64::MIN));
    assert_eq!(out, format!("{}\n", i64::MIN));
}

#[test]
fn zero_iteration_while_runs_body_zero_times() {
    let out = common::run("func main() { var x = 0; while (x < 0) { print(99); } print(x); }");
    assert_eq!(out, "0\n");
}

#[test]
fn return_unwinds_only_the_enclosing_function() {
    let out = common::run(
        "func inner() { { { return 1; } } return 2; }\
         func main() { print(inner()); print(7); }",
    );
    assert_eq!(out, "1\n7\n");
}

#[test]
fn assignment_value_equals_assigned_value_and_chains() {
    let out = common::run("func main() { var a = 0; var b = 0; print(a = b = 5); print(a); print(b); }");
    assert_eq!(out, "5\n5\n5\n");
}

#[test]
fn else_binds_to_the_innermost_if() {
    let out = common::run(
        "func main() { if (1) if (0) print(1); else print(2); }",
    );
    assert_eq!(out, "2\n");
}

#[test]
fn while_terminates_when_return_unwinds_out_of_the_body() {
    let out = common::run(
        "func firstOver(limit) {\
           var i = 0;\
           while (1) {\
             if (i > limit) return i;\
             i = i + 1;\
           }\
         }\
         func main() { print(firstOver(3)); }",
    );
    assert_eq!(out, "4\n");
}
