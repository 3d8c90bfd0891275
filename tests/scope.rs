mod common;

#[test]
fn while_loop_and_local_shadowing() {
    let out = common::run(
        "var x = 100;\
         func main() {\
           var x = 0;\
           while (x < 3) { print(x); x = x + 1; }\
           print(x);\
         }",
    );
    assert_eq!(out, "0\n1\n2\n3\n");
}

#[test]
fn global_remains_visible_when_no_local_shadows_it() {
    let out = common::run("var counter = 41; func main() { print(counter + 1); }");
    assert_eq!(out, "42\n");
}

#[test]
fn each_call_gets_its_own_local_frame() {
    // A non-recursive function's locals must not leak between separate calls.
    let out = common::run(
        "func make(n) { var v = n; return v; }\
         func main() { print(make(1)); print(make(2)); }",
    );
    assert_eq!(out, "1\n2\n");
}
