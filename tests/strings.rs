mod common;

#[test]
fn puts_writes_the_string_followed_by_newline() {
    let out = common::run(r#"func main() { puts("hi"); }"#);
    assert_eq!(out, "hi\n");
}

#[test]
fn identical_literals_intern_to_the_same_address() {
    let out = common::run(
        r#"func main() {
             var a = "hi";
             var b = "hi";
             print(a == b);
           }"#,
    );
    assert_eq!(out, "1\n");
}

#[test]
fn puts_called_twice_on_the_same_literal() {
    let out = common::run(r#"func main() { puts("hi"); puts("hi"); }"#);
    assert_eq!(out, "hi\nhi\n");
}

#[test]
fn putc_and_print_share_stdout() {
    let out = common::run("func main() { putc(65); putc(10); print(1); }");
    assert_eq!(out, "A\n1\n");
}
