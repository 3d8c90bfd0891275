mod common;

#[test]
fn arithmetic_and_precedence() {
    let out = common::run("func main() { print(1 + 2 * 3); print((1 + 2) * 3); }");
    assert_eq!(out, "7\n9\n");
}

#[test]
fn comparisons_and_bitwise_operators() {
    let out = common::run(
        "func main() {\
           print(3 < 5);\
           print(5 < 3);\
           print(6 & 3);\
           print(6 | 1);\
           print(1 << 4);\
           print(256 >> 4);\
         }",
    );
    assert_eq!(out, "1\n0\n2\n7\n16\n16\n");
}
