mod common;

#[test]
fn array_indexing_reads_and_writes() {
    let out = common::run(
        "func main() { var a[3]; a[0] = 10; a[1] = 20; a[2] = 30; print(a[0] + a[1] + a[2]); }",
    );
    assert_eq!(out, "60\n");
}

#[test]
fn array_size_is_evaluated_once_at_declaration() {
    let out = common::run(
        "func main() {\
           var n = 4;\
           var a[n];\
           a[3] = 7;\
           print(a[3]);\
         }",
    );
    assert_eq!(out, "7\n");
}

#[test]
fn global_array_is_accepted_at_top_level() {
    let out = common::run("var table[2]; func main() { table[0] = 5; table[1] = 6; print(table[0] + table[1]); }");
    assert_eq!(out, "11\n");
}

#[test]
fn out_of_bounds_access_does_not_trap() {
    // Arrays are raw pointer arithmetic (§4.3): writing past the end is undefined, not an error.
    let out = common::run("func main() { var a[1]; a[5] = 3; print(a[5]); }");
    assert_eq!(out, "3\n");
}
