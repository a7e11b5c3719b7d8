// Expected diagnostics live next to each case as `.stderr`. Regenerate them
// with `TRYBUILD=overwrite` after a toolchain bump changes rustc's wording.

#[test]
fn rejected_at_build_time() {
  let test = trybuild::TestCases::new();
  test.compile_fail("tests/compile_fail/negative_const_param.rs");
  test.compile_fail("tests/compile_fail/negative_macro.rs");
  test.compile_fail("tests/compile_fail/const_overflow.rs");
  test.compile_fail("tests/compile_fail/const_overflow_large.rs");
  test.compile_fail("tests/compile_fail/macro_overflow.rs");
  test.compile_fail("tests/compile_fail/macro_non_literal.rs");
}

#[test]
fn accepted_at_build_time() {
  let test = trybuild::TestCases::new();
  test.pass("tests/compile_pass/const_items.rs");
}
