use std::{cell::RefCell, fs, io::Write, rc::Rc, time::Duration};

use lumina::{
    ast::Statement,
    get_result,
    interpreter::{
        evaluator::core::Context,
        ffi::{ForeignLibrary, ForeignLoader},
        lexer::tokenize,
        value::core::Value,
    },
    run_with_context,
};

/// A writer that keeps everything in memory so tests can observe what
/// `PRINTLINE` produced.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_capture(src: &str) -> (Result<(), Box<dyn std::error::Error>>, String) {
    let buffer = SharedBuffer::default();
    let mut context = Context::with_output(Box::new(buffer.clone()));

    let result = run_with_context(src, &mut context);
    let output = String::from_utf8(buffer.0.borrow().clone()).expect("output is UTF-8");

    (result, output)
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_output(src: &str, expected: &str) {
    let (result, output) = run_capture(src);
    if let Err(e) = result {
        panic!("Script failed: {e}\nSource:\n{src}");
    }
    assert_eq!(output, expected, "wrong output for:\n{src}");
}

#[test]
fn assignment_and_arithmetic() {
    assert_output("x: 10\n!PRINTLINE x * 2", "20\n");
    assert_output("x: 1 + 2 * 3\n!PRINTLINE x", "7\n");
    assert_output("x: ( 1 + 2 ) * 3\n!PRINTLINE x", "9\n");
    assert_output("x: 7 % 4\n!PRINTLINE x", "3\n");
}

#[test]
fn any_token_is_a_name() {
    assert_output("3: 55\n!PRINTLINE 3", "55\n");
    assert_output("🦀: 9\n!PRINTLINE 🦀", "9\n");
}

#[test]
fn deleting_a_variable_only_purges_it() {
    // After the purge, `3` resolves as a plain numeric literal again.
    assert_output("3: 55\n!PRINTLINE 3\nDELETE 3\n!PRINTLINE 3", "55\n3\n");
}

#[test]
fn deleting_a_literal_disables_it() {
    assert_failure("DELETE 5\n!PRINTLINE 5");
}

#[test]
fn deleting_an_operator_disables_it() {
    assert_failure("DELETE +\nRETURN 1 + 2");
    assert_success("DELETE +\nRETURN 2 * 3");
}

#[test]
fn deleting_a_keyword_disables_it() {
    assert_failure("DELETE WHILE\nWHILE 1 == 1\nEND");
    assert_failure("DELETE :\nx: 5");
}

#[test]
fn delete_delete_locks_the_door() {
    assert_success("DELETE DELETE");
    assert_failure("DELETE DELETE\nDELETE x");
}

#[test]
fn reverse_walks_back_over_executed_lines() {
    let src = "!PRINTLINE 1\n!PRINTLINE 2\nREVERSE\n!PRINTLINE 3\n!PRINTLINE 4";
    assert_output(src, "1\n2\n2\n1\n");
}

#[test]
fn reverse_toggle_is_idempotent() {
    let mut context = Context::new();

    context.execute(&Statement::Reverse { line: 1 }).unwrap();
    assert!(context.reverse);

    context.execute(&Statement::Reverse { line: 2 }).unwrap();
    assert!(!context.reverse);
}

#[test]
fn number_words_are_literals() {
    assert_output("!PRINTLINE one\n!PRINTLINE two+two", "1\n4\n");
    assert_output("!PRINTLINE TEN * ten", "100\n");
}

#[test]
fn functions_define_and_call() {
    assert_output("FN hi\n!PRINTLINE \"hey\"\nEND\n!hi", "hey\n");
}

#[test]
fn deleting_a_keyword_spelling_keeps_existing_functions() {
    // DELETE FN only kills that spelling of the keyword, not `hi`.
    let src = "FN hi\n!PRINTLINE \"hey\"\nEND\nDELETE FN\n!hi";
    assert_output(src, "hey\n");
    assert_failure("FN hi\nEND\nDELETE FN\nFN bye\nEND");
}

#[test]
fn deleting_a_function_name_removes_and_disables_it() {
    assert_failure("FN hi\nEND\nDELETE hi\n!hi");
}

#[test]
fn function_keyword_spellings() {
    assert_output("F a\n!PRINTLINE 1\nEND\n!a", "1\n");
    assert_output("FCTION b\n!PRINTLINE 2\nEND\n!b", "2\n");
    assert_output("function c\n!PRINTLINE 3\nEND\n!c", "3\n");
}

#[test]
fn redefining_a_function_overwrites_it() {
    let src = "FN f\n!PRINTLINE 1\nEND\nFN f\n!PRINTLINE 2\nEND\n!f";
    assert_output(src, "2\n");
}

#[test]
fn function_return_value_is_kept() {
    let result = get_result("FN f\nRETURN 6 * 7\nEND\n!f").unwrap();
    assert_eq!(result, Value::Number(42.0));
}

#[test]
fn arguments_to_user_functions_are_ignored() {
    assert_output("FN f\n!PRINTLINE inside\nEND\n!f 1, 2", "inside\n");
}

#[test]
fn function_bodies_get_a_fresh_frame() {
    // `x` of the caller is invisible inside, so it degrades to its text.
    assert_output("x: 5\nFN f\n!PRINTLINE x\nEND\n!f", "x\n");
}

#[test]
fn top_level_return_stops_the_program() {
    let (result, output) = run_capture("RETURN 5\n!PRINTLINE never");
    result.unwrap();
    assert_eq!(output, "");
    assert_eq!(get_result("RETURN 5").unwrap(), Value::Number(5.0));
}

#[test]
fn line_lifetimes_expire() {
    let src = "X 2: 5\n!PRINTLINE X\n!PRINTLINE X\n!PRINTLINE X";
    assert_output(src, "5\n5\nX\n");
}

#[test]
fn zero_lifetime_is_a_plain_assignment() {
    assert_output("X 0: 5\n!PRINTLINE X\n!PRINTLINE X", "5\n5\n");
    assert_output("X 0s: 5\n!PRINTLINE X\n!PRINTLINE X", "5\n5\n");
}

#[test]
fn retroactive_lifetime_binds_before_the_definition() {
    let src = "a: 1\n!PRINTLINE B\n!PRINTLINE B\nB -2: '''bye'''\n!PRINTLINE B";
    assert_output(src, "bye\nbye\nB\n");
}

#[test]
fn retroactive_lifetime_reaches_exactly_its_span() {
    // Defined on execution line 10 with lifetime -3: B exists on lines
    // 7, 8 and 9 and is unbound from 10 onward.
    let src = "a: 1\na: 2\na: 3\na: 4\na: 5\na: 6\n\
               !PRINTLINE B\n!PRINTLINE B\n!PRINTLINE B\n\
               B -3: '''bye'''\n!PRINTLINE B";
    assert_output(src, "bye\nbye\nbye\nB\n");
}

#[test]
fn time_lifetimes_expire_lazily() {
    let mut context = Context::with_output(Box::new(SharedBuffer::default()));

    run_with_context("X 0.01s: 5", &mut context).unwrap();
    assert_eq!(context.get_variable("x"), Some(&Value::Number(5.0)));

    std::thread::sleep(Duration::from_millis(25));
    run_with_context("tick: 1", &mut context).unwrap();
    assert_eq!(context.get_variable("x"), None);
}

#[test]
fn bad_lifetimes_are_rejected() {
    assert_failure("x foo: 1");
    assert_failure("x -2s: 1");
}

#[test]
fn previous_restores_the_old_binding() {
    assert_output("x: 1\nx: 2\nPREVIOUS x\n!PRINTLINE x", "1\n");
    assert_failure("x: 1\nPREVIOUS x");
    assert_failure("PREVIOUS ghost");
}

#[test]
fn while_loops_with_both_operator_spellings() {
    assert_output("i: 0\nWHILE i < 3\ni: i + 1\nEND\n!PRINTLINE i", "3\n");
    assert_output("i: 0\nWHILE i LESS 3\ni: i + 1\nEND\n!PRINTLINE i", "3\n");
}

#[test]
fn if_takes_comparisons_and_truthiness() {
    assert_output("IF 2 LESSEQ 2\n!PRINTLINE yes\nEND", "yes\n");
    assert_output("IF 3 NOTEQUAL 4\n!PRINTLINE yes\nEND", "yes\n");
    assert_output("IF \"hello\"\n!PRINTLINE yes\nEND", "yes\n");
    assert_output("IF zero\n!PRINTLINE no\nEND\n!PRINTLINE done", "done\n");
    assert_output("IF \"\"\n!PRINTLINE no\nEND\n!PRINTLINE done", "done\n");
}

#[test]
fn comparing_across_types_is_an_error() {
    assert_failure("IF 1 == \"1\"\nEND");
}

#[test]
fn strings_concatenate_with_plus() {
    assert_output("!PRINTLINE \"a\" + \"b\"", "ab\n");
    assert_output("!PRINTLINE 1 + \"b\"", "1b\n");
    assert_output("!PRINTLINE bare + 1", "bare1\n");
}

#[test]
fn quote_runs_nest_and_strip() {
    assert_output("!PRINTLINE \"\"\"hey there\"\"\"", "hey there\n");
    assert_output("!PRINTLINE ''don't''", "don't\n");
}

#[test]
fn case_is_insignificant_everywhere() {
    assert_output("X: 3\n!printline x", "3\n");
    assert_output("x: 1\nx: 2\nprevious X\n!PRINTLINE x", "1\n");
    assert_failure("delete +\nRETURN 1 + 1");
}

#[test]
fn printline_takes_multiple_arguments() {
    assert_output("!PRINTLINE 1 + 1, \"b\"", "2\nb\n");
    assert_output("!PRINTLINE", "");
}

#[test]
fn arithmetic_type_errors() {
    assert_failure("RETURN 1 - \"a\"");
    assert_failure("RETURN \"a\" * 2");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("RETURN 1 / 0");
    assert_success("RETURN 0 / 1");
}

#[test]
fn malformed_expressions_are_errors() {
    assert_failure("RETURN ( 1 + 2");
    assert_failure("RETURN 1 + 2 )");
    assert_failure("RETURN 1 +");
    assert_failure("RETURN");
}

#[test]
fn malformed_statements_are_errors() {
    assert_failure("WHILE 1 == 1");
    assert_failure("!PRINTLINE \"unterminated");
    assert_failure("END");
    assert_failure("!nosuch");
}

#[test]
fn booleans_print_lowercase() {
    assert_output("!PRINTLINE TRUE\n!PRINTLINE FALSE", "true\nfalse\n");
}

#[test]
fn probability_names_are_random_per_use() {
    let mut hits = 0;
    for _ in 0..10_000 {
        if get_result("RETURN MAYBE").unwrap() == Value::Bool(true) {
            hits += 1;
        }
    }

    let ratio = f64::from(hits) / 10_000.0;
    assert!((ratio - 0.5).abs() < 0.02, "MAYBE hit {ratio} of draws");
}

#[test]
fn true_and_false_are_degenerate_probabilities() {
    for _ in 0..100 {
        assert_eq!(get_result("RETURN TRUE").unwrap(), Value::Bool(true));
        assert_eq!(get_result("RETURN FALSE").unwrap(), Value::Bool(false));
    }
}

#[test]
fn variables_shadow_probability_names() {
    assert_output("MAYBE: 7\n!PRINTLINE maybe", "7\n");
}

#[test]
fn tokenizer_round_trips() {
    for src in ["x + y * ( 2 - z )",
                "a + \"b c\" * 2",
                "'''quoted bit''' % q",
                "🦀 / 2",
                "word"]
    {
        let tokens = tokenize(src, 1).unwrap();
        let joined = tokens.iter()
                           .map(ToString::to_string)
                           .collect::<Vec<_>>()
                           .join(" ");
        assert_eq!(tokenize(&joined, 1).unwrap(), tokens, "round trip of {src}");
    }
}

#[test]
fn import_registers_a_handle() {
    let mut context = Context::with_output(Box::new(SharedBuffer::default()));

    run_with_context("IMPORT \"somewhere\"", &mut context).unwrap();
    assert_eq!(context.libraries.len(), 1);
}

struct AdderLibrary;

impl ForeignLibrary for AdderLibrary {
    fn resolve(&self, name: &str, args: &[Value]) -> Option<Result<Value, String>> {
        if !name.eq_ignore_ascii_case("native_add") {
            return None;
        }

        let mut total = 0.0;
        for arg in args {
            match arg {
                Value::Number(n) => total += n,
                other => return Some(Err(format!("non-numeric argument {other}"))),
            }
        }
        Some(Ok(Value::Number(total)))
    }
}

struct AdderLoader;

impl ForeignLoader for AdderLoader {
    fn open(&self, _path: &str) -> Result<Box<dyn ForeignLibrary>, String> {
        Ok(Box::new(AdderLibrary))
    }
}

#[test]
fn foreign_calls_resolve_through_imported_handles() {
    let mut context = Context::with_output(Box::new(SharedBuffer::default()));
    context.loader = Box::new(AdderLoader);

    run_with_context("IMPORT \"adder\"\n!native_add 2, 3", &mut context).unwrap();
    assert_eq!(context.last_return, Value::Number(5.0));
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.lumina").expect("missing file");
    assert_success(&script);
}
