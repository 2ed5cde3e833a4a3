use std::fs;

use curria::{
    error::RuntimeError,
    get_result,
    interpreter::{
        evaluator::core::{declare, resolve, Namespace},
        lexer::separate,
        value::core::Value,
    },
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```curria") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn context() -> Namespace {
    Namespace::with_builtins()
}

fn eval(namespace: &Namespace, text: &str) -> Value {
    resolve(text, namespace).unwrap_or_else(|e| panic!("'{text}' failed: {e}"))
}

fn declare_source(namespace: &mut Namespace, line: &str) {
    let (signature, body) = line.split_once('=').expect("declaration needs '='");
    let tokens = separate(signature);
    let (name, patterns) = tokens.split_first().expect("declaration needs a name");

    declare(name, patterns, body.trim(), namespace).unwrap_or_else(|e| {
                                                       panic!("declaring '{line}' failed: {e}")
                                                   });
}

#[test]
fn tokenizer_keeps_atomic_tokens_whole() {
    assert_eq!(separate("abc"), vec!["abc"]);
    assert_eq!(separate("  abc  "), vec!["abc"]);
    assert_eq!(separate("a b  c"), vec!["a", "b", "c"]);
    assert_eq!(separate(""), Vec::<&str>::new());
    assert_eq!(separate("   "), Vec::<&str>::new());
}

#[test]
fn tokenizer_never_splits_inside_groups() {
    assert_eq!(separate("f (1 2) \"a b\" [3 4]"),
               vec!["f", "(1 2)", "\"a b\"", "[3 4]"]);
    assert_eq!(separate("(a (b c)) d"), vec!["(a (b c))", "d"]);
    assert_eq!(separate("[1 [2 3] 4]"), vec!["[1 [2 3] 4]"]);
    assert_eq!(separate("\"spaces   inside\" x"),
               vec!["\"spaces   inside\"", "x"]);
}

#[test]
fn literal_round_trip() {
    let namespace = context();

    assert_eq!(eval(&namespace, "3"), Value::from(3));
    assert_eq!(eval(&namespace, "-7"), Value::from(-7));
    assert_eq!(eval(&namespace, "3.5"), Value::from(3.5));
    assert_eq!(eval(&namespace, "\"hi\""), Value::from("hi"));
    assert_eq!(eval(&namespace, "[1 2 3]"),
               Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]));
}

#[test]
fn integers_are_preferred_over_reals() {
    let namespace = context();

    assert_eq!(eval(&namespace, "3"), Value::from(3));
    assert_eq!(eval(&namespace, "3.0"), Value::from(3.0));
    assert_ne!(eval(&namespace, "3"), eval(&namespace, "3.0"));
}

#[test]
fn enclosing_parentheses_are_stripped() {
    let namespace = context();

    assert_eq!(eval(&namespace, "((3))"), Value::from(3));
    assert_eq!(eval(&namespace, "( 3 )"), Value::from(3));
    assert_eq!(eval(&namespace, "(add 2 3)"), Value::from(5));
}

#[test]
fn arrays_may_be_nested_and_heterogeneous() {
    let namespace = context();

    assert_eq!(eval(&namespace, "[1 \"two\" [3 4]]"),
               Value::from(vec![Value::from(1),
                                Value::from("two"),
                                Value::from(vec![Value::from(3), Value::from(4)])]));
}

#[test]
fn currying_is_associative() {
    let namespace = context();

    assert_eq!(eval(&namespace, "add 2 3"), Value::from(5));
    assert_eq!(eval(&namespace, "(add 2) 3"), Value::from(5));

    let partial = eval(&namespace, "add 2");
    match partial {
        Value::Function(function) => {
            assert_eq!(function.extend(vec![Value::from(3)], &namespace).unwrap(),
                       Value::from(5));
        },
        other => panic!("expected a pending function, found {other}"),
    }
}

#[test]
fn overloads_are_eliminated_in_declaration_order() {
    let mut namespace = context();
    declare_source(&mut namespace, "f 0 = \"zero\"");
    declare_source(&mut namespace, "f n = \"nonzero\"");

    assert_eq!(eval(&namespace, "f 0"), Value::from("zero"));
    assert_eq!(eval(&namespace, "f 5"), Value::from("nonzero"));

    // With zero arguments, nothing is eliminated yet: both overloads remain.
    match eval(&namespace, "f") {
        Value::Function(function) => {
            assert_eq!(function.definitions.len(), 2);
            assert!(function.given.is_empty());
        },
        other => panic!("expected a pending function, found {other}"),
    }
}

#[test]
fn array_literal_patterns_match_structurally() {
    let mut namespace = context();
    declare_source(&mut namespace, "g [0 0] = \"origin\"");
    declare_source(&mut namespace, "g v = \"elsewhere\"");

    assert_eq!(eval(&namespace, "g [0 0]"), Value::from("origin"));
    assert_eq!(eval(&namespace, "g [1 0]"), Value::from("elsewhere"));
    assert_eq!(eval(&namespace, "g 0"), Value::from("elsewhere"));
}

#[test]
fn unknown_names_stay_symbolic() {
    let namespace = context();

    let pending = eval(&namespace, "mystery 1 2");
    assert_eq!(pending.to_string(), "mystery 1 2");

    match pending {
        Value::Function(function) => {
            assert!(function.definitions.is_empty());
            assert_eq!(function.given.len(), 2);
        },
        other => panic!("expected a symbolic value, found {other}"),
    }
}

#[test]
fn builtins_defer_on_symbolic_operands() {
    let mut namespace = context();
    declare_source(&mut namespace, "inc n = add n 1");

    assert_eq!(eval(&namespace, "add x 3").to_string(), "add x 3");
    assert_eq!(eval(&namespace, "add (add 1) 3").to_string(), "add (add 1) 3");
    assert_eq!(eval(&namespace, "map inc xs").to_string(), "map inc xs");
}

#[test]
fn saturated_definitions_reject_extra_arguments() {
    let mut namespace = context();
    declare_source(&mut namespace, "two = 2");

    assert_eq!(eval(&namespace, "two"), Value::from(2));

    let error = resolve("two 5", &namespace).unwrap_err();
    assert!(matches!(error, RuntimeError::TooManyArguments { .. }));

    let error = resolve("add 1 2 3", &namespace).unwrap_err();
    assert!(matches!(error, RuntimeError::TooManyArguments { .. }));
}

#[test]
fn recursion_through_the_global_namespace() {
    let mut namespace = context();
    declare_source(&mut namespace, "fact 0 = 1");
    declare_source(&mut namespace, "fact n = mult n (fact (sub n 1))");

    assert_eq!(eval(&namespace, "fact 0"), Value::from(1));
    assert_eq!(eval(&namespace, "fact 5"), Value::from(120));
}

#[test]
fn callee_bindings_do_not_leak() {
    let mut namespace = context();
    declare_source(&mut namespace, "f n = add n 1");

    assert_eq!(eval(&namespace, "f 5"), Value::from(6));

    // The parameter binding lived only in the call's private scope.
    match eval(&namespace, "n") {
        Value::Function(function) => assert!(function.definitions.is_empty()),
        other => panic!("'n' leaked into the caller's scope as {other}"),
    }
}

#[test]
fn plain_values_called_with_arguments_discard_them() {
    let mut namespace = context();
    namespace.insert("x", Value::from(9));

    assert_eq!(eval(&namespace, "x"), Value::from(9));
    assert_eq!(eval(&namespace, "x 1 2"), Value::from(9));
}

#[test]
fn arithmetic_promotion_and_division() {
    let namespace = context();

    assert_eq!(eval(&namespace, "add 2 3"), Value::from(5));
    assert_eq!(eval(&namespace, "add 2 3.5"), Value::from(5.5));
    assert_eq!(eval(&namespace, "sub 2 5"), Value::from(-3));
    assert_eq!(eval(&namespace, "mult 4 2.5"), Value::from(10.0));
    assert_eq!(eval(&namespace, "div 7 2"), Value::from(3.5));
    assert_eq!(eval(&namespace, "div 1 0"), Value::from(f64::INFINITY));
}

#[test]
fn integer_overflow_is_reported() {
    let namespace = context();

    let error = resolve("mult 9223372036854775807 2", &namespace).unwrap_err();
    assert!(matches!(error, RuntimeError::Overflow { .. }));
}

#[test]
fn text_concatenation() {
    let namespace = context();

    assert_eq!(eval(&namespace, "add \"foo\" \"bar\""), Value::from("foobar"));

    let error = resolve("sub \"foo\" \"bar\"", &namespace).unwrap_err();
    assert!(matches!(error, RuntimeError::TypeError { .. }));
}

#[test]
fn arrays_broadcast_and_pair_elementwise() {
    let namespace = context();

    assert_eq!(eval(&namespace, "add [1 2 3] [4 5 6]"),
               Value::from(vec![Value::from(5), Value::from(7), Value::from(9)]));
    assert_eq!(eval(&namespace, "mult [1 2 3] 2"),
               Value::from(vec![Value::from(2), Value::from(4), Value::from(6)]));
    assert_eq!(eval(&namespace, "sub 10 [1 2]"),
               Value::from(vec![Value::from(9), Value::from(8)]));

    let error = resolve("add [1 2] [1 2 3]", &namespace).unwrap_err();
    assert!(matches!(error, RuntimeError::TypeError { .. }));
}

#[test]
fn range_generation() {
    let namespace = context();

    assert_eq!(eval(&namespace, "range 0 5 1"),
               Value::from(vec![Value::from(0),
                                Value::from(1),
                                Value::from(2),
                                Value::from(3),
                                Value::from(4)]));
    assert_eq!(eval(&namespace, "range 5 0 -2"),
               Value::from(vec![Value::from(5), Value::from(3), Value::from(1)]));
    assert_eq!(eval(&namespace, "range 0 1 0.25"),
               Value::from(vec![Value::from(0.0),
                                Value::from(0.25),
                                Value::from(0.5),
                                Value::from(0.75)]));
    assert_eq!(eval(&namespace, "range 5 0 1"), Value::from(Vec::<Value>::new()));

    let error = resolve("range 0 5 0", &namespace).unwrap_err();
    assert!(matches!(error, RuntimeError::InvalidArgument { .. }));
}

#[test]
fn map_applies_partial_applications() {
    let mut namespace = context();
    declare_source(&mut namespace, "square n = mult n n");

    assert_eq!(eval(&namespace, "map square [1 2 3]"),
               Value::from(vec![Value::from(1), Value::from(4), Value::from(9)]));
    assert_eq!(eval(&namespace, "map (add 2) [1 2 3]"),
               Value::from(vec![Value::from(3), Value::from(4), Value::from(5)]));

    let error = resolve("map 3 [1 2]", &namespace).unwrap_err();
    assert!(matches!(error, RuntimeError::InvalidArgument { .. }));
}

#[test]
fn builtin_definitions_keep_declaration_priority() {
    let mut namespace = context();
    declare_source(&mut namespace, "add 0 0 = 100");

    // The native definition was declared first, binds anything, and is tried
    // first: declaration order decides, not specificity.
    assert_eq!(eval(&namespace, "add 0 0"), Value::from(0));
    assert_eq!(eval(&namespace, "add 2 3"), Value::from(5));
}

#[test]
fn driver_reads_declarations_and_actions() {
    assert!(get_result("double n = mult n 2\noutput: double 4").is_ok());
    assert!(get_result("\n\noutput: add 1 1").is_ok());
    assert!(get_result("output: add x 3").is_ok());
}

#[test]
fn program_declarations_accumulate() {
    use curria::interpreter::program::Program;

    let mut program = Program::new();
    assert!(program.read_line("double n = mult n 2", 1).unwrap());
    assert_eq!(resolve("double 4", program.namespace()).unwrap(), Value::from(8));
    assert!(!program.read_line("quit:", 2).unwrap());
}

#[test]
fn driver_stops_at_quit() {
    // The malformed line after quit: is never reached.
    assert!(get_result("quit:\na = b = c").is_ok());
}

#[test]
fn driver_rejects_malformed_lines() {
    assert!(get_result("a = b = c").is_err());
    assert!(get_result(" = 2").is_err());
    assert!(get_result("explode: 3").is_err());
    assert!(get_result("output: run: x: y").is_err());
    assert!(get_result("two = 2\noutput: two 5").is_err());
}

#[test]
fn run_action_processes_a_script_file() {
    assert!(get_result("run: scripts/squares.curria").is_ok());
    assert!(get_result("run: scripts/does_not_exist.curria").is_err());
}
