use interval_eval::{compile, ExprError};

#[test]
fn malformed_syntax_is_a_parse_error() {
    for src in ["1 +", "(1", "[1, 2", ")", "* 2", "1 2", "sqrt(1"] {
        match compile(src).unwrap_err() {
            ExprError::Parse(_) => {}
            other => panic!("{:?}: unexpected error: {:?}", src, other),
        }
    }
}

#[test]
fn unexpected_characters_are_parse_errors() {
    match compile("1 @ 2").unwrap_err() {
        ExprError::Parse(msg) => assert!(msg.contains('@'), "message: {}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn invalid_numbers_are_parse_errors() {
    assert!(matches!(compile("1e"), Err(ExprError::Parse(_))));
}

#[test]
fn empty_input_is_a_parse_error() {
    assert!(matches!(compile(""), Err(ExprError::Parse(_))));
    assert!(matches!(compile("   "), Err(ExprError::Parse(_))));
}

#[test]
fn error_messages_name_the_offender() {
    let err = compile("nope(1)").unwrap_err();
    assert_eq!(err.to_string(), "nope is not defined");

    let err = compile("!1").unwrap_err();
    assert_eq!(err.to_string(), "unsupported operator: !");

    let err = compile("x").unwrap().eval().unwrap_err();
    assert_eq!(err.to_string(), "identifier not found in scope: x");
}

#[test]
fn compile_failures_return_no_artifact() {
    // Fail-fast: an error anywhere in the tree aborts the whole compile.
    assert!(compile("1 + nope(2) + 3").is_err());
    assert!(compile("sqrt(!1)").is_err());
}
