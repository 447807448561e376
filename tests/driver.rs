// Driver tests: run command scripts end to end and compare stdout.
use containers::driver::{self, DriverError, ParseError};

fn run(input: &str) -> (Result<(), DriverError>, String) {
    let mut output = Vec::new();
    let result = driver::run(input.as_bytes(), &mut output);
    (result, String::from_utf8(output).expect("output is utf-8"))
}

#[test]
fn get_put_delete_scenario() {
    let (result, output) = run("5\nput 1 100\nput 2 200\nget 1\ndelete 2\nget 2\n");
    assert!(result.is_ok());
    assert_eq!(output, "100\n200\nNone\n");
}

#[test]
fn tokens_may_span_lines() {
    let (result, output) = run("3 put\n  -1\n-1 get -1\n\n delete 5");
    assert!(result.is_ok());
    assert_eq!(output, "-1\nNone\n", "A stored -1 is printed, not reported missing.");
}

#[test]
fn overwrite_and_trailing_input() {
    let (result, output) = run("3\nput 4 1\nput 4 2\nget 4\nget 4\n");
    assert!(result.is_ok());
    assert_eq!(output, "2\n", "Commands after the announced count are ignored.");
}

#[test]
fn empty_script() {
    let (result, output) = run("0\n");
    assert!(result.is_ok());
    assert_eq!(output, "");
}

#[test]
fn missing_count() {
    let (result, _) = run("");
    match result {
        Err(DriverError::Parse(ParseError::UnexpectedEnd { expected })) => {
            assert_eq!(expected, "command count")
        },
        other => panic!("expected a missing count, got {other:?}"),
    }
}

#[test]
fn fewer_commands_than_announced() {
    let (result, output) = run("3\nput 1 5\nget 1\n");
    assert_eq!(output, "5\n", "Results before the error are still written.");
    match result {
        Err(DriverError::Parse(ParseError::UnexpectedEnd { expected })) => {
            assert_eq!(expected, "command")
        },
        other => panic!("expected the input to run out, got {other:?}"),
    }
}

#[test]
fn unknown_command() {
    let (result, _) = run("1\nfetch 1\n");
    match result {
        Err(DriverError::Parse(ParseError::UnknownCommand { command })) => {
            assert_eq!(command, "fetch")
        },
        other => panic!("expected an unknown command, got {other:?}"),
    }
}

#[test]
fn invalid_integer() {
    let (result, _) = run("1\nput 1 lots\n");
    let error = result.expect_err("a non-integer value should fail");
    assert!(error.is_parse());
    assert_eq!(
        error.to_string(),
        "Invalid value \"lots\": invalid digit found in string"
    );

    let (result, _) = run("1\nget 99999999999\n");
    assert!(matches!(
        result,
        Err(DriverError::Parse(ParseError::InvalidInteger { expected: "key", .. }))
    ));
}
