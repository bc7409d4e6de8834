mod helpers;

use helpers::prelude::*;

#[test]
fn test_keep_going_reports_every_error() {
    let dir = profile_dir(&[
        ("alice.json", r#"{"name":"Alice","bio":"Engineer"}"#),
        ("carol.json", r#"{"bio":"Writer"}"#),
        ("dave.json", r#"{"name":"Dave"}"#),
        ("eve.json", "not json"),
    ]);

    let (code, output) = run_in(&dir, &["--keep-going"]);
    assert_eq!(1, code);
    assert_eq!("", output.standard_as_string());

    let errors = output.error_as_string();
    assert!(errors.contains("carol.json: missing required field `name`"));
    assert!(errors.contains("dave.json: missing required field `bio`"));
    assert!(errors.contains("eve.json: invalid profile data"));
    assert!(errors.contains("3 invalid profile(s), 4 checked"));
}

#[test]
fn test_keep_going_on_valid_directory() {
    let dir = profile_dir(&[("alice.json", r#"{"name":"Alice","bio":"Engineer"}"#)]);

    let (code, output) = run_in(&dir, &["-k"]);
    assert_eq!(0, code);
    assert_eq!("All profiles are valid!\n", output.standard_as_string());
}
