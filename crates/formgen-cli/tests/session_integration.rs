//! End-to-end tests for the command-line front end.
//!
//! Sessions are driven with scripted input, the way a user would type it.

use std::io::{Cursor, Write};

use formgen_cli::commands::register_builtin_commands;
use formgen_cli::commands::session::run_session;
use formgen_cli::commands::validate::run_validate;
use formgen_cli::CommandRegistry;
use formgen_core::Settings;
use formgen_forms::{FormSession, FormValue, InMemorySink};

fn drive(session: &mut FormSession, script: &str) -> String {
    let mut out = Vec::new();
    run_session(session, "formgen> ", Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_rejected_then_accepted_submission() {
    let sink = InMemorySink::new();
    let mut session = FormSession::new(Box::new(sink.clone()));

    let text = drive(
        &mut session,
        "set 5 not-an-email\n\
         submit\n\
         show\n",
    );
    assert!(text.contains("Form has 3 error(s):"));
    assert!(text.contains("  - Email: Invalid Email format"));
    assert!(text.contains("5. Email [email] = \"not-an-email\"\n     ! Invalid Email format"));
    assert_eq!(sink.count(), 0);

    // Editing clears the error at once, before any resubmit.
    let text = drive(&mut session, "set 5 a@b.com\nshow\n");
    assert!(text.contains("5. Email [email] = \"a@b.com\"\n6."));

    let text = drive(
        &mut session,
        "set 6 1234567890\n\
         set 7 photo.jpg:1024\n\
         set 3 yes\n\
         submit\n",
    );
    assert!(text.contains("Submitted 4 field(s)"));
    assert!(text.contains("The form has been reset."));
    assert_eq!(sink.count(), 1);
    let submission = sink.last().unwrap();
    assert_eq!(submission.value_of("Custom Checkbox"), Some(&FormValue::Bool(true)));
    assert!(session.registry().values().is_empty());
}

#[test]
fn test_added_same_kind_fields_validate_separately() {
    let mut session = FormSession::new(Box::new(InMemorySink::new()));
    let text = drive(
        &mut session,
        "add email Work Email\n\
         set 5 a@b.com\n\
         set 8 whatever\n\
         submit\n",
    );
    assert!(text.contains("Added Work Email at position 8"));
    assert!(!text.contains("  - Email:"));
    // The added field has no rules, so only phone and file fail.
    assert!(text.contains("Form has 2 error(s):"));
}

#[test]
fn test_file_value_from_local_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.png");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&vec![0_u8; 2 * 1_048_576]).unwrap();
    drop(file);

    let mut session = FormSession::new(Box::new(InMemorySink::new()));
    let script = format!("set 7 {}\nsubmit\n", path.display());
    let text = drive(&mut session, &script);
    assert!(text.contains("File Upload: File Upload must not exceed 1 MB"));
}

#[test]
fn test_reset_removes_added_fields() {
    let mut session = FormSession::new(Box::new(InMemorySink::new()));
    drive(&mut session, "add text Extra\nremove 1\nset 1 hi\nreset\n");
    assert_eq!(session.registry().len(), 7);
    assert!(session.registry().values().is_empty());
    assert_eq!(
        session.registry().fields().next().unwrap().label,
        "Custom Text Input"
    );
}

#[test]
fn test_validate_command_exit_codes() {
    let mut session = FormSession::new(Box::new(InMemorySink::new()));
    let err = run_validate(&mut session, &[], &mut Vec::new()).unwrap_err();
    assert_eq!(err.exit_code(), 65);

    let mut session = FormSession::new(Box::new(InMemorySink::new()));
    let err = run_validate(&mut session, &["colour=red".to_string()], &mut Vec::new()).unwrap_err();
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_cli_dispatch() {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let settings = Settings::default();

    let matches = registry
        .build_cli()
        .try_get_matches_from(["formgen", "check"])
        .unwrap();
    assert!(registry.execute(&matches, &settings).is_ok());

    let matches = registry
        .build_cli()
        .try_get_matches_from(["formgen", "validate", "--set", "email=a@b.com", "-s", "phone=1"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    let sets: Vec<&String> = sub.get_many::<String>("set").unwrap().collect();
    assert_eq!(sets, ["email=a@b.com", "phone=1"]);
}
