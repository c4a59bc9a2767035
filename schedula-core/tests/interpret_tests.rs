// Tests for the common and form-scoped command interpreters

use schedula_core::browser::{BrowserEvent, RecordingBrowser};
use schedula_core::form::{Form, Tone};
use schedula_core::interpret::{interpret_common, interpret_form};
use schedula_core::protocol::{Command, decode_delimited};

// ============================================================================
// Common Interpreter Tests
// ============================================================================

#[test]
fn test_load_page_navigates_exactly_once() {
    let mut browser = RecordingBrowser::new();
    interpret_common(&[Command::new("load page", Some("/home"))], &mut browser);
    assert_eq!(
        browser.events(),
        &[BrowserEvent::Navigated("/home".to_string())]
    );
}

#[test]
fn test_unknown_verb_has_no_effect() {
    let mut browser = RecordingBrowser::new();
    interpret_common(&[Command::new("unknown", Some("x"))], &mut browser);
    assert!(browser.events().is_empty());
}

#[test]
fn test_alert_shows_note() {
    let mut browser = RecordingBrowser::new();
    interpret_common(&[Command::new("alert", Some("Saved"))], &mut browser);
    assert_eq!(browser.alerts(), vec!["Saved"]);
    assert!(browser.navigations().is_empty());
}

#[test]
fn test_common_commands_run_in_batch_order() {
    let mut browser = RecordingBrowser::new();
    let batch =
        decode_delimited("alert[*note*]one[*command*]load page[*note*]/a[*command*]alert[*note*]two");
    interpret_common(&batch, &mut browser);
    assert_eq!(
        browser.events(),
        &[
            BrowserEvent::Alerted("one".to_string()),
            BrowserEvent::Navigated("/a".to_string()),
            BrowserEvent::Alerted("two".to_string()),
        ]
    );
    assert_eq!(browser.location(), Some("/a"));
}

#[test]
fn test_load_page_accepts_any_target() {
    let mut browser = RecordingBrowser::new();
    interpret_common(
        &[Command::new("load page", Some("javascript:void(0)"))],
        &mut browser,
    );
    assert_eq!(browser.navigations(), vec!["javascript:void(0)"]);
}

// ============================================================================
// Form Interpreter Tests
// ============================================================================

#[test]
fn test_clear_field_only_touches_named_input() {
    let mut form = Form::new("login_form")
        .with_input("username", "alice")
        .with_input("password", "hunter2");
    interpret_form(&[Command::new("clear field", Some("username"))], &mut form);
    assert_eq!(form.value("username"), Some(""));
    assert_eq!(form.value("password"), Some("hunter2"));
}

#[test]
fn test_clear_field_missing_input_is_noop() {
    let mut form = Form::new("login_form").with_input("username", "alice");
    let before = form.clone();
    interpret_form(&[Command::new("clear field", Some("email"))], &mut form);
    assert_eq!(form, before);
}

#[test]
fn test_print_error_replaces_label_content() {
    let mut form = Form::new("login_form");
    form.show_message("Please wait...", Tone::Pending);
    interpret_form(&[Command::new("print error", Some("Bad password"))], &mut form);

    let label = form.error_label().unwrap();
    assert_eq!(label.nodes().len(), 1);
    assert_eq!(label.text(), "Bad password");
    assert_eq!(label.tone(), Some(Tone::Error));
    assert!(label.transition().is_some());
}

#[test]
fn test_print_error_text_is_literal() {
    let mut form = Form::new("login_form");
    interpret_form(
        &[Command::new("print error", Some("<b>not markup</b>"))],
        &mut form,
    );
    assert_eq!(form.error_text(), "<b>not markup</b>");
}
