use crate::browser::Browser;
use crate::form::{Form, Tone};
use crate::protocol::{Command, Verb};
use tracing::debug;

/// Apply the commands every caller understands, in order.
///
/// Form commands and unknown verbs are skipped without complaint.
pub fn interpret_common<B>(commands: &[Command], browser: &mut B)
where
    B: Browser + ?Sized,
{
    for command in commands {
        match command.verb {
            Verb::LoadPage => {
                debug!("Navigating to {}", command.note());
                browser.navigate(command.note());
            }
            Verb::Alert => browser.alert(command.note()),
            _ => {}
        }
    }
}

/// Apply the commands that need the submitting form, in order.
pub fn interpret_form(commands: &[Command], form: &mut Form) {
    for command in commands {
        match command.verb {
            Verb::PrintError => form.show_message(command.note(), Tone::Error),
            Verb::ClearField => {
                let cleared = form.clear_input(command.note());
                debug!(
                    "Cleared {} input(s) named {:?} in form {}",
                    cleared,
                    command.note(),
                    form.id()
                );
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::RecordingBrowser;

    #[test]
    fn test_common_interpreter_skips_form_verbs() {
        let mut browser = RecordingBrowser::new();
        interpret_common(
            &[
                Command::new("print error", Some("nope")),
                Command::new("clear field", Some("username")),
            ],
            &mut browser,
        );
        assert!(browser.events().is_empty());
    }

    #[test]
    fn test_form_interpreter_skips_common_verbs() {
        let mut form = Form::new("login").with_input("username", "alice");
        interpret_form(
            &[
                Command::new("alert", Some("hi")),
                Command::new("load page", Some("/home")),
            ],
            &mut form,
        );
        assert_eq!(form.value("username"), Some("alice"));
        assert_eq!(form.error_text(), "");
    }

    #[test]
    fn test_last_print_error_wins() {
        let mut form = Form::new("login");
        interpret_form(
            &[
                Command::new("print error", Some("first")),
                Command::new("print error", Some("second")),
            ],
            &mut form,
        );
        assert_eq!(form.error_text(), "second");
    }
}
