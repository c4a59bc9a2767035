use crate::cycle::Submission;
use crate::form::{Form, Tone};
use crate::protocol::Command;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n";

/// Describe a decoded batch, one numbered line per command
pub fn render_batch(commands: &[Command]) -> String {
    let mut report = String::new();
    report.push_str(&format!("# Commands ({}):\n", commands.len()));

    if commands.is_empty() {
        report.push_str("  (none)\n");
        return report;
    }

    for (idx, command) in commands.iter().enumerate() {
        let argument = match command.argument {
            Some(ref argument) => format!("{:?}", argument),
            None => "-".to_string(),
        };
        report.push_str(&format!(
            "  {}. [{}] {:?} {}\n",
            idx + 1,
            command.verb.scope().as_str(),
            command.verb.as_str(),
            argument
        ));
    }

    report
}

/// Describe the form's state after an exchange
pub fn render_form(form: &Form) -> String {
    let mut report = String::new();
    report.push_str(&format!("# Form {}:\n", form.id()));

    match form.error_label() {
        Some(label) => {
            let tone = match label.tone() {
                Some(Tone::Error) => "error",
                Some(Tone::Pending) => "pending",
                None => "empty",
            };
            report.push_str(&format!("  Error label ({}): {}\n", tone, label.text()));
            if label.finished_early() > 0 {
                report.push_str(&format!(
                    "  Transitions cut short: {}\n",
                    label.finished_early()
                ));
            }
        }
        None => report.push_str("  Error label: (none)\n"),
    }

    for input in form.inputs() {
        report.push_str(&format!("  {} = {:?}\n", input.name, input.value));
    }

    report
}

/// Full report for one exchange
pub fn render_submission(submission: &Submission, form: Option<&Form>) -> String {
    let reply = &submission.reply;

    let mut report = String::new();
    report.push_str(DIVIDER);
    report.push_str("# Reply:\n");
    report.push_str(&format!("  Endpoint: {}\n", reply.url));
    report.push_str(&format!("  Status: {}\n", reply.status_code));
    report.push_str(&format!("  Response time: {:?}\n", reply.response_time));
    if let Some(ref content_type) = reply.content_type {
        report.push_str(&format!("  Content-Type: {}\n", content_type));
    }
    if let Some(notice) = reply.failure_notice() {
        report.push_str(&format!("  Failed: {}\n", notice));
    }
    report.push('\n');

    report.push_str(&render_batch(&submission.commands));

    if let Some(form) = form {
        report.push('\n');
        report.push_str(&render_form(form));
    }

    report.push('\n');
    report.push_str(DIVIDER);
    report
}
