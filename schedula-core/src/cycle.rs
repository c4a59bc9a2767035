// One request/response exchange with an AJAX endpoint

use crate::browser::Browser;
use crate::form::{Form, FormData, PLEASE_WAIT, Tone};
use crate::interpret::{interpret_common, interpret_form};
use crate::protocol::{CommandBatch, decode_reply};
use schedula_client::{AjaxClient, Reply};
use serde::Serialize;
use tracing::{debug, warn};

/// Endpoint that ends the current login session
pub const LOGOUT_PATH: &str = "/pages/login/logout_ajax.php";

/// Everything one exchange produced
#[derive(Debug, Clone)]
pub struct Submission {
    pub reply: Reply,
    pub commands: CommandBatch,
}

/// POST `fields` to `path` and wait for the reply. A failed exchange is
/// reported to the user through `browser` before returning.
pub async fn send<F, B>(client: &AjaxClient, path: &str, fields: &F, browser: &mut B) -> Reply
where
    F: Serialize + ?Sized,
    B: Browser + ?Sized,
{
    let reply = client.post(path, fields).await;
    if let Some(notice) = reply.failure_notice() {
        browser.alert(&notice);
    }
    reply
}

fn commands_from(reply: &Reply) -> CommandBatch {
    match decode_reply(reply) {
        Ok(commands) => commands,
        Err(e) => {
            warn!("Discarding reply from {}: {}", reply.url, e);
            Vec::new()
        }
    }
}

/// Snapshot the form's fields, then put the waiting placeholder in its error
/// label. The snapshot is taken first, so it never sees the placeholder.
pub fn prepare_submission(form: &mut Form) -> FormData {
    let fields = form.collect();
    form.show_message(PLEASE_WAIT, Tone::Pending);
    fields
}

/// Submit `form` to `path` and apply whatever the server answers.
///
/// The form goes through [`prepare_submission`] before the request goes
/// out. Common commands run over the whole batch first, then the form
/// commands run over it again in order.
pub async fn submit_form<B>(
    client: &AjaxClient,
    path: &str,
    form: &mut Form,
    browser: &mut B,
) -> Submission
where
    B: Browser + ?Sized,
{
    let fields = prepare_submission(form);

    debug!(
        "Submitting form {} ({} fields) to {} at {}",
        form.id(),
        fields.len(),
        path,
        client.base_url()
    );
    let reply = send(client, path, &fields, browser).await;
    let commands = commands_from(&reply);

    interpret_common(&commands, browser);
    interpret_form(&commands, form);

    Submission { reply, commands }
}

/// End the session at the default logout endpoint
pub async fn logout<B>(client: &AjaxClient, browser: &mut B) -> Submission
where
    B: Browser + ?Sized,
{
    logout_at(client, LOGOUT_PATH, browser).await
}

/// End the session at `path`. There is no form, so only common commands apply.
pub async fn logout_at<B>(client: &AjaxClient, path: &str, browser: &mut B) -> Submission
where
    B: Browser + ?Sized,
{
    let fields: FormData = [("action", "logout")].into_iter().collect();
    let reply = send(client, path, &fields, browser).await;
    let commands = commands_from(&reply);

    interpret_common(&commands, browser);

    Submission { reply, commands }
}
