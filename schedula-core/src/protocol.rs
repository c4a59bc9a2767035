// Command protocol spoken by the scheduler's AJAX endpoints

use crate::error::ProtocolError;
use schedula_client::Reply;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separates one command from the next in a delimited body
pub const COMMAND_DELIMITER: &str = "[*command*]";
/// Separates a command's verb from its argument
pub const NOTE_DELIMITER: &str = "[*note*]";

/// Which interpreter acts on a verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Handled everywhere, form or not
    Common,
    /// Only meaningful next to the form that issued the request
    Form,
    /// Nobody handles it
    Unknown,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Common => "common",
            Scope::Form => "form",
            Scope::Unknown => "ignored",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verb {
    LoadPage,
    Alert,
    PrintError,
    ClearField,
    /// Anything else the server sends, kept verbatim
    Other(String),
}

impl Verb {
    pub fn as_str(&self) -> &str {
        match self {
            Verb::LoadPage => "load page",
            Verb::Alert => "alert",
            Verb::PrintError => "print error",
            Verb::ClearField => "clear field",
            Verb::Other(verb) => verb.as_str(),
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            Verb::LoadPage | Verb::Alert => Scope::Common,
            Verb::PrintError | Verb::ClearField => Scope::Form,
            Verb::Other(_) => Scope::Unknown,
        }
    }
}

impl From<&str> for Verb {
    fn from(verb: &str) -> Self {
        match verb {
            "load page" => Verb::LoadPage,
            "alert" => Verb::Alert,
            "print error" => Verb::PrintError,
            "clear field" => Verb::ClearField,
            other => Verb::Other(other.to_string()),
        }
    }
}

impl From<String> for Verb {
    fn from(verb: String) -> Self {
        match Verb::from(verb.as_str()) {
            Verb::Other(_) => Verb::Other(verb),
            known => known,
        }
    }
}

impl From<Verb> for String {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Other(verb) => verb,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub verb: Verb,
    #[serde(default)]
    pub argument: Option<String>,
}

impl Command {
    pub fn new(verb: impl Into<Verb>, argument: Option<&str>) -> Self {
        Self {
            verb: verb.into(),
            argument: argument.map(str::to_string),
        }
    }

    /// The argument, with a missing one read as empty
    pub fn note(&self) -> &str {
        self.argument.as_deref().unwrap_or("")
    }
}

/// Commands in the order the server sent them
pub type CommandBatch = Vec<Command>;

/// Decode a delimited body.
///
/// Never fails. The format has no escaping, so a verb or argument that
/// itself contains a delimiter comes back split in the wrong place.
pub fn decode_delimited(body: &str) -> CommandBatch {
    body.split(COMMAND_DELIMITER)
        .map(|segment| match segment.split_once(NOTE_DELIMITER) {
            Some((verb, note)) => Command::new(verb, Some(note)),
            None => Command::new(segment, None),
        })
        .collect()
}

/// Decode a structured body: a JSON array of `{"verb", "argument"}` records
pub fn decode_json(body: &str) -> Result<CommandBatch, ProtocolError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode whatever the endpoint answered with.
///
/// A failed exchange carries no commands, so the failure sentinel is never
/// read as a command.
pub fn decode_reply(reply: &Reply) -> Result<CommandBatch, ProtocolError> {
    if reply.is_failure() {
        return Ok(Vec::new());
    }
    if reply.is_json() {
        decode_json(&reply.body)
    } else {
        Ok(decode_delimited(&reply.body))
    }
}

pub fn encode_json(commands: &[Command]) -> String {
    // A Vec of plain string records always serializes
    serde_json::to_string(commands).unwrap_or_else(|_| "[]".to_string())
}

/// Encode a batch in the delimited format, refusing anything it cannot
/// carry unambiguously.
pub fn encode_delimited(commands: &[Command]) -> Result<String, ProtocolError> {
    if commands.is_empty() {
        return Err(ProtocolError::EmptyBatch);
    }

    let mut segments = Vec::with_capacity(commands.len());
    for command in commands {
        check_reserved("verb", command.verb.as_str())?;
        let mut segment = command.verb.as_str().to_string();
        if let Some(ref argument) = command.argument {
            check_reserved("argument", argument)?;
            segment.push_str(NOTE_DELIMITER);
            segment.push_str(argument);
        }
        segments.push(segment);
    }

    Ok(segments.join(COMMAND_DELIMITER))
}

fn check_reserved(field: &'static str, value: &str) -> Result<(), ProtocolError> {
    if value.contains(COMMAND_DELIMITER) || value.contains(NOTE_DELIMITER) {
        return Err(ProtocolError::ReservedDelimiter {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
