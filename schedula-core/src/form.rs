// In-memory model of a submitting form and its error label

use serde::Serialize;
use std::time::Duration;

/// Placeholder shown in the error label while a request is outstanding
pub const PLEASE_WAIT: &str = "Please wait...";

/// Length of the fade-in applied whenever the error label changes
pub const FADE_IN: Duration = Duration::from_millis(300);

/// Field values collected from a form, in first-seen order.
///
/// Serializes as a sequence of `(name, value)` pairs, which is what a
/// form-encoded request body expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. A repeated name overwrites the earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (name, value) in iter {
            data.insert(name, value);
        }
        data
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Neutral grey, used for the waiting placeholder
    Pending,
    /// Red, used for server-reported errors
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelNode {
    pub text: String,
    pub tone: Tone,
}

/// Opacity transition applied to freshly inserted label content
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FadeIn {
    pub from_opacity: f32,
    pub to_opacity: f32,
    pub duration: Duration,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self {
            from_opacity: 0.0,
            to_opacity: 1.0,
            duration: FADE_IN,
        }
    }
}

/// The region of a form that displays status and error text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorLabel {
    nodes: Vec<LabelNode>,
    transition: Option<FadeIn>,
    /// Transitions cut short because new content arrived
    finished_early: usize,
}

impl ErrorLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every existing child, append `text` and fade it in. A
    /// transition still running from an earlier call is jumped to its end.
    pub fn replace_and_fade_in(&mut self, text: &str, tone: Tone) {
        if self.transition.take().is_some() {
            self.finished_early += 1;
        }
        self.nodes.clear();
        self.nodes.push(LabelNode {
            text: text.to_string(),
            tone,
        });
        self.transition = Some(FadeIn::default());
    }

    pub fn nodes(&self) -> &[LabelNode] {
        &self.nodes
    }

    /// Concatenated text of every child
    pub fn text(&self) -> String {
        self.nodes.iter().map(|node| node.text.as_str()).collect()
    }

    pub fn tone(&self) -> Option<Tone> {
        self.nodes.last().map(|node| node.tone)
    }

    pub fn transition(&self) -> Option<&FadeIn> {
        self.transition.as_ref()
    }

    pub fn finished_early(&self) -> usize {
        self.finished_early
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Input {
    pub name: String,
    pub value: String,
}

/// A form identified by its element id, holding its direct inputs and an
/// optional error label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Form {
    id: String,
    inputs: Vec<Input>,
    error_label: Option<ErrorLabel>,
}

impl Form {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inputs: Vec::new(),
            error_label: Some(ErrorLabel::new()),
        }
    }

    /// Forms without an error label silently skip label updates
    pub fn without_error_label(mut self) -> Self {
        self.error_label = None;
        self
    }

    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_input(name, value);
        self
    }

    pub fn push_input(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inputs.push(Input {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    /// Value of the first input named `name`
    pub fn value(&self, name: &str) -> Option<&str> {
        self.inputs
            .iter()
            .find(|input| input.name == name)
            .map(|input| input.value.as_str())
    }

    /// Snapshot the current input values. Later inputs win on duplicate names.
    pub fn collect(&self) -> FormData {
        self.inputs
            .iter()
            .map(|input| (input.name.as_str(), input.value.as_str()))
            .collect()
    }

    /// Empty every input named `name`. Returns how many were cleared.
    pub fn clear_input(&mut self, name: &str) -> usize {
        let mut cleared = 0;
        for input in self.inputs.iter_mut().filter(|input| input.name == name) {
            input.value.clear();
            cleared += 1;
        }
        cleared
    }

    pub fn error_label(&self) -> Option<&ErrorLabel> {
        self.error_label.as_ref()
    }

    /// Error label text, empty when there is no label
    pub fn error_text(&self) -> String {
        self.error_label
            .as_ref()
            .map(ErrorLabel::text)
            .unwrap_or_default()
    }

    pub fn show_message(&mut self, text: &str, tone: Tone) {
        if let Some(ref mut label) = self.error_label {
            label.replace_and_fade_in(text, tone);
        }
    }
}
