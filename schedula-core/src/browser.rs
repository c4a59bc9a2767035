/// Side effects the common commands ask of whatever hosts the client
pub trait Browser {
    /// Leave the current page for `url`. Not validated.
    fn navigate(&mut self, url: &str);

    /// Show `message` to the user and wait for them to acknowledge it
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    Navigated(String),
    Alerted(String),
}

/// Headless browser that records every effect in order
#[derive(Debug, Default)]
pub struct RecordingBrowser {
    events: Vec<BrowserEvent>,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BrowserEvent] {
        &self.events
    }

    pub fn navigations(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                BrowserEvent::Navigated(url) => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                BrowserEvent::Alerted(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Where the last navigation went, if any
    pub fn location(&self) -> Option<&str> {
        self.navigations().last().copied()
    }
}

impl Browser for RecordingBrowser {
    fn navigate(&mut self, url: &str) {
        self.events.push(BrowserEvent::Navigated(url.to_string()));
    }

    fn alert(&mut self, message: &str) {
        self.events.push(BrowserEvent::Alerted(message.to_string()));
    }
}
