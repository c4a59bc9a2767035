pub mod browser;
pub mod config;
pub mod cycle;
pub mod error;
pub mod form;
pub mod interpret;
pub mod protocol;
pub mod report;

pub use browser::{Browser, BrowserEvent, RecordingBrowser};
pub use config::Config;
pub use cycle::{LOGOUT_PATH, Submission, logout, logout_at, prepare_submission, send, submit_form};
pub use error::{ConfigError, ProtocolError};
pub use form::{ErrorLabel, Form, FormData, Tone};
pub use interpret::{interpret_common, interpret_form};
pub use protocol::{Command, CommandBatch, Scope, Verb};
