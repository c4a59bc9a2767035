pub mod client;
pub mod error;
pub mod reply;

pub use client::{AjaxClient, ClientOptions};
pub use error::ClientError;
pub use reply::{ERROR_SENTINEL, Reply};
