pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    ReportFormat, TerminalBrowser, build_form, decode_body, load_config, parse_field_arg,
    resolve_base_url,
};
