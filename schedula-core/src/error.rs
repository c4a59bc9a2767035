use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed command list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} contains a reserved delimiter: {value:?}")]
    ReservedDelimiter { field: &'static str, value: String },

    #[error("An empty command batch cannot be expressed in the delimited format")]
    EmptyBatch,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}
