use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned no text")]
    EmptyResponse,

    #[error("no available model matches preferences [{}]", .preferences.join(", "))]
    NoModel { preferences: Vec<String> },

    #[error("model directory query failed: {0}")]
    Directory(String),
}
