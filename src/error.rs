/// Failures at the collaborator seams. The aggregation core itself never
/// fails; malformed card data degrades to partial statistics instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Extraction service returned HTTP {0}")]
    ExtractionFailed(u16),
    #[error("Could not reach extraction service: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Malformed extraction payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("Round `{0}` not found")]
    RoundNotFound(String),
    #[error("Custom field `{0}` already exists")]
    DuplicateCustomField(String),
}
