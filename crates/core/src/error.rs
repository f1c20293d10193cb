#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown rank tier: {0}")]
    UnknownTier(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
