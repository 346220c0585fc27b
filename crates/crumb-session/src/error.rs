use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token store error: {0}")]
    TokenStoreError(String),
}
