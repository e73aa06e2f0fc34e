/// Record-store and collaborator failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store error: {message}")]
    Backend { message: String },

    #[error("record store timed out during {operation}")]
    Timeout { operation: String },

    #[error("record store returned malformed data: {details}")]
    Malformed { details: String },
}
