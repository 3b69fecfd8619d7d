use thiserror::Error;

/// Startup and serve-loop errors. Request-path errors live in
/// [`crate::utils::AppError`].
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
