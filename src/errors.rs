use astra::Response;
use thiserror::Error;

use crate::data::DataError;
use crate::session::TransitionError;

/// Errors originating from either the server logic
/// (routing, bad form input, etc.) or downstream layers (data files, XLSX).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Data Error: {0}")]
    Data(#[from] DataError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl From<TransitionError> for ServerError {
    fn from(err: TransitionError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
