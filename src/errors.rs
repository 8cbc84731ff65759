// errors.rs
use thiserror::Error;

use crate::content::StoreError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, workbook).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Content Store Error: {0}")]
    Store(#[from] StoreError),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ServerError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ServerError::XlsxError(e.to_string())
    }
}

impl ServerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::DbError(_)
            | ServerError::Store(_)
            | ServerError::XlsxError(_)
            | ServerError::InternalError => 500,
        }
    }
}
