//! Request extractors and error types shared by the API handlers

pub mod error;
pub mod json;
pub mod path;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::{Json, ValidatePayload, ValidatedJson};
pub use path::UserIdPath;
