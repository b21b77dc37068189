use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::views;

#[derive(Debug)]
pub enum AppError {
    NotFound,
    Unauthorized,
    Forbidden,
    /// Cursor points past the end of a test's question list.
    OutOfRange { cursor: i64, len: i64 },
    Input(&'static str),
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND".to_owned()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED".to_owned()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN".to_owned()),
            AppError::OutOfRange { cursor, len } => (
                StatusCode::NOT_FOUND,
                format!("question {cursor} is out of range for a test with {len} questions"),
            ),
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, msg.to_owned()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_owned()),
        };

        (code, error_page(&message)).into_response()
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
        },
    )
}

pub trait ResultExt<T> {
    /// Log the underlying error and replace it with an opaque internal failure.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }
}
