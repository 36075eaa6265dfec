//! Request extractors that report rejections as [Error] responses.

use axum::extract::{FromRequest, rejection::JsonRejection};

use crate::Error;

/// A JSON request body.
///
/// Works like [axum::Json], except that a missing, malformed or mistyped body is
/// rejected with a 400 and a JSON error message instead of axum's plain text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidArgument(rejection.body_text())
    }
}
