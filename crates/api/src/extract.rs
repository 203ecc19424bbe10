//! Request-body extraction for API handlers.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Behaves exactly like [`axum::Json`] on well-formed input. On rejection it
/// produces the standard error envelope with status 400 instead of axum's
/// default mix of 415/422 responses, matching the rest of the API's
/// validation behaviour.
#[derive(FromRequest)]
#[from_request(via(axum::extract::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
