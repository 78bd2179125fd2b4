//! Extractors that report rejections as [`ApiError`] JSON bodies.

use super::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// `Json` extractor whose rejection renders as `{"error": ...}` with 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor whose rejection renders as `{"error": ...}` with 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
