//! Extractors whose rejections flow through [`AppError`], so malformed bodies
//! and path parameters reach the error handler like any other failure.

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body extractor with `AppError` rejections
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor with `AppError` rejections
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
