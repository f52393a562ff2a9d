/*
 *  Copyright 2025-2026 Colliery Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! HTTP-facing errors.
//!
//! Client errors render as plain text. Internal faults render as a generic
//! JSON body and carry an [`InternalFault`] extension; the
//! [`render_internal_errors`](crate::middleware::render_internal_errors)
//! middleware logs it and, outside production, exposes the details.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clubhouse::{RegistryError, ValidationError};
use serde_json::json;
use thiserror::Error;

/// Body sent to clients when the server is in production mode.
pub const GENERIC_SERVER_ERROR: &str = "server error";

/// Response text for unknown member ids.
pub const USER_NOT_FOUND: &str = "User not found.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("User not found.")]
    NotFound,

    #[error("Malformed registration body: {0}")]
    MalformedBody(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RegistryError> for ApiError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Bodies without a Content-Length hit the size limit while buffering.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(error) => {
                (StatusCode::BAD_REQUEST, error.to_string()).into_response()
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, USER_NOT_FOUND).into_response(),
            ApiError::MalformedBody(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()).into_response()
            }
            ApiError::Internal(error) => {
                InternalFault::new(error.to_string(), format!("{error:?}")).into_response()
            }
        }
    }
}

/// Details of a 500 response, attached as a response extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalFault {
    pub message: String,
    pub detail: String,
}

impl InternalFault {
    pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Body exposing the fault, used in development mode.
    pub fn detailed_body(&self) -> serde_json::Value {
        json!({
            "message": self.message,
            "error": { "detail": self.detail },
        })
    }

    /// Body hiding the fault, used in production mode.
    pub fn generic_body() -> serde_json::Value {
        json!({ "error": { "message": GENERIC_SERVER_ERROR } })
    }
}

impl IntoResponse for InternalFault {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(InternalFault::generic_body()),
        )
            .into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Turn a handler panic into an [`InternalFault`] response.
pub fn internal_fault_for_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    InternalFault::new(format!("handler panicked: {message}"), message).into_response()
}
