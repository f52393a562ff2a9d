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

//! Route handlers.

use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use clubhouse::{audit, validate, RegistrationRequest, UserRecord};
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

pub const BANNER: &str = "Clubhouse member registration service";

/// `GET /`
pub async fn root() -> &'static str {
    BANNER
}

/// `POST /`: acknowledge and log whatever was sent.
pub async fn acknowledge(body: String) -> &'static str {
    debug!(body = %body, "POST request received");
    "POST request received."
}

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let normalized = validate(&request).inspect_err(audit::log_registration_rejected)?;
    let record = state.registry.insert(normalized);

    // A failed registration must not leave the member stored.
    let location = match HeaderValue::from_str(&state.server.user_location(&record.id))
        .context("public_base_url does not form a valid Location header")
    {
        Ok(location) => location,
        Err(error) => {
            state.registry.delete_by_id(&record.id)?;
            return Err(error.into());
        }
    };

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(record),
    ))
}

/// `GET /user`
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserRecord>> {
    Json(state.registry.list_all())
}

/// `GET /user/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserRecord>, ApiError> {
    let id = parse_id(&id)?;
    state
        .registry
        .find_by_id(&id)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `DELETE /user/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.registry.delete_by_id(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Ids that are not UUIDs cannot name a member.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}
