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

use axum::body::Body;
use axum::http::{Method, StatusCode};
use axum::routing::get;
use axum::{middleware, Router};
use clubhouse::Registry;
use clubhouse_server::config::{Environment, ServerConfig};
use clubhouse_server::error::{internal_fault_for_panic, GENERIC_SERVER_ERROR};
use clubhouse_server::middleware::render_internal_errors;
use serde_json::json;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

use crate::common::{body_json, request, TestApp};

async fn snapped_broom() -> &'static str {
    panic!("broom snapped")
}

fn panicking_router(environment: Environment) -> Router {
    Router::new()
        .route("/boom", get(snapped_broom))
        .layer(CatchPanicLayer::custom(internal_fault_for_panic))
        .layer(middleware::from_fn_with_state(
            environment,
            render_internal_errors,
        ))
}

/// A base URL that cannot be used in a header, bypassing config validation.
fn broken_location_app(environment: Environment) -> TestApp {
    let server = ServerConfig {
        public_base_url: "http://curling\nexample".to_string(),
        ..Default::default()
    };
    TestApp::with(Registry::new(), server, environment)
}

fn registration() -> serde_json::Value {
    json!({
        "username": "sallyStu",
        "password": "abc12345",
        "favoriteClub": "Ogden Curling Club"
    })
}

#[tokio::test]
async fn test_internal_error_is_generic_in_production() {
    let app = broken_location_app(Environment::Production);

    let response = app.post_json("/register", registration()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": { "message": GENERIC_SERVER_ERROR } })
    );
    assert!(app.registry.is_empty());
}

#[tokio::test]
async fn test_internal_error_is_detailed_in_development() {
    let app = broken_location_app(Environment::Development);

    let response = app.post_json("/register", registration()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Location header"));
    assert!(body["error"]["detail"].is_string());
    assert!(app.registry.is_empty());
}

#[tokio::test]
async fn test_failed_registration_keeps_existing_members() {
    let registry = Registry::new();
    let existing = registry.insert(
        clubhouse::validate(&clubhouse::RegistrationRequest::new(
            "johnBlocton",
            "veryg00dpassw0rd",
            "Salt City Curling Club",
        ))
        .unwrap(),
    );
    let server = ServerConfig {
        public_base_url: "http://curling\nexample".to_string(),
        ..Default::default()
    };
    let app = TestApp::with(registry, server, Environment::Production);

    let response = app.post_json("/register", registration()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.registry.list_all(), vec![existing]);
}

#[tokio::test]
async fn test_panic_is_caught_in_production() {
    let response = panicking_router(Environment::Production)
        .oneshot(request(Method::GET, "/boom", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": { "message": GENERIC_SERVER_ERROR } })
    );
}

#[tokio::test]
async fn test_panic_is_described_in_development() {
    let response = panicking_router(Environment::Development)
        .oneshot(request(Method::GET, "/boom", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["message"], "handler panicked: broom snapped");
    assert_eq!(body["error"]["detail"], "broom snapped");
}
