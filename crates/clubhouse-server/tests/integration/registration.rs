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
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::{body_json, body_text, TestApp};

#[tokio::test]
async fn test_register_creates_member() {
    let app = TestApp::new();
    let before = app.registry.len();

    let response = app
        .post_json(
            "/register",
            json!({
                "username": "sallyStu",
                "password": "abc12345",
                "favoriteClub": "Ogden Curling Club"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let body = body_json(response).await;
    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();

    assert_eq!(location, format!("http://localhost:8000/user/{id}"));
    assert_eq!(body["username"], "sallyStu");
    assert_eq!(body["password"], "abc12345");
    assert_eq!(body["favoriteClub"], "Ogden Curling Club");
    assert_eq!(body["newsLetter"], false);

    assert_eq!(app.registry.len(), before + 1);
    assert!(app.registry.find_by_id(&id).is_some());
}

#[tokio::test]
async fn test_register_accepts_text_news_letter() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/register",
            json!({
                "username": "johnBlocton",
                "password": "veryg00dpassw0rd",
                "favoriteClub": "Salt City Curling Club",
                "newsLetter": "true"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["newsLetter"], true);
}

#[tokio::test]
async fn test_short_username_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/register",
            json!({
                "username": "ab",
                "password": "abc12345",
                "favoriteClub": "Ogden Curling Club"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "username must be between 6 and 20 characters"
    );
    assert!(app.registry.is_empty());
}

#[tokio::test]
async fn test_digit_only_password_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/register",
            json!({
                "username": "sallyStu",
                "password": "12345678",
                "favoriteClub": "Ogden Curling Club"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "password must contain only letters and digits, with at least one of each"
    );
}

#[tokio::test]
async fn test_missing_fields_are_reported_in_order() {
    let app = TestApp::new();

    let response = app.post_json("/register", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "username is required");

    let response = app
        .post_json("/register", json!({ "username": "sallyStu" }))
        .await;
    assert_eq!(body_text(response).await, "password is required");

    let response = app
        .post_json(
            "/register",
            json!({ "username": "sallyStu", "password": "abc12345" }),
        )
        .await;
    assert_eq!(body_text(response).await, "favoriteClub is required");
}

#[tokio::test]
async fn test_unknown_club_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/register",
            json!({
                "username": "sallyStu",
                "password": "abc12345",
                "favoriteClub": "ogden curling club"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "favoriteClub must be one of the recognized clubs"
    );
}

#[tokio::test]
async fn test_wrongly_typed_field_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/register",
            json!({
                "username": 12345678,
                "password": "abc12345",
                "favoriteClub": "Ogden Curling Club"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response)
        .await
        .starts_with("Malformed registration body"));
    assert!(app.registry.is_empty());
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"username\": "))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_location_uses_configured_base_url() {
    let server = clubhouse_server::config::ServerConfig {
        public_base_url: "https://curling.example/".to_string(),
        ..Default::default()
    };
    let app = TestApp::with(
        clubhouse::Registry::new(),
        server,
        clubhouse_server::config::Environment::Production,
    );

    let response = app
        .post_json(
            "/register",
            json!({
                "username": "sallyStu",
                "password": "abc12345",
                "favoriteClub": "Park City Curling Club"
            }),
        )
        .await;

    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    let id = body_json(response).await["id"].as_str().unwrap().to_string();
    assert_eq!(location, format!("https://curling.example/user/{id}"));
}
