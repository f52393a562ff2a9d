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

use axum::http::StatusCode;
use clubhouse::{validate, Registry, RegistrationRequest};
use clubhouse_server::config::defaults::demo_members;
use clubhouse_server::config::{Environment, ServerConfig};
use serde_json::json;
use uuid::Uuid;

use crate::common::{body_json, body_text, TestApp};

fn seeded_app() -> TestApp {
    let registry = Registry::seeded(&demo_members()).unwrap();
    TestApp::with(registry, ServerConfig::default(), Environment::Development)
}

fn member(app: &TestApp, username: &str) -> Uuid {
    let request = RegistrationRequest::new(username, "abc12345", "Ogden Curling Club");
    app.registry.insert(validate(&request).unwrap()).id
}

#[tokio::test]
async fn test_list_users_returns_seeds_in_order() {
    let app = seeded_app();

    let response = app.get("/user").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "sallyStudent");
    assert_eq!(users[0]["id"], "3c8da4d5-1597-46e7-baa1-e402aed70d80");
    assert_eq!(users[0]["newsLetter"], true);
    assert_eq!(users[1]["username"], "johnBlocton");
    assert_eq!(users[1]["newsLetter"], false);
}

#[tokio::test]
async fn test_list_users_is_stable_without_changes() {
    let app = seeded_app();

    let first = body_json(app.get("/user").await).await;
    let second = body_json(app.get("/user").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_users_on_empty_registry() {
    let app = TestApp::new();

    let response = app.get("/user").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::new();
    let id = member(&app, "sallyStu");

    let response = app.get(&format!("/user/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["username"], "sallyStu");
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app.get(&format!("/user/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "User not found.");
}

#[tokio::test]
async fn test_non_uuid_id_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/user/not-a-real-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.delete("/user/not-a-real-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::new();
    let before = app.registry.len();
    let id = member(&app, "sallyStu");

    let response = app.delete(&format!("/user/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_text(response).await.is_empty());

    assert_eq!(app.registry.len(), before);
    assert_eq!(app.registry.find_by_id(&id), None);

    let response = app.get(&format!("/user/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_user_is_not_found() {
    let app = seeded_app();

    let response = app.delete(&format!("/user/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "User not found.");
    assert_eq!(app.registry.len(), 2);
}

#[tokio::test]
async fn test_register_then_list_and_fetch() {
    let app = seeded_app();

    let response = app
        .post_json(
            "/register",
            json!({
                "username": "curlingFan",
                "password": "st0nesweep",
                "favoriteClub": "Utah Olympic Oval Curling Club",
                "newsLetter": true
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;

    let listed = body_json(app.get("/user").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
    assert_eq!(listed[2], created);

    let id = created["id"].as_str().unwrap();
    let fetched = body_json(app.get(&format!("/user/{id}")).await).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_root_routes() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        clubhouse_server::handlers::BANNER
    );

    let response = app.post_json("/", json!({ "hello": "club" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "POST request received.");
}
