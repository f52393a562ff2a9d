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

//! HTTP API server for Clubhouse member registration.
//!
//! | Route               | Success                          | Failure            |
//! |---------------------|----------------------------------|--------------------|
//! | `POST /register`    | 201, `Location`, record JSON     | 400 with message   |
//! | `GET /user`         | 200, all records                 |                    |
//! | `GET /user/{id}`    | 200, record JSON                 | 404                |
//! | `DELETE /user/{id}` | 204                              | 404                |
//!
//! The [`Registry`] is created by the process entry point and shared with the
//! handlers through [`AppState`].

use std::sync::Arc;

use clubhouse::Registry;

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod server;

pub use server::{build_router, run};

use config::{Environment, ServerConfig};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub server: Arc<ServerConfig>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(registry: Arc<Registry>, server: ServerConfig, environment: Environment) -> Self {
        Self {
            registry,
            server: Arc::new(server),
            environment,
        }
    }
}
