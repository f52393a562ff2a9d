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

//! Router assembly and the serve loop.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

use crate::error::internal_fault_for_panic;
use crate::handlers;
use crate::middleware::{build_cors_layer, render_internal_errors, with_security_headers};
use crate::AppState;

/// Build the application router with all middleware applied.
pub fn build_router(state: AppState) -> Router {
    let environment = state.environment;
    let max_body_bytes = state.server.max_body_bytes;
    let cors = build_cors_layer(&state.server.cors_origins);

    let routes = Router::new()
        .route("/", get(handlers::root).post(handlers::acknowledge))
        .route("/register", post(handlers::register))
        .route("/user", get(handlers::list_users))
        .route(
            "/user/{id}",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(internal_fault_for_panic))
        .layer(middleware::from_fn_with_state(
            environment,
            render_internal_errors,
        ))
        .layer(RequestBodyLimitLayer::new(max_body_bytes));

    with_security_headers(routes).layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// Serve `router` on `listener` until Ctrl-C or SIGTERM, then give in-flight
/// requests `drain_timeout` to finish.
pub async fn run(listener: TcpListener, router: Router, drain_timeout: Duration) -> Result<()> {
    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Clubhouse listening on http://{}", local_addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            result.context("Server task failed")?.context("Server error")?;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    info!(
        "Shutdown signal received, draining requests for up to {}s",
        drain_timeout.as_secs()
    );
    let _ = shutdown_tx.send(true);

    match tokio::time::timeout(drain_timeout, &mut server).await {
        Ok(result) => {
            result.context("Server task failed")?.context("Server error")?;
            info!("Server stopped");
        }
        Err(_) => {
            warn!("Graceful shutdown timed out, aborting remaining requests");
            server.abort();
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
