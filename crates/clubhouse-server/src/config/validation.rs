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

use crate::config::{types::*, ValidationError};
use axum::http::HeaderValue;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for ClubhouseConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors: Vec<ValidationError> = [self.server.validate(), self.logging.validate()]
            .into_iter()
            .filter_map(Result::err)
            .collect();

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple { errors }),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort { port: self.port });
        }

        if self.bind_address.trim().is_empty() {
            return Err(ValidationError::InvalidBindAddress {
                address: self.bind_address.clone(),
            });
        }

        let has_scheme = self.public_base_url.starts_with("http://")
            || self.public_base_url.starts_with("https://");
        // Used verbatim in Location headers
        if !has_scheme || HeaderValue::from_str(&self.public_base_url).is_err() {
            return Err(ValidationError::InvalidPublicBaseUrl {
                url: self.public_base_url.clone(),
            });
        }

        if self.max_body_bytes == 0 {
            return Err(ValidationError::InvalidBodyLimit {
                limit: self.max_body_bytes,
            });
        }

        if self.graceful_shutdown_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout {
                timeout: self.graceful_shutdown_timeout_secs,
            });
        }

        // Origins end up in response headers
        for origin in &self.cors_origins {
            if origin != "*" && HeaderValue::from_str(origin).is_err() {
                return Err(ValidationError::InvalidCorsOrigin {
                    origin: origin.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ValidationError::InvalidLogLevel {
                level: self.level.clone(),
            }),
        }
    }
}
