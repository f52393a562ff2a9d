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

//! Structured audit logging for membership changes.
//!
//! Every event carries an `event_type` field so log pipelines can filter on it.
//! Passwords are never logged.

use uuid::Uuid;

use crate::error::ValidationError;

/// Event types for membership operations.
pub mod events {
    /// A member was added to the registry.
    pub const USER_REGISTERED: &str = "user.registered";
    /// A registration payload failed validation.
    pub const USER_REGISTRATION_REJECTED: &str = "user.registration_rejected";
    /// A member was removed from the registry.
    pub const USER_DELETED: &str = "user.deleted";
    /// The registry was initialized from seed members.
    pub const REGISTRY_SEEDED: &str = "registry.seeded";
}

/// Log a successful registration.
pub fn log_user_registered(id: Uuid, username: &str, favorite_club: &str) {
    tracing::info!(
        event_type = events::USER_REGISTERED,
        user_id = %id,
        username = %username,
        favorite_club = %favorite_club,
        "User registered"
    );
}

/// Log a rejected registration.
pub fn log_registration_rejected(error: &ValidationError) {
    tracing::info!(
        event_type = events::USER_REGISTRATION_REJECTED,
        field = %error.field(),
        reason = %error,
        "Registration rejected"
    );
}

/// Log a member removal.
pub fn log_user_deleted(id: Uuid) {
    tracing::info!(
        event_type = events::USER_DELETED,
        user_id = %id,
        "User deleted"
    );
}

/// Log registry initialization.
pub fn log_registry_seeded(count: usize) {
    tracing::info!(
        event_type = events::REGISTRY_SEEDED,
        count,
        "Registry seeded"
    );
}
