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

//! Error types for registration validation and registry access.

use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;
use uuid::Uuid;

/// A field of the registration payload, displayed with its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
    FavoriteClub,
    NewsLetter,
}

impl Field {
    /// Name of the field as it appears in JSON payloads.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
            Field::FavoriteClub => "favoriteClub",
            Field::NewsLetter => "newsLetter",
        }
    }

    /// Accepted length range in characters, for fields that have one.
    pub fn length_bounds(self) -> Option<RangeInclusive<usize>> {
        match self {
            Field::Username => Some(6..=20),
            Field::Password => Some(8..=36),
            Field::FavoriteClub | Field::NewsLetter => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

fn describe_bounds(field: &Field) -> String {
    match field.length_bounds() {
        Some(range) => format!("between {} and {} characters", range.start(), range.end()),
        None => "of a valid length".to_string(),
    }
}

fn describe_format(field: &Field) -> &'static str {
    match field {
        Field::Password => "contain only letters and digits, with at least one of each",
        Field::NewsLetter => "be true or false",
        Field::Username | Field::FavoriteClub => "be well formed",
    }
}

/// The first registration rule a payload failed.
///
/// Rules are checked in a fixed order, so a payload with several problems
/// always reports the same one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("{0} must be {bounds}", bounds = describe_bounds(.0))]
    InvalidLength(Field),

    #[error("{0} must {rule}", rule = describe_format(.0))]
    InvalidFormat(Field),

    #[error("{0} must be one of the recognized clubs")]
    InvalidEnum(Field),
}

impl ValidationError {
    /// The field whose rule failed.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::InvalidLength(field)
            | ValidationError::InvalidFormat(field)
            | ValidationError::InvalidEnum(field) => *field,
        }
    }
}

/// Errors raised by [`Registry`](crate::Registry) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("User not found: {0}")]
    NotFound(Uuid),

    #[error("Duplicate user id: {0}")]
    DuplicateId(Uuid),

    #[error("Seed user '{username}' is invalid: {source}")]
    InvalidSeed {
        username: String,
        source: ValidationError,
    },
}
