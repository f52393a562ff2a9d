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

//! Registration validation.
//!
//! [`validate`] applies the rules below in order and stops at the first
//! failure. The order is part of the contract: clients rely on which error a
//! payload with several problems reports.
//!
//! 1. `username` present and non-empty
//! 2. `password` present and non-empty
//! 3. `favoriteClub` present and non-empty
//! 4. `username` is 6 to 20 characters
//! 5. `password` is 8 to 36 characters
//! 6. `password` is ASCII letters and digits only, with at least one of each
//! 7. `favoriteClub` is one of [`CLUBS`](crate::CLUBS)
//! 8. `newsLetter`, if given, is a boolean or `"true"`/`"false"`

use crate::clubs::is_known_club;
use crate::error::{Field, ValidationError};
use crate::models::{NormalizedRegistration, RegistrationRequest};

/// Check a registration payload and normalize it.
///
/// Pure and deterministic: the result depends only on `request` and the fixed
/// club list.
pub fn validate(request: &RegistrationRequest) -> Result<NormalizedRegistration, ValidationError> {
    let username = required(request.username.as_deref(), Field::Username)?;
    let password = required(request.password.as_deref(), Field::Password)?;
    let favorite_club = required(request.favorite_club.as_deref(), Field::FavoriteClub)?;

    check_length(username, Field::Username)?;
    check_length(password, Field::Password)?;

    if !is_alphanumeric_mix(password) {
        return Err(ValidationError::InvalidFormat(Field::Password));
    }

    if !is_known_club(favorite_club) {
        return Err(ValidationError::InvalidEnum(Field::FavoriteClub));
    }

    let news_letter = match &request.news_letter {
        None => false,
        Some(value) => value
            .as_bool()
            .ok_or(ValidationError::InvalidFormat(Field::NewsLetter))?,
    };

    Ok(NormalizedRegistration {
        username: username.to_string(),
        password: password.to_string(),
        favorite_club: favorite_club.to_string(),
        news_letter,
    })
}

fn required(value: Option<&str>, field: Field) -> Result<&str, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn check_length(value: &str, field: Field) -> Result<(), ValidationError> {
    let Some(bounds) = field.length_bounds() else {
        return Ok(());
    };
    if bounds.contains(&value.chars().count()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength(field))
    }
}

/// Letters and digits only, at least one of each.
fn is_alphanumeric_mix(password: &str) -> bool {
    password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}
