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

//! Domain models for member registration.
//!
//! A registration moves through three shapes:
//! [`RegistrationRequest`] (untrusted input) → [`NormalizedRegistration`]
//! (validated, defaults applied) → [`UserRecord`] (stored, with an id).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Newsletter opt-in as it may arrive on the wire.
///
/// Clients send either a JSON boolean or the strings `"true"` / `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NewsLetter {
    Flag(bool),
    Text(String),
}

impl NewsLetter {
    /// Resolve to a boolean, or `None` if the text is not `true`/`false`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NewsLetter::Flag(flag) => Some(*flag),
            NewsLetter::Text(text) if text.eq_ignore_ascii_case("true") => Some(true),
            NewsLetter::Text(text) if text.eq_ignore_ascii_case("false") => Some(false),
            NewsLetter::Text(_) => None,
        }
    }
}

impl From<bool> for NewsLetter {
    fn from(flag: bool) -> Self {
        NewsLetter::Flag(flag)
    }
}

/// An untrusted registration payload. Every field is optional so that
/// missing fields are reported by the validator rather than the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub favorite_club: Option<String>,
    #[serde(default)]
    pub news_letter: Option<NewsLetter>,
}

impl RegistrationRequest {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        favorite_club: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            favorite_club: Some(favorite_club.into()),
            news_letter: None,
        }
    }

    pub fn with_news_letter(mut self, news_letter: impl Into<NewsLetter>) -> Self {
        self.news_letter = Some(news_letter.into());
        self
    }
}

/// A registration that passed every rule, not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRegistration {
    pub username: String,
    pub password: String,
    pub favorite_club: String,
    pub news_letter: bool,
}

impl NormalizedRegistration {
    /// Attach an identifier, producing the stored form.
    pub fn into_record(self, id: Uuid) -> UserRecord {
        UserRecord {
            id,
            username: self.username,
            password: self.password,
            favorite_club: self.favorite_club,
            news_letter: self.news_letter,
        }
    }
}

/// A registered member as held by the [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub favorite_club: String,
    pub news_letter: bool,
}

/// A member supplied by configuration and loaded into the registry at startup.
///
/// Seeds go through the same validation as live registrations. A seed without
/// an `id` is given a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub username: String,
    pub password: String,
    #[serde(alias = "favoriteClub")]
    pub favorite_club: String,
    #[serde(default, alias = "newsLetter", skip_serializing_if = "Option::is_none")]
    pub news_letter: Option<NewsLetter>,
}

impl SeedUser {
    /// The registration payload this seed stands for.
    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            username: Some(self.username.clone()),
            password: Some(self.password.clone()),
            favorite_club: Some(self.favorite_club.clone()),
            news_letter: self.news_letter.clone(),
        }
    }
}
