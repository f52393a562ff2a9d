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

//! # Clubhouse
//!
//! Member registration core for curling clubs.
//!
//! The crate is split into two pieces that compose leaves-first:
//!
//! - the **validator** ([`validate`]) checks a [`RegistrationRequest`] against a
//!   fixed, ordered rule set and produces a [`NormalizedRegistration`] or the
//!   first failing [`ValidationError`];
//! - the **registry** ([`Registry`]) owns every [`UserRecord`], assigns
//!   identifiers, and supports lookup, deletion and enumeration.
//!
//! ```rust
//! use clubhouse::{validate, Registry, RegistrationRequest};
//!
//! let registry = Registry::new();
//! let request = RegistrationRequest::new("sallyStu", "abc12345", "Ogden Curling Club");
//!
//! let normalized = validate(&request).unwrap();
//! let record = registry.insert(normalized);
//!
//! assert!(!record.news_letter);
//! assert_eq!(registry.find_by_id(&record.id), Some(record));
//! ```
//!
//! The HTTP surface lives in the `clubhouse-server` crate.

pub mod audit;
pub mod clubs;
pub mod error;
pub mod models;
pub mod registry;
pub mod validation;

pub use clubs::{is_known_club, CLUBS};
pub use error::{Field, RegistryError, ValidationError};
pub use models::{NewsLetter, NormalizedRegistration, RegistrationRequest, SeedUser, UserRecord};
pub use registry::Registry;
pub use validation::validate;
