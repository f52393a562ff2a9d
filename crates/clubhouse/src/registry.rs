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

//! # User Registry
//!
//! In-memory store for registered members. The registry owns every
//! [`UserRecord`], hands out clones on read, and is the only place ids are
//! minted.
//!
//! Mutations (`insert`, `delete_by_id`) take an exclusive lock; reads share it.
//! Records are kept in insertion order.

use std::collections::HashSet;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::audit;
use crate::error::RegistryError;
use crate::models::{NormalizedRegistration, SeedUser, UserRecord};
use crate::validation::validate;

/// Owning collection of registered members.
#[derive(Debug, Default)]
pub struct Registry {
    records: RwLock<Vec<UserRecord>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `records`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] if two records share an id.
    pub fn with_records(records: Vec<UserRecord>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(RegistryError::DuplicateId(record.id));
            }
        }

        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Create a registry from configured seed members.
    ///
    /// Each seed is validated like a live registration. Seeds without an id
    /// get a fresh one.
    ///
    /// # Errors
    ///
    /// * [`RegistryError::InvalidSeed`] - a seed fails validation
    /// * [`RegistryError::DuplicateId`] - two seeds share an id
    pub fn seeded(seeds: &[SeedUser]) -> Result<Self, RegistryError> {
        let records = seeds
            .iter()
            .map(|seed| -> Result<UserRecord, RegistryError> {
                let normalized =
                    validate(&seed.to_request()).map_err(|source| RegistryError::InvalidSeed {
                        username: seed.username.clone(),
                        source,
                    })?;
                Ok(normalized.into_record(seed.id.unwrap_or_else(Uuid::new_v4)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let registry = Self::with_records(records)?;
        audit::log_registry_seeded(registry.len());
        Ok(registry)
    }

    /// Store a validated registration under a fresh id and return the stored record.
    pub fn insert(&self, registration: NormalizedRegistration) -> UserRecord {
        let record = registration.into_record(Uuid::new_v4());
        self.records.write().push(record.clone());
        audit::log_user_registered(record.id, &record.username, &record.favorite_club);
        record
    }

    /// Look up a record by id.
    pub fn find_by_id(&self, id: &Uuid) -> Option<UserRecord> {
        self.records
            .read()
            .iter()
            .find(|record| &record.id == id)
            .cloned()
    }

    /// Remove the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record has that id.
    pub fn delete_by_id(&self, id: &Uuid) -> Result<(), RegistryError> {
        let mut records = self.records.write();
        let index = records
            .iter()
            .position(|record| &record.id == id)
            .ok_or(RegistryError::NotFound(*id))?;
        records.remove(index);
        drop(records);

        audit::log_user_deleted(*id);
        Ok(())
    }

    /// Snapshot of every record, in insertion order.
    pub fn list_all(&self) -> Vec<UserRecord> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
