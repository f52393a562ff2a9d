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

use crate::config::types::*;
use clubhouse::{NewsLetter, SeedUser};
use uuid::Uuid;

impl Default for ClubhouseConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            seed_users: demo_members(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
            public_base_url: "http://localhost:8000".to_string(),
            max_body_bytes: 64 * 1024,
            cors_origins: vec!["*".to_string()],
            graceful_shutdown_timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// The two members every fresh deployment starts with.
pub fn demo_members() -> Vec<SeedUser> {
    vec![
        SeedUser {
            id: Some(Uuid::from_u128(0x3c8da4d5_1597_46e7_baa1_e402aed70d80)),
            username: "sallyStudent".to_string(),
            password: "c00d1ng1sc00l".to_string(),
            favorite_club: "Cache Valley Stone Society".to_string(),
            news_letter: Some(NewsLetter::Flag(true)),
        },
        SeedUser {
            id: Some(Uuid::from_u128(0xce20079c_2326_4f17_8ac4_f617bfd28b7f)),
            username: "johnBlocton".to_string(),
            password: "veryg00dpassw0rd".to_string(),
            favorite_club: "Salt City Curling Club".to_string(),
            news_letter: Some(NewsLetter::Flag(false)),
        },
    ]
}
