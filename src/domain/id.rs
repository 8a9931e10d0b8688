//! Stable task identifiers
//!
//! ID Format: `t-{7-char-hash}` (e.g., `t-9d3e5f2`)
//!
//! Hash is derived from the task text + creation timestamp (+ a salt when a
//! collision has to be broken), so the same text added twice produces two
//! different IDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const HASH_LEN: usize = 7;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID format: expected 't-{{7-char-hash}}', got '{0}'")]
    InvalidTaskId(String),
}

/// Generates a 7-character hash from text, timestamp and salt
fn generate_hash(text: &str, timestamp: DateTime<Utc>, salt: u32) -> String {
    let input = format!(
        "{}{}{}",
        text,
        timestamp.timestamp_nanos_opt().unwrap_or(0),
        salt
    );
    let hash = blake3::hash(input.as_bytes());
    let hex = hash.to_hex();
    hex[..HASH_LEN].to_string()
}

/// Task ID in the format `t-{7-char-hash}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId {
    hash: String,
}

impl TaskId {
    /// Creates a new task ID from text and timestamp
    pub fn new(text: &str, timestamp: DateTime<Utc>) -> Self {
        Self::salted(text, timestamp, 0)
    }

    /// Creates a task ID with an explicit salt (used to break collisions)
    pub fn salted(text: &str, timestamp: DateTime<Utc>, salt: u32) -> Self {
        Self {
            hash: generate_hash(text, timestamp, salt),
        }
    }

    /// Creates an ID that does not collide with any ID accepted by `taken`
    pub fn unique(text: &str, timestamp: DateTime<Utc>, taken: impl Fn(&TaskId) -> bool) -> Self {
        let mut salt = 0;
        loop {
            let id = Self::salted(text, timestamp, salt);
            if !taken(&id) {
                return id;
            }
            salt += 1;
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t-{}", self.hash)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(hash) = s.strip_prefix("t-") else {
            return Err(IdError::InvalidTaskId(s.to_string()));
        };

        if hash.len() != HASH_LEN || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::InvalidTaskId(s.to_string()));
        }

        Ok(Self {
            hash: hash.to_ascii_lowercase(),
        })
    }
}

impl TryFrom<String> for TaskId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.to_string()
    }
}
