//! Typed values persisted under well-known keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `tasks` | JSON array of `{id, text, completed}` |
//! | `theme` | `light` or `dark` (bare string) |
//!
//! Loading never fails on bad data: an absent key yields the default and an
//! unreadable value is logged and replaced by the default.

use std::collections::HashSet;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Deserialize;

use super::kv::KvStore;
use crate::domain::{Task, TaskId, TaskList, Theme};

/// A value with a fixed key and string encoding
pub trait Slot {
    type Value: Default;

    /// Storage key
    const KEY: &'static str;

    /// Decodes a stored value, `None` if it is malformed
    fn decode(raw: &str) -> Option<Self::Value>;

    /// Encodes a value for storage
    fn encode(value: &Self::Value) -> Result<String>;
}

/// Loads a slot, falling back to its default
pub fn load<S: Slot>(kv: &impl KvStore) -> Result<S::Value> {
    let raw = kv
        .get(S::KEY)
        .with_context(|| format!("Failed to read '{}' from store", S::KEY))?;

    let Some(raw) = raw else {
        tracing::debug!(key = S::KEY, "no stored value, using default");
        return Ok(S::Value::default());
    };

    match S::decode(&raw) {
        Some(value) => Ok(value),
        None => {
            tracing::warn!(key = S::KEY, "stored value is malformed, using default");
            Ok(S::Value::default())
        }
    }
}

/// Encodes and writes a slot
pub fn save<S: Slot>(kv: &mut impl KvStore, value: &S::Value) -> Result<()> {
    let raw = S::encode(value)?;
    kv.set(S::KEY, &raw)
        .with_context(|| format!("Failed to write '{}' to store", S::KEY))
}

/// The task list slot
pub struct TasksSlot;

/// On-disk task record. `id` is kept as a raw string so bare
/// `{text, completed}` records and foreign ids are still accepted.
#[derive(Deserialize)]
struct StoredTask {
    #[serde(default)]
    id: Option<String>,
    text: String,
    #[serde(default)]
    completed: bool,
}

impl Slot for TasksSlot {
    type Value = TaskList;
    const KEY: &'static str = "tasks";

    fn decode(raw: &str) -> Option<TaskList> {
        let stored: Vec<StoredTask> = serde_json::from_str(raw).ok()?;

        let now = Utc::now();
        let mut seen = HashSet::new();
        let mut tasks = Vec::with_capacity(stored.len());

        for record in stored {
            let parsed = record.id.and_then(|raw| raw.parse::<TaskId>().ok());
            let id = match parsed {
                Some(id) if !seen.contains(&id) => id,
                _ => TaskId::unique(&record.text, now, |candidate| seen.contains(candidate)),
            };
            seen.insert(id.clone());
            tasks.push(Task {
                id,
                text: record.text,
                completed: record.completed,
            });
        }

        Some(TaskList::from_tasks(tasks))
    }

    fn encode(value: &TaskList) -> Result<String> {
        serde_json::to_string(value.as_slice()).context("Failed to serialize tasks")
    }
}

/// The theme preference slot
pub struct ThemeSlot;

impl Slot for ThemeSlot {
    type Value = Theme;
    const KEY: &'static str = "theme";

    fn decode(raw: &str) -> Option<Theme> {
        raw.parse().ok()
    }

    fn encode(value: &Theme) -> Result<String> {
        Ok(value.as_str().to_string())
    }
}
