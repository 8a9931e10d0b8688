//! # Storage Layer
//!
//! Persistence for tickle: a string key-value store with typed slots on top.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks + theme | JSON object of string values | `{data_dir}/store.json` |
//! | Config | TOML | `{config_dir}/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`FileKvStore`] holds an `fs2` lock on `store.lock` for each access
//! - Writes are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`KvStore`] - the persistence adapter (`get`/`set`)
//! - [`Slot`] - typed value under a fixed key, loaded with a fallback
//! - [`Workspace`] - the opened data directory
//! - [`Config`] - user configuration

mod kv;
mod slots;
mod config;
mod workspace;

pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use slots::{load, save, Slot, TasksSlot, ThemeSlot};
pub use config::{Config, ConfigError, OutputFormat};
pub use workspace::Workspace;
