//! Configuration management for the Groupie catalogue CLI.
//!
//! This module handles loading configuration values from environment variables
//! and an optional `.env` file, and turns them into the injected configuration
//! structs the core expects ([`ProviderConfig`], [`CacheConfig`]).
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::{
    management::{CacheConfig, DEFAULT_FRESHNESS},
    provider::{DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT, ProviderConfig},
};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up under `groupiecli/.env` in the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/groupiecli/.env`
/// - macOS: `~/Library/Application Support/groupiecli/.env`
/// - Windows: `%LOCALAPPDATA%/groupiecli/.env`
///
/// A missing file is not an error, every setting has a default.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("groupiecli/.env");
    path
}

/// Base url of the catalogue provider (`GROUPIE_API_URL`).
pub fn api_url() -> String {
    env::var("GROUPIE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Deadline for a single provider request (`GROUPIE_REQUEST_TIMEOUT_SECS`).
pub fn request_timeout() -> Duration {
    secs_from_env("GROUPIE_REQUEST_TIMEOUT_SECS").unwrap_or(DEFAULT_REQUEST_TIMEOUT)
}

/// Snapshot age that triggers a background refresh (`GROUPIE_FRESHNESS_SECS`).
pub fn freshness() -> Duration {
    secs_from_env("GROUPIE_FRESHNESS_SECS").unwrap_or(DEFAULT_FRESHNESS)
}

/// Address the JSON server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

pub fn provider_config() -> ProviderConfig {
    ProviderConfig::from_base_url(&api_url()).with_request_timeout(request_timeout())
}

pub fn cache_config() -> CacheConfig {
    CacheConfig::new().with_freshness(freshness())
}

fn secs_from_env(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
