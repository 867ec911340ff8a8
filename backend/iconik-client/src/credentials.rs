//! Iconik application credentials.
//!
//! # Features
//! - Loads `.env` from cwd or the executable directory
//! - Falls back to `ICONIK_APP_ID` / `ICONIK_AUTH_TOKEN` in the environment
//! - Auth token wrapped in RedactedToken (safe Debug impl, zeroized on drop)

use crate::error::ConfigError;

use common::{ErrorLocation, RedactedToken};

use std::env;
use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info, warn};

pub const APP_ID_ENV: &str = "ICONIK_APP_ID";
pub const AUTH_TOKEN_ENV: &str = "ICONIK_AUTH_TOKEN";
pub const HOST_ENV: &str = "ICONIK_HOST";

const APP_ID_NAME: &str = "App ID";
const AUTH_TOKEN_NAME: &str = "Auth token";

/// The identification required by the Iconik API: the application key id
/// (`App-Id`) and the token generated alongside it (`Auth-Token`).
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_id: String,
    pub token: RedactedToken,
}

/// Result of attempting to load a .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    pub path: Option<PathBuf>,
    pub loaded: bool,
}

impl Credentials {
    /// Validated credentials; both parts must be non-blank.
    #[track_caller]
    pub fn new(
        app_id: impl Into<String>,
        token: impl Into<RedactedToken>,
    ) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        let token = token.into();

        if app_id.trim().is_empty() {
            return Err(ConfigError::MissingCredential {
                location: ErrorLocation::from(Location::caller()),
                name: APP_ID_NAME,
            });
        }

        if token.expose().trim().is_empty() {
            return Err(ConfigError::MissingCredential {
                location: ErrorLocation::from(Location::caller()),
                name: AUTH_TOKEN_NAME,
            });
        }

        Ok(Self { app_id, token })
    }

    /// Resolve credentials from explicit values, falling back to the environment
    /// (after loading `.env` if one is found).
    #[track_caller]
    pub fn resolve(app_id: Option<String>, token: Option<String>) -> Result<Self, ConfigError> {
        let env_result = try_load_dotenv();
        if !env_result.loaded {
            debug!("No .env file found - will check existing environment variables");
        }

        let app_id = app_id
            .filter(|v| !v.trim().is_empty())
            .or_else(|| read_env(APP_ID_ENV))
            .unwrap_or_default();
        let token = token
            .filter(|v| !v.trim().is_empty())
            .or_else(|| read_env(AUTH_TOKEN_ENV))
            .unwrap_or_default();

        Self::new(app_id, token)
    }
}

fn read_env(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => None,
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Env var {name} contains invalid unicode");
            None
        }
    }
}

/// Attempts to load .env from known locations.
pub fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    if let Ok(exe_path) = env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let env_path = exe_dir.join(".env");
        if env_path.exists() {
            match dotenvy::from_path(&env_path) {
                Ok(_) => {
                    info!("Loaded .env from: {:?}", env_path);
                    return EnvLoadResult {
                        path: Some(env_path),
                        loaded: true,
                    };
                }
                Err(e) => {
                    warn!("Failed to parse .env at {:?}: {}", env_path, e);
                }
            }
        }
    }

    EnvLoadResult {
        path: None,
        loaded: false,
    }
}
