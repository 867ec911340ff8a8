//! Arguments shared by every tool: credentials, host, config and logging.

use crate::error::ToolError;
use crate::logger;

use iconik_client::credentials::{APP_ID_ENV, AUTH_TOKEN_ENV, HOST_ENV};
use iconik_client::{ClientConfig, Credentials, IconikClient};

use std::path::PathBuf;

use clap::Args;
use log::{LevelFilter, debug};

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Iconik application id
    #[arg(long = "app-id", env = APP_ID_ENV, hide_env_values = true)]
    pub app_id: Option<String>,

    /// Auth token generated for the application id
    #[arg(long, env = AUTH_TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL, e.g. https://app.iconik.io/API/
    #[arg(long, env = HOST_ENV)]
    pub host: Option<String>,

    /// Log requests and responses
    #[arg(long)]
    pub debug: bool,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Also write logs to iconik-tools.log in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl CommonArgs {
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn init_logging(&self) -> Result<(), ToolError> {
        logger::initialize(self.log_level(), self.log_dir.as_deref())
    }

    /// Config from `--config-dir` (or the default dir) with `--host` applied.
    pub fn load_config(&self) -> Result<ClientConfig, ToolError> {
        let dir = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => ClientConfig::default_dir()?,
        };
        debug!("Loading config from {}", dir.display());
        Ok(ClientConfig::load(&dir)?.with_host_override(self.host.clone()))
    }

    pub fn connect(&self) -> Result<(IconikClient, ClientConfig), ToolError> {
        let config = self.load_config()?;
        let credentials = Credentials::resolve(self.app_id.clone(), self.token.clone())?;
        let client = IconikClient::new(credentials, &config)?;
        Ok((client, config))
    }
}
