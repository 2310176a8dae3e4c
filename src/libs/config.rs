//! Configuration for the ticklist server and client.
//!
//! The configuration is a JSON file in the platform data directory with two
//! optional sections. A missing file or section falls back to defaults, and
//! `TICKLIST_*` environment variables override whatever was read.
//!
//! ```rust,no_run
//! use ticklist::libs::config::Config;
//!
//! let config = Config::load()?;
//! println!("serving on {}:{}", config.server().host, config.server().port);
//!
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::debounce::DEFAULT_DEBOUNCE;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const HOST_ENV: &str = "TICKLIST_HOST";
pub const PORT_ENV: &str = "TICKLIST_PORT";
pub const API_URL_ENV: &str = "TICKLIST_API_URL";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where `ticklist serve` listens.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// How the client commands reach the server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    /// Quiet window in milliseconds before an edit is sent.
    pub debounce_ms: u64,
}

impl ClientConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: "http://127.0.0.1:3000".to_string(),
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientConfig>,
}

impl Config {
    /// Reads the configuration file, or defaults when it does not exist.
    pub fn read() -> Result<Config> {
        Self::read_from(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Reads the configuration file and applies environment overrides.
    pub fn load() -> Result<Config> {
        let mut config = Self::read()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The server section, defaulted when absent.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    /// The client section, defaulted when absent.
    pub fn client(&self) -> ClientConfig {
        self.client.clone().unwrap_or_default()
    }

    /// Overrides host, port and API url with the values `lookup` returns for
    /// [`HOST_ENV`], [`PORT_ENV`] and [`API_URL_ENV`]. Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(host) = lookup(HOST_ENV) {
            self.server.get_or_insert_with(ServerConfig::default).host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.get_or_insert_with(ServerConfig::default).port = port,
                Err(_) => msg_warning!(Message::InvalidServerAddress(port)),
            }
        }
        if let Some(api_url) = lookup(API_URL_ENV) {
            self.client.get_or_insert_with(ClientConfig::default).api_url = api_url;
        }
    }

    /// Interactive setup wizard, prefilled with the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "server".to_string(),
                name: "Server".to_string(),
            },
            ConfigModule {
                key: "client".to_string(),
                name: "Client".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        host: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerHost.to_string())
                            .default(default.host)
                            .interact_text()?,
                        port: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerPort.to_string())
                            .default(default.port)
                            .interact_text()?,
                    });
                }
                "client" => {
                    let default = config.client();
                    msg_print!(Message::ConfigModuleClient);
                    config.client = Some(ClientConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptClientApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        debounce_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptClientDebounce.to_string())
                            .default(default.debounce_ms)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
