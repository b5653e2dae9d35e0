use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "BOOKSHELF_ENV";
const CONFIG_DIR_ENV: &str = "BOOKSHELF_CONFIG_DIR";
const ENV_PREFIX: &str = "BOOKSHELF";
const PORT_ENV: &str = "PORT";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay,
    /// and `BOOKSHELF_*` variables.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            // Default to repo root `config` directory.
            Err(_) => std::env::current_dir()
                .with_context(|| "unable to resolve current directory")?
                .join("config"),
        };

        let mut settings = Self::load_from(&environment, &config_dir)?;

        if let Ok(port) = std::env::var(PORT_ENV) {
            settings.server.port = port
                .parse()
                .with_context(|| format!("invalid {} value '{}'", PORT_ENV, port))?;
        }

        Ok(settings)
    }

    /// Build settings for `environment` from the TOML files in `config_dir`.
    ///
    /// Both `base.toml` and `{environment}.toml` are optional.
    pub fn load_from(environment: &str, config_dir: &Path) -> anyhow::Result<Self> {
        let parsed_environment: Environment = environment.parse()?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // The selected environment always wins over any file value.
        settings.environment = parsed_environment;

        Ok(settings)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    #[serde(default = "ServerSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ServerSettings {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        4000
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

/// Connection parameters for the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// `ws://`/`wss://` for a remote server, `mem://` for an embedded in-memory store.
    #[serde(default = "DatabaseSettings::default_endpoint")]
    pub endpoint: String,
    #[serde(default = "DatabaseSettings::default_namespace")]
    pub namespace: String,
    #[serde(default = "DatabaseSettings::default_database")]
    pub database: String,
    /// Root user to sign in as. Sign-in is skipped when unset.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl DatabaseSettings {
    fn default_endpoint() -> String {
        "ws://127.0.0.1:8000".to_string()
    }

    fn default_namespace() -> String {
        "bookshelf".to_string()
    }

    fn default_database() -> String {
        "library".to_string()
    }

    /// Settings for an embedded store, used by tests and local experiments.
    pub fn in_memory() -> Self {
        Self {
            endpoint: "mem://".to_string(),
            ..Self::default()
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            namespace: Self::default_namespace(),
            database: Self::default_database(),
            username: None,
            password: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    /// Fallback `EnvFilter` directives when `RUST_LOG` is unset.
    #[serde(default = "TelemetrySettings::default_filter")]
    pub filter: String,
}

impl TelemetrySettings {
    fn default_filter() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            filter: Self::default_filter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
