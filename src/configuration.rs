//! src/configuration.rs
use crate::error_chain_fmt;
use config::{Config, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    /// Never read from the configuration files, only from `PORT`.
    #[serde(skip_deserializing)]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to load the .env file")]
    DotEnv(#[source] dotenvy::Error),
    #[error("Failed to determine the current directory")]
    CurrentDir(#[source] std::io::Error),
    #[error("Failed to read the configuration files")]
    Files(#[from] config::ConfigError),
    #[error("{0}")]
    Environment(String),
    #[error("PORT must be set to a valid TCP port number")]
    Port(#[source] envy::Error),
    #[error("PORT must be between 1 and 65535, got 0")]
    ZeroPort,
}

impl std::fmt::Debug for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(PartialEq, Debug)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

#[derive(Deserialize)]
struct PortVariable {
    port: u16,
}

/// Reads the listen port out of a set of environment variables.
///
/// There is no fallback: a missing, malformed or zero `PORT` is an error.
pub fn port_from_env<I>(vars: I) -> Result<u16, ConfigurationError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let PortVariable { port } = envy::from_iter(vars).map_err(ConfigurationError::Port)?;
    if port == 0 {
        return Err(ConfigurationError::ZeroPort);
    }
    Ok(port)
}

/// Loads settings from the working directory and the process environment.
pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let base_path = std::env::current_dir().map_err(ConfigurationError::CurrentDir)?;
    get_configuration_from(&base_path, std::env::vars())
}

/// Loads `base_path/configuration/*` and `base_path/.env`.
///
/// Only `base_path` is searched for `.env`, never its parents.
/// Entries in `vars` take precedence over the `.env` file.
pub fn get_configuration_from<I>(base_path: &Path, vars: I) -> Result<Settings, ConfigurationError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut variables = dotenv_vars(base_path)?;
    variables.extend(vars);

    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = variables
        .get("APP_ENVIRONMENT")
        .cloned()
        .unwrap_or_else(|| "local".into())
        .try_into()
        .map_err(ConfigurationError::Environment)?;

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;
    settings.application.port = port_from_env(variables)?;

    Ok(settings)
}

fn dotenv_vars(base_path: &Path) -> Result<HashMap<String, String>, ConfigurationError> {
    match dotenvy::from_path_iter(base_path.join(".env")) {
        Ok(entries) => entries
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(ConfigurationError::DotEnv),
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(ConfigurationError::DotEnv(e)),
    }
}
