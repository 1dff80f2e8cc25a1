use std::env;
use std::env::current_dir;
use std::fmt::Display;

use config::Config;
use config::ConfigError;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::contact::ContactHandler;
use crate::domain::OwnerEmail;
use crate::relay_client::RelayClient;

/// Global configuration, loaded from `configuration/*.yaml` and `APP_*` env
/// vars. See `get_configuration`.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub contact: ContactSettings,
}

/// Server configuration
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,

    /// Prefix under which every route is mounted. Empty when served from the
    /// domain root, `/portfolio` when deployed as a project page.
    pub base_path: String,

    /// Signs flash message cookies. Must be at least 64 bytes long.
    pub flash_key: Secret<String>,

    /// Largest urlencoded form body accepted by `POST /contact`. actix's own
    /// default (16 KiB) is too small for long messages.
    #[serde(
        default = "default_max_form_bytes",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub max_form_bytes: usize,
}

fn default_max_form_bytes() -> usize { 256 * 1024 }

/// Contact form delivery
#[derive(Deserialize, Clone)]
pub struct ContactSettings {
    /// Recipient of the `mailto:` fallback
    pub owner_email: String,

    /// Form relay (e.g. Formspree). Unset (or empty) means every submission is
    /// handed off to the visitor's mail client.
    pub relay_endpoint: Option<String>,
}

impl ContactSettings {
    pub fn owner(&self) -> Result<OwnerEmail, String> { OwnerEmail::parse(self.owner_email.clone()) }

    /// Configured endpoint, with empty strings treated as absent
    // `APP_CONTACT__RELAY_ENDPOINT=` yields `Some("")`
    pub fn relay_endpoint(&self) -> Option<&str> {
        self.relay_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    pub fn handler(&self) -> Result<ContactHandler, String> {
        let relay = self
            .relay_endpoint()
            .map(|endpoint| RelayClient::new(endpoint.to_owned()));
        Ok(ContactHandler::new(self.owner()?, relay))
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("Invalid environment: {e}; use `local` or `production`")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`, then
/// override with `APP_` env vars.
///
/// `base.yaml` is always read; `local.yaml` or `production.yaml` is chosen by
/// `APP_ENVIRONMENT` (default `local`).
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or("local".to_string())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            // env vars are -always- parsed as String, hence `serde-aux` for the port
            //
            // `APP_CONTACT__RELAY_ENDPOINT=https://formspree.io/f/xyz` ->
            // `Settings.contact.relay_endpoint`
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
