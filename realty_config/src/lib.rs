use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use config::{Environment, File, FileFormat};
use realty_models::country::Country;
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding additional config files, separated like
/// `PATH`. Later files override earlier ones.
pub const CONFIG_PATHS_ENV: &str = "REALTY_CONFIG";

/// Prefix of environment variables overriding single values, e.g.
/// `REALTY_LEAD__ENDPOINT`.
pub const ENV_PREFIX: &str = "REALTY";

/// Load the default config, the files listed in [`CONFIG_PATHS_ENV`] and the
/// environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(extra) = std::env::var_os(CONFIG_PATHS_ENV) {
        paths.extend(std::env::split_paths(&extra));
    }

    build(&paths, &[], true)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    build(paths, &[], false)
}

/// Load the given files and apply the TOML snippets in `overrides` on top.
pub fn load_with_override(paths: &[impl AsRef<Path>], overrides: &[&str]) -> anyhow::Result<Config> {
    build(paths, overrides, false)
}

fn build(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
    environment: bool,
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    let mut builder = overrides.iter().fold(builder, |builder, &snippet| {
        builder.add_source(File::from_str(snippet, FileFormat::Toml))
    });

    if environment {
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
    }

    let config = builder
        .build()?
        .try_deserialize::<Config>()
        .context("Failed to load config")?;
    config.validate()?;

    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub lead: LeadConfig,
    pub contact: ContactConfig,
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.lead.simulate || self.lead.endpoint.is_some(),
            "lead.endpoint must be set unless lead.simulate is enabled"
        );
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LeadConfig {
    /// URL of the spreadsheet script receiving the leads.
    pub endpoint: Option<Url>,
    /// Report every submission as successful without contacting the
    /// endpoint. Meant for local development only.
    #[serde(default)]
    pub simulate: bool,
    pub simulate_delay: Duration,
    pub default_country: Country,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub company: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
}
