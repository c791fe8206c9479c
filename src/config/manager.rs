use super::{evolution::EvolutionConfig, output::OutputConfig, traits::ConfigSection};
use crate::error::PixgeneError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `PIXGENE__EVOLUTION__POPULATION_SIZE=200`
pub const ENV_PREFIX: &str = "PIXGENE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PixgeneError> {
        self.evolution.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PixgeneError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PixgeneError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| PixgeneError::Configuration(format!("Failed to parse config: {}", e)))?;

        self.replace(config)
    }

    /// Load defaults, then the optional TOML file, then `PIXGENE__*` environment overrides.
    pub fn load_layered<P: AsRef<Path>>(&self, path: Option<P>) -> Result<(), PixgeneError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path.as_ref()).required(true));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        self.replace(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PixgeneError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| PixgeneError::Toml(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| PixgeneError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `f` to a copy of the current config; the change is kept only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), PixgeneError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        self.replace(candidate)
    }

    fn replace(&self, config: AppConfig) -> Result<(), PixgeneError> {
        config.validate()?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }
}
