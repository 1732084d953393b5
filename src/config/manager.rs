use super::{evolution::EvolutionConfig, traits::ConfigSection};
use crate::error::PhrasegenError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PhrasegenError> {
        self.evolution.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML or JSON file (picked by extension). Sections and fields
    /// missing from the file keep their defaults. The current config is only
    /// replaced when the loaded one validates.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PhrasegenError> {
        let path = path.as_ref();
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::info!(
            "Loaded [{}] config from {}",
            EvolutionConfig::section_name(),
            path.display()
        );
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PhrasegenError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| PhrasegenError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Apply `f` and validate; on failure the previous config is kept
    pub fn update<F>(&self, f: F) -> Result<(), PhrasegenError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
