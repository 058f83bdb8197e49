//! Configuration
//!
//! Layered with figment: built-in defaults, then a TOML file, then
//! `DECKCRAFT_`-prefixed environment variables. Nested keys use `__` in the
//! environment, e.g. `DECKCRAFT_REMOTE__API_KEY`.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::knowledge::{GeographicProfile, KnowledgeBase, KnowledgeError};
use crate::render::{canvas, CanvasSize, RenderError};

/// File read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "deckcraft.toml";
pub const ENV_PREFIX: &str = "DECKCRAFT_";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),

    #[error("invalid configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("invalid place in configuration: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckcraftConfig {
    pub render: RenderConfig,
    pub remote: RemoteConfig,
    /// Where rendered decks are written
    pub output_dir: PathBuf,
    /// Extra places, looked up after the built-in ones
    pub places: Vec<PlaceConfig>,
}

impl Default for DeckcraftConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            remote: RemoteConfig::default(),
            output_dir: PathBuf::from("."),
            places: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas is `33*scale` by `128*scale` pixels
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: canvas::DEFAULT_SCALE,
        }
    }
}

impl RenderConfig {
    pub fn canvas(&self) -> Result<CanvasSize, RenderError> {
        CanvasSize::from_scale(self.scale)
    }
}

/// Remote image generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Without a key the remote generator is not used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.venice.ai/api/v1".to_string(),
            model: "fluently-xl".to_string(),
            timeout_secs: 60,
            api_key: None,
        }
    }
}

/// A place profile given in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceConfig {
    pub name: String,
    pub top: Vec<String>,
    pub upper_middle: Vec<String>,
    pub lower_middle: Vec<String>,
    pub foreground: Vec<String>,
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<String>,
}

impl PlaceConfig {
    pub fn to_profile(&self) -> Result<GeographicProfile, KnowledgeError> {
        GeographicProfile::new(
            self.top.clone(),
            self.upper_middle.clone(),
            self.lower_middle.clone(),
            self.foreground.clone(),
            self.details.clone(),
            self.typography.clone(),
        )
    }
}

impl DeckcraftConfig {
    /// The provider stack for an optional explicit file
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(DeckcraftConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
        }
        let config: DeckcraftConfig = Self::figment(path).extract().map_err(Box::new)?;
        // fail early on a bad scale
        config.render.canvas()?;
        Ok(config)
    }

    /// Built-in places plus the configured ones
    pub fn knowledge_base(&self) -> Result<KnowledgeBase, KnowledgeError> {
        let extra = self
            .places
            .iter()
            .map(|place| Ok((place.name.clone(), place.to_profile()?)))
            .collect::<Result<Vec<_>, KnowledgeError>>()?;
        KnowledgeBase::with_places(extra)
    }
}
