//! Codec configuration
//!
//! Layered with figment: defaults, then optional `config/hexcodec.*` files,
//! then `HEXCODEC_`-prefixed environment variables (nested keys joined with
//! `__`, e.g. `HEXCODEC_DECODE__OVERLONG=mask`).

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{HexCodecError, Result};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "HEXCODEC_";

/// What `decode16` does with input whose magnitude exceeds 16 bits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlongHexPolicy {
    /// Fail with `InvalidHex`
    #[default]
    Reject,
    /// Keep the low bits of the field and log a warning
    Mask,
}

/// Decode-side settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeConfig {
    #[serde(default)]
    pub overlong: OverlongHexPolicy,
}

/// Log output settings used by `logging::init_logging`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            ansi: true,
        }
    }
}

/// Complete codec configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexCodecConfig {
    #[serde(default)]
    pub decode: DecodeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Load configuration from defaults, `config/hexcodec.*` and the environment
///
/// Priority (highest to lowest):
/// 1. `HEXCODEC_*` environment variables
/// 2. `config/hexcodec.json`
/// 3. `config/hexcodec.yaml`
/// 4. `config/hexcodec.toml`
/// 5. Default values
///
/// Missing files are skipped.
pub fn load_config() -> Result<HexCodecConfig> {
    let figment = Figment::from(Serialized::defaults(HexCodecConfig::default()))
        .merge(Toml::file("config/hexcodec.toml"))
        .merge(Yaml::file("config/hexcodec.yaml"))
        .merge(Json::file("config/hexcodec.json"))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract()
        .map_err(|e| HexCodecError::config(format!("Failed to load configuration: {}", e)))
}

/// Load configuration from a specific file
///
/// The provider is chosen by extension: `toml`, `yaml`/`yml` or `json`.
/// Keys absent from the file take their default values.
pub fn load_config_from_file<P>(path: P) -> Result<HexCodecConfig>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| HexCodecError::config("Config file must have an extension"))?;

    let base = Figment::from(Serialized::defaults(HexCodecConfig::default()));
    let figment = match extension {
        "toml" => base.merge(Toml::file(path)),
        "yaml" | "yml" => base.merge(Yaml::file(path)),
        "json" => base.merge(Json::file(path)),
        _ => {
            return Err(HexCodecError::config(format!(
                "Unsupported config file format: {}",
                extension
            )))
        },
    };

    if !path.exists() {
        return Err(HexCodecError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    figment.extract().map_err(|e| {
        HexCodecError::config(format!("Failed to load configuration from file: {}", e))
    })
}
