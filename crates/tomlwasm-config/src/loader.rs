use anyhow::{anyhow, Result};
use config::{Config, File, FileFormat};
use std::path::Path;

use crate::BridgeConfig;

/// Loads [`BridgeConfig`] from TOML text or files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse configuration from TOML text. Missing sections take defaults.
    pub fn from_toml_str(source: &str) -> Result<BridgeConfig> {
        let config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        let bridge: BridgeConfig = config.try_deserialize()?;
        bridge.validate()?;
        Ok(bridge)
    }

    /// Load configuration from a TOML file. A missing file yields defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<BridgeConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(BridgeConfig::default());
        }

        let config = Config::builder()
            .add_source(File::new(
                path.to_str().ok_or_else(|| anyhow!("Invalid config path"))?,
                FileFormat::Toml,
            ))
            .build()?;

        let bridge: BridgeConfig = config.try_deserialize()?;
        bridge.validate()?;
        Ok(bridge)
    }
}
