use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Largest buffer the module will ever hand out. Wasm32 addresses are 32-bit
/// and Rust caps a single allocation at `isize::MAX`, which is `i32::MAX` there.
pub const PLATFORM_MAX_BUFFER_LEN: usize = i32::MAX as usize;

/// Module configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub arena: ArenaConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

/// Buffer arena limits
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Largest single buffer, in bytes.
    pub max_buffer_len: usize,
    /// Cap on the sum of all live buffers. `None` leaves growth unbounded.
    ///
    /// Failure payloads are stored even when they would cross the cap, so
    /// the arena can exceed it by the size of those diagnostics (tens of
    /// bytes per failed conversion).
    pub max_total_bytes: Option<usize>,
}

/// Input region handling
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Resolve input regions through the arena before reading them.
    pub validate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            max_buffer_len: PLATFORM_MAX_BUFFER_LEN,
            max_total_bytes: None,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { validate: true }
    }
}

impl ArenaConfig {
    /// Per-buffer cap after clamping to what the platform can address.
    pub fn effective_max_buffer_len(&self) -> usize {
        self.max_buffer_len.min(PLATFORM_MAX_BUFFER_LEN)
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.arena.max_buffer_len == 0 {
            return Err(anyhow!("arena.max_buffer_len must be greater than zero"));
        }
        if self.arena.max_total_bytes == Some(0) {
            return Err(anyhow!("arena.max_total_bytes must be greater than zero"));
        }
        Ok(())
    }
}
