pub mod bridge;
pub mod loader;

pub use bridge::{ArenaConfig, BridgeConfig, InputConfig, LogLevel, LoggingConfig, PLATFORM_MAX_BUFFER_LEN};
pub use loader::ConfigLoader;
