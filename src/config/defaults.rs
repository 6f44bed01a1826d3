/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Config file
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "MEDIA_CHANNELS_";

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./media-channels.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_LOG_QUERIES: bool = false;

// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
