//! Configuration settings structures for hvacdesk
//!
//! Every section can be loaded from TOML files and overridden through
//! `HVACDESK_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig, RotationConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "hvacdesk".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/hvacdesk.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_max_size() -> u64 {
    10 * 1024 * 1024 // 10MB
}

fn default_max_files() -> usize {
    5
}

fn default_jwt_secret() -> String {
    String::new()
}

fn default_access_token_expiration() -> i64 {
    1 // hours
}

fn default_refresh_token_expiration() -> i64 {
    168 // 7 days
}

fn default_grid_start_hour() -> u8 {
    7
}

fn default_grid_end_hour() -> u8 {
    19
}

fn default_duration_minutes() -> u32 {
    90
}

fn default_min_block_minutes() -> u32 {
    30
}

// ============================================================================
// Application Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,

    /// IANA zone the business operates in. "Today", "this week" and "this
    /// month" on every report are computed in this zone.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl ApplicationConfig {
    /// Resolves the configured zone, falling back to UTC when it is unknown.
    pub fn time_zone(&self) -> jiff::tz::TimeZone {
        match jiff::tz::TimeZone::get(&self.timezone) {
            Ok(tz) => tz,
            Err(e) => {
                tracing::warn!(timezone = %self.timezone, error = %e, "Unknown time zone, using UTC");
                jiff::tz::TimeZone::UTC
            }
        }
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            timezone: default_timezone(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Seconds a request may run before it is answered with 408
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Run pending migrations before the server starts accepting requests
    #[serde(default)]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

// ============================================================================
// JWT Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret. Supply it through `HVACDESK_JWT__SECRET` outside development.
    #[serde(default = "default_jwt_secret")]
    pub secret: String,

    /// Access token lifetime in hours
    #[serde(default = "default_access_token_expiration")]
    pub access_token_expiration: i64,

    /// Refresh token lifetime in hours
    #[serde(default = "default_refresh_token_expiration")]
    pub refresh_token_expiration: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: default_jwt_secret(),
            access_token_expiration: default_access_token_expiration(),
            refresh_token_expiration: default_refresh_token_expiration(),
        }
    }
}

// ============================================================================
// Dispatch board
// ============================================================================

/// Geometry of the dispatch schedule grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// First hour shown on the grid (inclusive)
    #[serde(default = "default_grid_start_hour")]
    pub grid_start_hour: u8,

    /// Hour the grid ends at
    #[serde(default = "default_grid_end_hour")]
    pub grid_end_hour: u8,

    /// Block length used for a job that has a start but no usable end
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,

    /// Smallest block height, also used for jobs without a start time
    #[serde(default = "default_min_block_minutes")]
    pub min_block_minutes: u32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            grid_start_hour: default_grid_start_hour(),
            grid_end_hour: default_grid_end_hour(),
            default_duration_minutes: default_duration_minutes(),
            min_block_minutes: default_min_block_minutes(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSettings {
    /// Maximum file size in bytes before rotation
    #[serde(default = "default_max_size")]
    pub max_size: u64,

    /// Maximum number of rotated files to keep
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            max_files: default_max_files(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,

    #[serde(default = "default_true")]
    pub append: bool,

    /// "full", "compact" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    #[serde(default)]
    pub rotation: RotationSettings,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
            rotation: RotationSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// "trace", "debug", "info", "warn" or "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Converts the file representation into the runtime `LoggerConfig`.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file = self.file.into_file_config()?;

        LoggerConfig::new(console, file, self.level)
            .map_err(|e| ConfigError::validation("logger".to_string(), e.to_string()))
    }
}

impl FileSettings {
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self.format.parse::<LogFormat>().map_err(|e| {
            ConfigError::validation("logger.file.format".to_string(), e.to_string())
        })?;
        let rotation = RotationConfig::new(self.rotation.max_size, self.rotation.max_files)
            .map_err(|e| {
                ConfigError::validation("logger.file.rotation".to_string(), e.to_string())
            })?;

        FileConfig::new(
            self.enabled,
            PathBuf::from(self.path),
            self.append,
            format,
            rotation,
        )
        .map_err(|e| ConfigError::validation("logger.file".to_string(), e.to_string()))
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub jwt: JwtConfig,

    #[serde(default)]
    pub logger: LoggerSettings,

    #[serde(default)]
    pub dispatch: DispatchConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_application_config() -> impl Strategy<Value = ApplicationConfig> {
        (
            "[a-z][a-z0-9-]{0,20}",
            "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
            prop::sample::select(vec!["UTC", "America/Chicago", "America/Phoenix"]),
        )
            .prop_map(|(name, version, tz)| ApplicationConfig {
                name,
                version,
                timezone: tz.to_string(),
            })
    }

    fn arb_server_config() -> impl Strategy<Value = ServerConfig> {
        (
            prop::sample::select(vec!["127.0.0.1", "0.0.0.0", "localhost"]),
            1u16..=65535,
            1u64..3600,
        )
            .prop_map(|(host, port, request_timeout)| ServerConfig {
                host: host.to_string(),
                port,
                request_timeout,
            })
    }

    fn arb_database_config() -> impl Strategy<Value = DatabaseConfig> {
        (
            "[a-z]{1,10}",
            1u32..50,
            1u64..120,
            any::<bool>(),
        )
            .prop_map(|(name, max, timeout, auto_migrate)| DatabaseConfig {
                url: format!("postgres://localhost/{}", name),
                max_connections: max,
                min_connections: 1,
                connection_timeout: timeout,
                auto_migrate,
            })
    }

    fn arb_jwt_config() -> impl Strategy<Value = JwtConfig> {
        ("[a-zA-Z0-9]{32,48}", 1i64..24, 25i64..500).prop_map(|(secret, access, refresh)| {
            JwtConfig {
                secret,
                access_token_expiration: access,
                refresh_token_expiration: refresh,
            }
        })
    }

    fn arb_logger_settings() -> impl Strategy<Value = LoggerSettings> {
        (
            prop::sample::select(vec!["trace", "debug", "info", "warn", "error"]),
            any::<bool>(),
            any::<bool>(),
            prop::sample::select(vec!["full", "compact", "json"]),
            1u64..100_000_000,
            1usize..20,
        )
            .prop_map(
                |(level, colored, file_enabled, format, max_size, max_files)| LoggerSettings {
                    level: level.to_string(),
                    console: ConsoleSettings {
                        enabled: true,
                        colored,
                    },
                    file: FileSettings {
                        enabled: file_enabled,
                        path: "logs/test.log".to_string(),
                        append: true,
                        format: format.to_string(),
                        rotation: RotationSettings {
                            max_size,
                            max_files,
                        },
                    },
                },
            )
    }

    fn arb_dispatch_config() -> impl Strategy<Value = DispatchConfig> {
        (0u8..12, 13u8..=24, 15u32..240, 5u32..60).prop_map(|(start, end, dur, min)| {
            DispatchConfig {
                grid_start_hour: start,
                grid_end_hour: end,
                default_duration_minutes: dur,
                min_block_minutes: min,
            }
        })
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (
            arb_application_config(),
            arb_server_config(),
            arb_database_config(),
            arb_jwt_config(),
            arb_logger_settings(),
            arb_dispatch_config(),
        )
            .prop_map(|(application, server, database, jwt, logger, dispatch)| Settings {
                application,
                server,
                database,
                jwt,
                logger,
                dispatch,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_settings_round_trip_serialization(settings in arb_settings()) {
            let toml_str = toml::to_string(&settings).expect("Settings should serialize to TOML");
            let deserialized: Settings =
                toml::from_str(&toml_str).expect("TOML should deserialize back to Settings");
            prop_assert_eq!(settings, deserialized);
        }

        #[test]
        fn prop_generated_settings_validate(settings in arb_settings()) {
            prop_assert!(settings.validate().is_ok());
        }
    }

    #[test]
    fn test_application_config_defaults() {
        let config = ApplicationConfig::default();
        assert_eq!(config.name, "hvacdesk");
        assert_eq!(config.version, crate::pkg_version());
        assert_eq!(config.timezone, "UTC");
    }

    #[test]
    fn test_unknown_time_zone_falls_back_to_utc() {
        let config = ApplicationConfig {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };
        assert_eq!(config.time_zone().iana_name(), Some("UTC"));
    }

    #[test]
    fn test_dispatch_defaults() {
        let config = DispatchConfig::default();
        assert_eq!(config.grid_start_hour, 7);
        assert_eq!(config.grid_end_hour, 19);
        assert_eq!(config.default_duration_minutes, 90);
        assert_eq!(config.min_block_minutes, 30);
    }

    #[test]
    fn test_server_config_address() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[dispatch]
grid_start_hour = 6
"#,
        )
        .unwrap();
        assert_eq!(settings.dispatch.grid_start_hour, 6);
        assert_eq!(settings.dispatch.grid_end_hour, 19);
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_logger_settings_into_logger_config() {
        let settings = LoggerSettings {
            file: FileSettings {
                enabled: true,
                format: "compact".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let config = settings.into_logger_config().unwrap();
        assert!(config.file.enabled);
        assert_eq!(config.file.format, LogFormat::Compact);
    }

    #[test]
    fn test_logger_settings_rejects_bad_format() {
        let settings = LoggerSettings {
            file: FileSettings {
                format: "xml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(settings.into_logger_config().is_err());
    }
}
