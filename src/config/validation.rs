//! Configuration validation logic
//!
//! Each section validates its own ranges; `Settings::validate` stops at the
//! first failure.

use crate::config::error::ConfigError;
use crate::config::settings::{
    DatabaseConfig, DispatchConfig, FileSettings, JwtConfig, LoggerSettings, ServerConfig,
    Settings,
};

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    ///
    /// # Validation Rules
    /// - URL must not be empty and must be a PostgreSQL URL
    /// - Both pool bounds must be positive, with min <= max
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL is required. Please specify a valid database connection string.",
            ));
        }

        if !(self.url.starts_with("postgres://") || self.url.starts_with("postgresql://")) {
            return Err(ConfigError::validation(
                "database.url",
                "Invalid database URL format. Expected postgres://[user:password@]host[:port]/database",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError {
                field: "database.min_connections".to_string(),
                message: format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            });
        }

        Ok(())
    }
}

impl JwtConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret cannot be empty",
            ));
        }

        if self.secret.len() < 32 {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret should be at least 32 characters",
            ));
        }

        if self.access_token_expiration <= 0 {
            return Err(ConfigError::validation(
                "jwt.access_token_expiration",
                "Access token expiration must be positive",
            ));
        }

        if self.access_token_expiration >= self.refresh_token_expiration {
            return Err(ConfigError::validation(
                "jwt.refresh_token_expiration",
                "Refresh token expiration should be longer than access token expiration",
            ));
        }

        Ok(())
    }
}

impl DispatchConfig {
    /// The grid must be a non-empty span within one day, and a minimum block
    /// has to fit inside it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_end_hour > 24 {
            return Err(ConfigError::validation(
                "dispatch.grid_end_hour",
                "Grid end hour must be at most 24.",
            ));
        }

        if self.grid_start_hour >= self.grid_end_hour {
            return Err(ConfigError::ValidationError {
                field: "dispatch.grid_start_hour".to_string(),
                message: format!(
                    "Grid start hour ({}) must be before grid end hour ({}).",
                    self.grid_start_hour, self.grid_end_hour
                ),
            });
        }

        if self.default_duration_minutes == 0 {
            return Err(ConfigError::validation(
                "dispatch.default_duration_minutes",
                "Default job duration must be greater than 0 minutes.",
            ));
        }

        let span_minutes = u32::from(self.grid_end_hour - self.grid_start_hour) * 60;
        if self.min_block_minutes == 0 || self.min_block_minutes > span_minutes {
            return Err(ConfigError::ValidationError {
                field: "dispatch.min_block_minutes".to_string(),
                message: format!(
                    "Minimum block must be between 1 and {} minutes.",
                    span_minutes
                ),
            });
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        if self.rotation.max_size == 0 || self.rotation.max_files == 0 {
            return Err(ConfigError::validation(
                "logger.file.rotation",
                "Rotation max_size and max_files must be greater than 0.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one of logger.console or logger.file must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.jwt.validate()?;
        self.logger.validate()?;
        self.dispatch.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::ValidationError { field, .. } => field,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_server_config_rejects_zero_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "server.port");
    }

    #[test]
    fn test_server_config_port_boundaries() {
        for port in [1, 65535] {
            let config = ServerConfig {
                port,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_server_config_rejects_zero_request_timeout() {
        let config = ServerConfig {
            request_timeout: 0,
            ..Default::default()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "server.request_timeout"
        );
    }

    #[test]
    fn test_database_config_requires_url() {
        let config = DatabaseConfig::default();
        assert_eq!(field_of(config.validate().unwrap_err()), "database.url");
    }

    #[test]
    fn test_database_config_rejects_other_schemes() {
        let config = DatabaseConfig {
            url: "mysql://localhost/hvac".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "database.url");
    }

    #[test]
    fn test_database_config_min_above_max() {
        let config = DatabaseConfig {
            url: "postgres://localhost/hvac".to_string(),
            max_connections: 2,
            min_connections: 5,
            ..Default::default()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "database.min_connections"
        );
    }

    #[test]
    fn test_jwt_secret_length() {
        let config = JwtConfig {
            secret: "short".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "jwt.secret");

        let config = JwtConfig {
            secret: "x".repeat(32),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_jwt_refresh_must_outlive_access() {
        let config = JwtConfig {
            secret: "x".repeat(40),
            access_token_expiration: 10,
            refresh_token_expiration: 10,
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "jwt.refresh_token_expiration"
        );
    }

    #[test]
    fn test_dispatch_grid_must_be_ordered() {
        let config = DispatchConfig {
            grid_start_hour: 19,
            grid_end_hour: 7,
            ..Default::default()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "dispatch.grid_start_hour"
        );
    }

    #[test]
    fn test_dispatch_min_block_must_fit() {
        let config = DispatchConfig {
            grid_start_hour: 8,
            grid_end_hour: 9,
            min_block_minutes: 61,
            ..Default::default()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "dispatch.min_block_minutes"
        );
        assert!(DispatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_logger_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(settings.validate().unwrap_err()), "logger.level");
    }

    #[test]
    fn test_logger_invalid_file_format() {
        let mut settings = LoggerSettings::default();
        settings.file.format = "xml".to_string();
        assert_eq!(
            field_of(settings.validate().unwrap_err()),
            "logger.file.format"
        );
    }

    #[test]
    fn test_settings_validate_reports_first_failure() {
        let settings = Settings {
            database: DatabaseConfig {
                url: "postgres://localhost/hvac".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(field_of(settings.validate().unwrap_err()), "jwt.secret");
    }
}
