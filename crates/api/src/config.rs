use domain::services::AvailabilityModel;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    /// Reservation engine configuration.
    pub reservations: ReservationsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReservationsConfig {
    /// Which capacity model the engine runs under.
    #[serde(default = "default_availability_model")]
    pub model: AvailabilityModel,

    /// Interval of the reminder sweep. Must stay under the 60-minute
    /// reminder window or reservations could slip through unnotified.
    #[serde(default = "default_reminder_sweep_minutes")]
    pub reminder_sweep_minutes: u64,

    /// Interval of the expiration sweep. Must stay under the 30-minute
    /// no-show window.
    #[serde(default = "default_expiration_sweep_minutes")]
    pub expiration_sweep_minutes: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    1800
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_availability_model() -> AvailabilityModel {
    AvailabilityModel::Simple
}

fn default_reminder_sweep_minutes() -> u64 {
    15
}

fn default_expiration_sweep_minutes() -> u64 {
    10
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with CM__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CM").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(config::ConfigError::Message)?;
        Ok(cfg)
    }

    /// Validate cross-field constraints the type system cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.reservations.reminder_sweep_minutes == 0
            || self.reservations.reminder_sweep_minutes >= 60
        {
            return Err(format!(
                "reservations.reminder_sweep_minutes must be between 1 and 59, got {}",
                self.reservations.reminder_sweep_minutes
            ));
        }
        if self.reservations.expiration_sweep_minutes == 0
            || self.reservations.expiration_sweep_minutes >= 30
        {
            return Err(format!(
                "reservations.expiration_sweep_minutes must be between 1 and 29, got {}",
                self.reservations.expiration_sweep_minutes
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err("database.min_connections exceeds max_connections".to_string());
        }
        Ok(())
    }

    /// The socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .expect("invalid server host/port configuration")
    }

    /// Database pool configuration for the persistence layer.
    pub fn pool_config(&self) -> persistence::db::DatabaseConfig {
        persistence::db::DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
            min_connections: self.database.min_connections,
            connect_timeout_secs: self.database.connect_timeout_secs,
            idle_timeout_secs: self.database.idle_timeout_secs,
            max_lifetime_secs: self.database.max_lifetime_secs,
        }
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// This method creates a config entirely from defaults and overrides,
    /// without relying on config files (which may not be accessible during
    /// tests).
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            request_timeout_secs = 30

            [database]
            url = ""
            max_connections = 20
            min_connections = 5
            connect_timeout_secs = 10
            idle_timeout_secs = 600
            max_lifetime_secs = 1800

            [logging]
            level = "info"
            format = "json"

            [reservations]
            model = "simple"
            reminder_sweep_minutes = 15
            expiration_sweep_minutes = 10
        "#;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            defaults,
            config::FileFormat::Toml,
        ));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let config = builder.build()?;
        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(config::ConfigError::Message)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::load_for_test(&[]).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.reservations.model, AvailabilityModel::Simple);
        assert_eq!(config.reservations.reminder_sweep_minutes, 15);
        assert_eq!(config.reservations.expiration_sweep_minutes, 10);
    }

    #[test]
    fn test_strict_model_override() {
        let config = Config::load_for_test(&[("reservations.model", "strict")]).unwrap();
        assert_eq!(config.reservations.model, AvailabilityModel::Strict);
    }

    #[test]
    fn test_rejects_unknown_model() {
        let result = Config::load_for_test(&[("reservations.model", "hybrid")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_expiration_sweep_must_fit_no_show_window() {
        // an interval of 30 minutes or more can miss the no-show window
        let result = Config::load_for_test(&[("reservations.expiration_sweep_minutes", "30")]);
        assert!(result.is_err());

        let result = Config::load_for_test(&[("reservations.expiration_sweep_minutes", "29")]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_reminder_sweep_must_fit_reminder_window() {
        let result = Config::load_for_test(&[("reservations.reminder_sweep_minutes", "60")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_sweep_interval_rejected() {
        let result = Config::load_for_test(&[("reservations.expiration_sweep_minutes", "0")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::load_for_test(&[("server.port", "9000")]).unwrap();
        assert_eq!(config.socket_addr().port(), 9000);
    }

    #[test]
    fn test_min_connections_bound() {
        let result = Config::load_for_test(&[
            ("database.min_connections", "30"),
            ("database.max_connections", "10"),
        ]);
        assert!(result.is_err());
    }
}
