use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Distinguishes runtime behavior for different stages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Mode used when `LIFECONNECT_DATA_MODE` is not set.
    pub fn default_data_mode(self) -> DataMode {
        match self {
            AppEnvironment::Production => DataMode::Live,
            AppEnvironment::Development | AppEnvironment::Test => DataMode::Mock,
        }
    }
}

/// Top-level configuration for the site.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let api_base_url = normalize_api_url(
            &env::var("LIFECONNECT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        )?;
        let mode = match env::var("LIFECONNECT_DATA_MODE") {
            Ok(raw) => raw.parse::<DataMode>()?,
            Err(_) => environment.default_data_mode(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            data: DataConfig { mode, api_base_url },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where list data and form submissions go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub mode: DataMode,
    pub api_base_url: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            mode: DataMode::Mock,
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Selects the embedded sample data or the remote collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    Mock,
    Live,
}

impl DataMode {
    pub const fn label(self) -> &'static str {
        match self {
            DataMode::Mock => "mock",
            DataMode::Live => "live",
        }
    }
}

impl std::str::FromStr for DataMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mock" | "sample" => Ok(Self::Mock),
            "live" | "http" => Ok(Self::Live),
            other => Err(ConfigError::InvalidDataMode {
                value: other.to_string(),
            }),
        }
    }
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidApiUrl {
            value: raw.to_string(),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDataMode { value: String },
    InvalidApiUrl { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDataMode { value } => write!(
                f,
                "LIFECONNECT_DATA_MODE must be 'mock' or 'live' (found '{value}')"
            ),
            ConfigError::InvalidApiUrl { value } => write!(
                f,
                "LIFECONNECT_API_URL must be an http(s) URL (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidDataMode { .. }
            | ConfigError::InvalidApiUrl { .. } => None,
        }
    }
}
