use axum::http::HeaderValue;
use menva::FromEnv;
use std::{fmt, net::Ipv4Addr, path::Path, str::FromStr, time::Duration};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Env {
    #[default]
    Development,
    Production,
    Test,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Env::Development),
            "production" => Ok(Env::Production),
            "test" => Ok(Env::Test),
            _ => Err(format!("Invalid value for enum Env: {}", s)),
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Test => write!(f, "test"),
        }
    }
}

/// Process wide settings: runtime sizing and error reporting.
#[derive(Debug, Clone, FromEnv)]
pub struct SharedConfig {
    pub env: Env,
    pub worker_threads: usize,
    pub max_blocking_threads: usize,
    sentry_token: String,
}

impl SharedConfig {
    pub fn stub() -> Self {
        Self {
            env: Env::Test,
            worker_threads: 1,
            max_blocking_threads: 1,
            sentry_token: String::new(),
        }
    }

    pub fn sentry_token(&self) -> Option<&str> {
        if self.sentry_token.is_empty() {
            None
        } else {
            Some(&self.sentry_token)
        }
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            env: Env::Development,
            worker_threads: 4,
            max_blocking_threads: 4,
            sentry_token: String::new(),
        }
    }
}

#[derive(Debug, Clone, FromEnv)]
pub struct APIConfig {
    ip: Ipv4Addr,
    port: u16,
    allowed_origins: String,
    static_dir: String,
    request_timeout: u64,
}

impl APIConfig {
    pub fn static_dir(&self) -> &Path {
        Path::new(&self.static_dir)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl ServiceConfig for APIConfig {
    fn stub() -> Self {
        Self {
            ip: Ipv4Addr::new(127, 0, 0, 1),
            port: 8000,
            allowed_origins: "*".into(),
            static_dir: "./static".into(),
            request_timeout: 10,
        }
    }

    fn socket_addr(&self) -> (Ipv4Addr, u16) {
        (self.ip, self.port)
    }

    fn allowed_origins(&self) -> AllowedOrigins {
        AllowedOrigins::from_string(&self.allowed_origins)
    }

    fn print(&self) {
        println!("http://{:?}:{:?}", &self.ip, &self.port)
    }
}

pub trait ServiceConfig {
    fn stub() -> Self;

    fn socket_addr(&self) -> (Ipv4Addr, u16);

    fn allowed_origins(&self) -> AllowedOrigins;

    fn print(&self);
}

#[derive(Clone, Debug, Default)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    fn from_string(allowed_origins: &str) -> Self {
        Self(
            allowed_origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_owned())
                .collect(),
        )
    }

    pub fn is_any(&self) -> bool {
        self.0.iter().any(|s| s == "*")
    }

    pub fn to_headers(&self) -> Vec<HeaderValue> {
        self.0
            .iter()
            .filter_map(|s| s.parse::<HeaderValue>().ok())
            .collect()
    }
}
