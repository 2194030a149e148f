use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
// No cap unless one is configured.
pub const DEFAULT_MAX_PAGE_SIZE: u64 = u64::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

// Directory service configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Deserialize)]
struct DirectoryConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    default_page_size: Option<u64>,
    max_page_size: Option<u64>,
}

impl DirectoryConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("DIRECTORY_BIND")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .with_context(|| "parse DIRECTORY_BIND")?;
        let metrics_bind = std::env::var("DIRECTORY_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9090".to_string())
            .parse()
            .with_context(|| "parse DIRECTORY_METRICS_BIND")?;
        let default_page_size = env_u64("DIRECTORY_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_page_size = env_u64("DIRECTORY_MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE)?;
        let config = Self {
            bind_addr,
            metrics_bind,
            pagination: PaginationConfig {
                default_page_size,
                max_page_size,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("DIRECTORY_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read DIRECTORY_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    /// Overlay the fields present in a YAML document.
    pub fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: DirectoryConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse directory config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.metrics_bind {
            self.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
        }
        if let Some(value) = override_cfg.default_page_size {
            self.pagination.default_page_size = value;
        }
        if let Some(value) = override_cfg.max_page_size {
            self.pagination.max_page_size = value;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        let pagination = &self.pagination;
        ensure!(
            pagination.default_page_size >= 1,
            "default page size must be at least 1"
        );
        ensure!(
            pagination.default_page_size <= pagination.max_page_size,
            "default page size {} exceeds max page size {}",
            pagination.default_page_size,
            pagination.max_page_size
        );
        Ok(())
    }
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(value) => value.parse().with_context(|| format!("parse {key}")),
        Err(_) => Ok(default),
    }
}
