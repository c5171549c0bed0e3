use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "pagination.toml";
pub const ENV_DEFAULT_PAGE_SIZE: &str = "PAGE_LINKS_DEFAULT_PAGE_SIZE";
pub const ENV_MAX_PAGE_SIZE: &str = "PAGE_LINKS_MAX_PAGE_SIZE";

/// Request-side paging defaults. Link derivation itself takes no config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the request carries no `page[size]`.
    /// `0` means list endpoints are unpaged unless the client asks otherwise.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound for a client-supplied page size; `0` disables the cap.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

fn default_page_size() -> u64 { 20 }
fn default_max_page_size() -> u64 { 100 }

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_page_size: default_page_size(), max_page_size: default_max_page_size() }
    }
}

/// Load from `CONFIG_PATH` (or `pagination.toml`), apply env overrides, validate.
pub fn load_default() -> Result<PaginationConfig> {
    let _ = dotenvy::dotenv();
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut cfg = if std::path::Path::new(&path).exists() {
        load_from_file(&path)?
    } else {
        debug!(%path, "pagination config file not found; using defaults");
        PaginationConfig::default()
    };
    cfg.apply_overrides(|key| std::env::var(key).ok())?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<PaginationConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {path}"))?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<PaginationConfig> {
    let cfg: PaginationConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl PaginationConfig {
    /// Overwrite fields from `lookup`, keyed by the `PAGE_LINKS_*` variable names.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_DEFAULT_PAGE_SIZE) {
            self.default_page_size = parse_size(ENV_DEFAULT_PAGE_SIZE, &v)?;
        }
        if let Some(v) = lookup(ENV_MAX_PAGE_SIZE) {
            self.max_page_size = parse_size(ENV_MAX_PAGE_SIZE, &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_page_size != 0 && self.default_page_size > self.max_page_size {
            return Err(anyhow!(
                "default_page_size ({}) must not exceed max_page_size ({})",
                self.default_page_size,
                self.max_page_size
            ));
        }
        Ok(())
    }
}

fn parse_size(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| anyhow!("{key} must be an unsigned integer, got {raw:?}: {e}"))
}
