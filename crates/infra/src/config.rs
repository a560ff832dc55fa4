//! Configuration loading and representation.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use catalog_application::DuplicateCheck;
use catalog_observability::LogConfig;

/// Candidates fetched when `CATALOG_DUPLICATE_CHECK=candidate_scan` is set
/// from the environment.
const DEFAULT_SCAN_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub duplicate_check: DuplicateCheck,
    pub log: LogConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            duplicate_check: DuplicateCheck::default(),
            log: LogConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Read `CATALOG_*` variables over the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("CATALOG_DEFAULT_PAGE_SIZE") {
            config.default_page_size = parse_page_size("CATALOG_DEFAULT_PAGE_SIZE", &raw)?;
        }
        if let Some(raw) = lookup("CATALOG_MAX_PAGE_SIZE") {
            config.max_page_size = parse_page_size("CATALOG_MAX_PAGE_SIZE", &raw)?;
        }
        if let Some(raw) = lookup("CATALOG_DUPLICATE_CHECK") {
            config.duplicate_check = match raw.trim() {
                "repository" => DuplicateCheck::Repository,
                "candidate_scan" => DuplicateCheck::CandidateScan {
                    limit: DEFAULT_SCAN_LIMIT,
                },
                other => bail!(
                    "CATALOG_DUPLICATE_CHECK must be `repository` or `candidate_scan`, got `{other}`"
                ),
            };
        }
        if let Some(raw) = lookup("CATALOG_LOG_FILTER") {
            config.log.filter = raw;
        }
        if let Some(raw) = lookup("CATALOG_LOG_JSON") {
            config.log.json = raw
                .trim()
                .parse()
                .with_context(|| format!("CATALOG_LOG_JSON must be `true` or `false`, got `{raw}`"))?;
        }

        if config.default_page_size > config.max_page_size {
            bail!(
                "CATALOG_DEFAULT_PAGE_SIZE ({}) exceeds CATALOG_MAX_PAGE_SIZE ({})",
                config.default_page_size,
                config.max_page_size
            );
        }

        Ok(config)
    }
}

fn parse_page_size(key: &str, raw: &str) -> Result<u32> {
    let value: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a positive integer, got `{raw}`"))?;
    if value == 0 {
        bail!("{key} must be a positive integer, got `{raw}`");
    }
    Ok(value)
}
