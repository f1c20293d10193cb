use std::time::Duration;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value {value:?}: expected {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Where observations are stored and which region they are tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite URL (default: `sqlite:lp_history.db`).
    pub database_url: String,
    /// Region label stored with every observation (default: `NA`).
    pub region: String,
}

impl StoreConfig {
    /// | Env Var         | Default                 |
    /// |-----------------|-------------------------|
    /// | `DATABASE_URL`  | `sqlite:lp_history.db`  |
    /// | `LADDER_REGION` | `NA`                    |
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: non_empty(&lookup, "DATABASE_URL")
                .unwrap_or_else(|| "sqlite:lp_history.db".into()),
            region: non_empty(&lookup, "LADDER_REGION").unwrap_or_else(|| "NA".into()),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Full configuration for one tracking run.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub store: StoreConfig,
    /// Riot developer or production key.
    pub riot_api_key: String,
    /// Riot platform routing value (default: `na1`).
    pub riot_platform: String,
    /// Chat webhook URL. Optional only in dry-run mode.
    pub discord_webhook: Option<String>,
    /// Per-request HTTP timeout (default: 10 s).
    pub http_timeout: Duration,
    /// Log the summary instead of delivering it (default: `false`).
    pub dry_run: bool,
}

impl WorkerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var             | Default                        |
    /// |---------------------|--------------------------------|
    /// | `RIOT_API_KEY`      | required                       |
    /// | `DISCORD_WEBHOOK`   | required unless `DRY_RUN=true` |
    /// | `RIOT_PLATFORM`     | `na1`                          |
    /// | `HTTP_TIMEOUT_SECS` | `10`                           |
    /// | `DRY_RUN`           | `false`                        |
    ///
    /// plus the [`StoreConfig`] variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = StoreConfig::from_lookup(&lookup);

        let riot_api_key =
            non_empty(&lookup, "RIOT_API_KEY").ok_or(ConfigError::Missing("RIOT_API_KEY"))?;

        let riot_platform = non_empty(&lookup, "RIOT_PLATFORM").unwrap_or_else(|| "na1".into());

        let http_timeout_secs: u64 = match non_empty(&lookup, "HTTP_TIMEOUT_SECS") {
            None => 10,
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "HTTP_TIMEOUT_SECS",
                value: raw,
                expected: "a whole number of seconds",
            })?,
        };

        let dry_run = match non_empty(&lookup, "DRY_RUN") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                key: "DRY_RUN",
                value: raw,
                expected: "true or false",
            })?,
        };

        let discord_webhook = non_empty(&lookup, "DISCORD_WEBHOOK");
        if discord_webhook.is_none() && !dry_run {
            return Err(ConfigError::Missing("DISCORD_WEBHOOK"));
        }

        Ok(Self {
            store,
            riot_api_key,
            riot_platform,
            discord_webhook,
            http_timeout: Duration::from_secs(http_timeout_secs),
            dry_run,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
