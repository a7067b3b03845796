use std::env::vars;
use std::time::Duration;

use agit_states::State;
use log::info;
use serde::Deserialize;

const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Environment as read, every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    search_debounce_ms: Option<u64>,
    seed_sample: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    search_debounce: Duration,
    seed_sample: bool,
}

impl State for DashboardConfig {}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            seed_sample: true,
        }
    }
}

impl DashboardConfig {
    /// Reads `SEARCH_DEBOUNCE_MS` and `SEED_SAMPLE` from the environment.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading dashboard configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            search_debounce_ms,
            seed_sample,
        } = raw;

        let search_debounce_ms = match search_debounce_ms {
            Some(0) => anyhow::bail!("SEARCH_DEBOUNCE_MS must be greater than 0"),
            Some(ms) => {
                info!("Using provided SEARCH_DEBOUNCE_MS: {ms}");
                ms
            }
            None => {
                info!("SEARCH_DEBOUNCE_MS not set, defaulting to {DEFAULT_SEARCH_DEBOUNCE_MS}");
                DEFAULT_SEARCH_DEBOUNCE_MS
            }
        };

        let seed_sample = seed_sample.unwrap_or_else(|| {
            info!("SEED_SAMPLE not set, seeding the sample user");
            true
        });

        Ok(Self {
            search_debounce: Duration::from_millis(search_debounce_ms),
            seed_sample,
        })
    }

    pub fn search_debounce(&self) -> Duration {
        self.search_debounce
    }

    pub fn seed_sample(&self) -> bool {
        self.seed_sample
    }

    #[must_use]
    pub fn with_search_debounce(mut self, quiet: Duration) -> Self {
        self.search_debounce = quiet;
        self
    }

    #[must_use]
    pub fn with_seed_sample(mut self, seed: bool) -> Self {
        self.seed_sample = seed;
        self
    }
}
