use crate::{
    catalog::Catalog,
    domain::{seed, Board, BoardLayout},
    error::{DispatchError, Result},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path, time::Duration};
use tokio::fs;

/// Simulated round-trip latency of the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub list_latency_ms: u64,
    pub mutation_latency_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            list_latency_ms: 500,
            mutation_latency_ms: 300,
        }
    }
}

impl StoreConfig {
    /// No simulated latency
    pub fn instant() -> Self {
        Self {
            list_latency_ms: 0,
            mutation_latency_ms: 0,
        }
    }

    pub fn list_latency(&self) -> Duration {
        Duration::from_millis(self.list_latency_ms)
    }

    pub fn mutation_latency(&self) -> Duration {
        Duration::from_millis(self.mutation_latency_ms)
    }
}

/// Top-level dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub store: StoreConfig,
    pub catalog: Catalog,
    pub layout: BoardLayout,
    pub seed_demo_data: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            catalog: Catalog::default(),
            layout: BoardLayout::default(),
            seed_demo_data: true,
        }
    }
}

impl DashboardConfig {
    /// Zero latency and empty boards
    pub fn for_tests() -> Self {
        Self {
            store: StoreConfig::instant(),
            seed_demo_data: false,
            ..Self::default()
        }
    }

    /// Loads configuration from a JSON file; missing keys take their defaults
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).await?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.columns.is_empty() {
            return Err(DispatchError::ConfigError(
                "board layout has no columns".to_string(),
            ));
        }

        let mut ids = HashSet::new();
        let mut titles = HashSet::new();
        for column in &self.layout.columns {
            if !ids.insert(column.id) {
                return Err(DispatchError::ConfigError(format!(
                    "duplicate board id {}",
                    column.id
                )));
            }
            if column.title.trim().is_empty() || !titles.insert(column.title.as_str()) {
                return Err(DispatchError::ConfigError(format!(
                    "board {} needs a unique, non-empty title",
                    column.id
                )));
            }
        }

        Ok(())
    }

    /// Builds the initial boards, with the demo jobs if enabled
    pub fn build_boards(&self) -> Vec<Board> {
        let mut boards = self.layout.build();
        if self.seed_demo_data {
            seed::populate(&mut boards);
        }
        boards
    }
}
