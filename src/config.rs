use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExplorerConfig {
    pub node: NodeConfig,
    pub chain: ChainConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NodeConfig {
    pub rpc_port: u16,
    pub db_path: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Fixed chain parameters used to turn slots into wall-clock time.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    pub genesis_timestamp: u64,
    pub seconds_per_slot: u64,
    pub slots_per_epoch: u64,
}

impl ChainConfig {
    /// Unix time of the start of `slot`.
    pub fn slot_to_unix(&self, slot: u64) -> u64 {
        self.genesis_timestamp
            .saturating_add(slot.saturating_mul(self.seconds_per_slot))
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            genesis_timestamp: 1_606_824_023,
            seconds_per_slot: 12,
            slots_per_epoch: 32,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FrontendConfig {
    #[serde(default = "default_site_name")]
    pub site_name: String,
}

fn default_site_name() -> String {
    "Beacon Explorer".to_string()
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            node: NodeConfig {
                rpc_port: 9000,
                db_path: "./data/slashings".to_string(),
                log_level: default_log_level(),
            },
            chain: ChainConfig::default(),
            frontend: FrontendConfig::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn load_or_default(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            match std::fs::read_to_string(path) {
                Ok(s) => match toml::from_str(&s) {
                    Ok(c) => {
                        info!("Config loaded from {}", path);
                        c
                    }
                    Err(e) => {
                        warn!("Error parsing config: {}. Using defaults.", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!("Error reading config: {}. Using defaults.", e);
                    Self::default()
                }
            }
        } else {
            info!("Config file not found at '{}'. Creating default.", path);
            let config = Self::default();
            match toml::to_string_pretty(&config) {
                Ok(s) => {
                    if let Err(e) = std::fs::write(path, s) {
                        warn!("Could not write default config to {}: {}", path, e);
                    }
                }
                Err(e) => warn!("Could not encode default config: {}", e),
            }
            config
        }
    }
}
