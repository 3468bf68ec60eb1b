use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ticket: TicketLabels,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Fixed text printed on the ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketLabels {
    /// Header title (e.g., "Ticket info").
    pub title: String,
    /// Transit operator shown in the header and on the splash screen.
    pub operator: String,
    /// Institution printed under the passenger name.
    pub institution: String,
    /// Concession badge text (e.g., "STUDENT").
    pub concession: String,
    /// Transport mode row (e.g., "Bus").
    pub mode: String,
    /// Product line at the bottom of the ticket.
    pub product: String,
}

/// Screen timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clock refresh interval in milliseconds (default: 1000).
    pub tick_interval_ms: u64,
    /// Splash screen duration in milliseconds, 0 disables it (default: 1000).
    pub splash_ms: u64,
}

/// Where persisted fields live.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store file. Defaults to `<data dir>/transit-pass/store.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl DisplayConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }
}

impl StoreConfig {
    /// Configured path, or the platform data directory default.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_store_path)
    }
}

fn default_store_path() -> PathBuf {
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("transit-pass").join("store.json")
}

impl Default for TicketLabels {
    fn default() -> Self {
        Self {
            title: "Ticket info".to_string(),
            operator: "Translink".to_string(),
            institution: "The University of Queensland".to_string(),
            concession: "STUDENT".to_string(),
            mode: "Bus".to_string(),
            product: "Single-use one-way ticket".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            splash_ms: 1000,
        }
    }
}
