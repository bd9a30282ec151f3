use std::path::PathBuf;

use crate::types::Monetary;

pub const DEFAULT_CLIENT_COUNT: usize = 50;
pub const DEFAULT_THRESHOLD_LEI: i64 = 10_000;
pub const DEFAULT_MAX_TO_DISPLAY: usize = 50;
pub const DEFAULT_DATA_PATH: &str = "clients_data.json";
pub const DEFAULT_REPORT_PATH: &str = "report_low_balance.txt";

/// Settings for a single run of the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// How many synthetic clients to generate.
    pub client_count: usize,
    /// Clients strictly below this balance end up in the report.
    pub threshold: Monetary,
    /// Upper bound on clients printed to the console listing.
    pub max_to_display: usize,
    pub data_path: PathBuf,
    pub report_path: PathBuf
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_count: DEFAULT_CLIENT_COUNT,
            threshold: Monetary::from_units(DEFAULT_THRESHOLD_LEI),
            max_to_display: DEFAULT_MAX_TO_DISPLAY,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH)
        }
    }
}

impl AppConfig {
    pub fn with_client_count(mut self, client_count: usize) -> Self {
        self.client_count = client_count;
        self
    }

    pub fn with_threshold(mut self, threshold: Monetary) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_to_display(mut self, max_to_display: usize) -> Self {
        self.max_to_display = max_to_display;
        self
    }

    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    pub fn with_report_path(mut self, report_path: impl Into<PathBuf>) -> Self {
        self.report_path = report_path.into();
        self
    }
}
