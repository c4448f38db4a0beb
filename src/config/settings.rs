use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_INVOICE_COUNT, DEFAULT_REVENUE_DAYS, DEFAULT_SEED};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub data: DataSettings,
    pub fetch: FetchSettings,
    pub table: TableSettings,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DataSettings {
    pub seed: i64,
    pub invoice_count: usize,
    pub revenue_days: usize,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            invoice_count: DEFAULT_INVOICE_COUNT,
            revenue_days: DEFAULT_REVENUE_DAYS,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchSettings {
    pub simulate_delay: bool,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            simulate_delay: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct TableSettings {
    pub page_size: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}
