use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("Unknown invoice status '{0}'. Expected one of: paid, pending, overdue")]
    UnknownStatus(String),

    #[error("Unknown plan '{0}'. Expected one of: starter, pro, enterprise")]
    UnknownPlan(String),

    #[error("Unknown health '{0}'. Expected one of: excellent, good, at-risk")]
    UnknownHealth(String),

    #[error("Unknown sort key '{0}'. Expected one of: issued, customer, amount, status")]
    UnknownSortKey(String),

    #[error("Unknown sort direction '{0}'. Expected 'asc' or 'desc'")]
    UnknownSortDir(String),

    #[error("Customer roster is empty; nothing to generate")]
    RosterExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
