use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;
use crate::model::Plan;

/// Account health tag, probabilistically assigned at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Health {
    Excellent,
    Good,
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl Health {
    pub fn as_str(self) -> &'static str {
        match self {
            Health::Excellent => "Excellent",
            Health::Good => "Good",
            Health::AtRisk => "At Risk",
        }
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Health {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(Health::Excellent),
            "good" => Ok(Health::Good),
            "at risk" | "at-risk" => Ok(Health::AtRisk),
            _ => Err(DashboardError::UnknownHealth(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub seats: u32,
    pub plan: Plan,
    pub health: Health,
}
