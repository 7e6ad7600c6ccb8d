use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Runtime mode of the server.
///
/// Production hides unpublished posts; development additionally enables
/// live reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[default]
    Production,
    Development,
    Test,
}

impl RuntimeMode {
    pub fn is_production(self) -> bool {
        matches!(self, RuntimeMode::Production)
    }

    pub fn is_development(self) -> bool {
        matches!(self, RuntimeMode::Development)
    }
}

impl FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(RuntimeMode::Production),
            "development" | "dev" => Ok(RuntimeMode::Development),
            "test" => Ok(RuntimeMode::Test),
            other => Err(format!("unknown runtime mode: {other}")),
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuntimeMode::Production => "production",
            RuntimeMode::Development => "development",
            RuntimeMode::Test => "test",
        })
    }
}
