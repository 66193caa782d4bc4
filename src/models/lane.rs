use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Work channel a report activity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    A,
    B,
    Trucking,
}

impl Lane {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::A => "A",
            Lane::B => "B",
            Lane::Trucking => "Trucking",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Lane::A),
            "B" => Some(Lane::B),
            "Trucking" => Some(Lane::Trucking),
            _ => None,
        }
    }

    /// Helper: convert a label typed on the command line (any case,
    /// optional "jalur " prefix).
    pub fn from_label(label: &str) -> AppResult<Self> {
        let l = label.trim().to_lowercase();
        let l = l.strip_prefix("jalur").map(str::trim).unwrap_or(l.as_str());

        match l {
            "a" => Ok(Lane::A),
            "b" => Ok(Lane::B),
            "trucking" | "t" => Ok(Lane::Trucking),
            _ => Err(AppError::InvalidLane(label.to_string())),
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
