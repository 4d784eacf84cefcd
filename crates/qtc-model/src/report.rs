use serde::{Deserialize, Serialize};

use crate::enums::FlagSeverity;
use crate::result::CalculationResult;

/// Clinical-range summary with explanatory notes, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interpretation {
    pub summary: String,
    pub notes: Vec<String>,
}

/// A discrete advisory message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub severity: FlagSeverity,
    pub message: String,
}

impl Flag {
    pub fn new(severity: FlagSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlagSeverity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlagSeverity::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(FlagSeverity::Danger, message)
    }
}

/// Combined success payload handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub result: CalculationResult,
    pub interpretation: Interpretation,
    pub flags: Vec<Flag>,
}

impl Assessment {
    pub fn count(&self, severity: FlagSeverity) -> usize {
        self.flags
            .iter()
            .filter(|flag| flag.severity == severity)
            .count()
    }

    /// Highest flag severity present.
    pub fn highest_severity(&self) -> Option<FlagSeverity> {
        self.flags.iter().map(|flag| flag.severity).max()
    }
}
