//! Type-safe enumerations for QTc inputs and outputs.
//!
//! Clinical forms and command lines hand these concepts over as strings;
//! the enums give them a closed set of values with case-insensitive parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// QRS complex width, which selects the formula set.
///
/// A QRS of 120 ms or more is conventionally "wide". The caller picks the
/// mode; it is never inferred from the duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrsType {
    /// Normal ventricular depolarization; the five classic corrections apply.
    #[default]
    Narrow,
    /// Bundle branch block, paced rhythm and similar; QRS-adjusted corrections apply.
    Wide,
}

impl QrsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrsType::Narrow => "narrow",
            QrsType::Wide => "wide",
        }
    }

    /// Returns true when QRS duration and sex are required inputs.
    pub fn is_wide(&self) -> bool {
        matches!(self, QrsType::Wide)
    }
}

impl fmt::Display for QrsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QrsType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "narrow" => Ok(QrsType::Narrow),
            "wide" => Ok(QrsType::Wide),
            _ => Err(ModelError::UnknownValue {
                kind: "QRS type",
                value: s.to_string(),
            }),
        }
    }
}

/// Patient sex as used by the Rautaharju wide-QRS constant.
///
/// Kept binary on purpose: the formula has exactly two constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Map free text to a sex the way an intake form does.
    ///
    /// Blank text is missing. Only "male" (any case) is [`Sex::Male`];
    /// every other populated value, abbreviations included, selects
    /// [`Sex::Female`].
    pub fn from_form_value(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "" => None,
            "male" => Some(Sex::Male),
            _ => Some(Sex::Female),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ModelError;

    /// Strict parse: only the two canonical spellings and their initials.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(ModelError::UnknownValue {
                kind: "sex",
                value: s.to_string(),
            }),
        }
    }
}

/// Advisory flag severity, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagSeverity {
    Info,
    Warning,
    Danger,
}

impl FlagSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagSeverity::Info => "info",
            FlagSeverity::Warning => "warning",
            FlagSeverity::Danger => "danger",
        }
    }
}

impl fmt::Display for FlagSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FlagSeverity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(FlagSeverity::Info),
            "warning" | "warn" => Ok(FlagSeverity::Warning),
            "danger" => Ok(FlagSeverity::Danger),
            _ => Err(ModelError::UnknownValue {
                kind: "flag severity",
                value: s.to_string(),
            }),
        }
    }
}

/// Heart-rate corrections for narrow-QRS rhythms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrowFormula {
    Bazett,
    Fridericia,
    Framingham,
    Hodges,
    RautaharjuHr,
}

impl NarrowFormula {
    /// Catalogue order, which is also the display order of results.
    pub const ALL: [NarrowFormula; 5] = [
        NarrowFormula::Bazett,
        NarrowFormula::Fridericia,
        NarrowFormula::Framingham,
        NarrowFormula::Hodges,
        NarrowFormula::RautaharjuHr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NarrowFormula::Bazett => "bazett",
            NarrowFormula::Fridericia => "fridericia",
            NarrowFormula::Framingham => "framingham",
            NarrowFormula::Hodges => "hodges",
            NarrowFormula::RautaharjuHr => "rautaharju_hr",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NarrowFormula::Bazett => "Bazett",
            NarrowFormula::Fridericia => "Fridericia",
            NarrowFormula::Framingham => "Framingham",
            NarrowFormula::Hodges => "Hodges",
            NarrowFormula::RautaharjuHr => "Rautaharju (HR)",
        }
    }

    /// Expression in QT (ms), RR (s) and HR (bpm).
    pub fn expression(&self) -> &'static str {
        match self {
            NarrowFormula::Bazett => "QT / sqrt(RR)",
            NarrowFormula::Fridericia => "QT / RR^(1/3)",
            NarrowFormula::Framingham => "QT + 154 x (1 - RR)",
            NarrowFormula::Hodges => "QT + 1.75 x (60/RR - 60)",
            NarrowFormula::RautaharjuHr => "QT x (120 + HR) / 180",
        }
    }

    pub fn reference(&self) -> &'static str {
        match self {
            NarrowFormula::Bazett => "Bazett HC. Heart 1920;7:353-370",
            NarrowFormula::Fridericia => "Fridericia LS. Acta Med Scand 1920;53:469-486",
            NarrowFormula::Framingham => "Sagie A et al. Am J Cardiol 1992;70:797-801",
            NarrowFormula::Hodges => "Hodges M et al. J Am Coll Cardiol 1983;1:694",
            NarrowFormula::RautaharjuHr => "Rautaharju PM et al. Int J Cardiol 2014;174:535-540",
        }
    }
}

impl fmt::Display for NarrowFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// QRS-adjusted values for wide-QRS rhythms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WideFormula {
    BogossianModifiedQt,
    BogossianFridericia,
    RautaharjuWide,
}

impl WideFormula {
    pub const ALL: [WideFormula; 3] = [
        WideFormula::BogossianModifiedQt,
        WideFormula::BogossianFridericia,
        WideFormula::RautaharjuWide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WideFormula::BogossianModifiedQt => "bogossian_modified_qt",
            WideFormula::BogossianFridericia => "bogossian_fridericia",
            WideFormula::RautaharjuWide => "rautaharju_wide",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WideFormula::BogossianModifiedQt => "Bogossian modified QT",
            WideFormula::BogossianFridericia => "Bogossian + Fridericia",
            WideFormula::RautaharjuWide => "Rautaharju (wide QRS)",
        }
    }

    pub fn expression(&self) -> &'static str {
        match self {
            WideFormula::BogossianModifiedQt => "QT - 0.5 x QRS",
            WideFormula::BogossianFridericia => "QTmod / RR^(1/3)",
            WideFormula::RautaharjuWide => {
                "QT - 155 x (60/HR - 1) - 0.93 x (QRS - 139) + k (k = -22 male, -34 female)"
            }
        }
    }

    pub fn reference(&self) -> &'static str {
        match self {
            WideFormula::BogossianModifiedQt | WideFormula::BogossianFridericia => {
                "Bogossian H et al. Heart Rhythm 2014;11:2273-2277"
            }
            WideFormula::RautaharjuWide => "Rautaharju PM et al. Am J Cardiol 2004;93:1017-1021",
        }
    }

    /// False for the modified QT, which is an uncorrected intermediate.
    pub fn is_corrected(&self) -> bool {
        !matches!(self, WideFormula::BogossianModifiedQt)
    }
}

impl fmt::Display for WideFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
