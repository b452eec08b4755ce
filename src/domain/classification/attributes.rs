//! The three categorical decision attributes and their severities.
//!
//! Each attribute has exactly three levels. The severity table is fixed:
//! the first level weighs 1, the middle level 2 and the top level 3.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ClassificationError;

/// Lowest severity any attribute level can carry.
pub const MIN_SEVERITY: u8 = 1;

/// Highest severity any attribute level can carry.
pub const MAX_SEVERITY: u8 = 3;

/// Shared behaviour of the three classification attributes.
///
/// The form layer only ever offers [`DecisionAttribute::all`], but
/// [`DecisionAttribute::parse_level`] and [`DecisionAttribute::from_severity`]
/// let callers feed raw values and get `InvalidInput` back when they fall
/// outside the domain.
pub trait DecisionAttribute: Sized + Copy + PartialEq + fmt::Debug + 'static {
    /// Name of the attribute as shown on the form.
    const NAME: &'static str;

    /// All levels, ordered from least to most severe.
    fn all() -> &'static [Self];

    /// Ordinal severity of this level (1..=3).
    fn severity(&self) -> u8;

    /// Label shown in the form selector.
    fn label(&self) -> &'static str;

    /// Short machine-friendly key, e.g. `short`.
    fn key(&self) -> &'static str;

    /// Returns true if this level carries the maximum severity.
    fn is_severe(&self) -> bool {
        self.severity() == MAX_SEVERITY
    }

    /// Looks up a level by its severity.
    fn from_severity(severity: u8) -> Result<Self, ClassificationError> {
        Self::all()
            .iter()
            .copied()
            .find(|level| level.severity() == severity)
            .ok_or_else(|| ClassificationError::invalid_input(Self::NAME, severity.to_string()))
    }

    /// Parses a level from its key, variant name or form label
    /// (case-insensitive, surrounding whitespace ignored).
    fn parse_level(raw: &str) -> Result<Self, ClassificationError> {
        let needle = raw.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|level| {
                needle == level.key()
                    || needle == format!("{:?}", level).to_lowercase()
                    || needle == level.label().to_lowercase()
            })
            .ok_or_else(|| ClassificationError::invalid_input(Self::NAME, raw))
    }
}

/// How long the consequences of the decision last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactDuration {
    Short,
    Medium,
    Long,
}

impl DecisionAttribute for ImpactDuration {
    const NAME: &'static str = "Impact Duration";

    fn all() -> &'static [Self] {
        &[ImpactDuration::Short, ImpactDuration::Medium, ImpactDuration::Long]
    }

    fn severity(&self) -> u8 {
        match self {
            ImpactDuration::Short => 1,
            ImpactDuration::Medium => 2,
            ImpactDuration::Long => 3,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ImpactDuration::Short => "Short-term (days or weeks)",
            ImpactDuration::Medium => "Medium-term (weeks or months)",
            ImpactDuration::Long => "Long-term (months or years)",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            ImpactDuration::Short => "short",
            ImpactDuration::Medium => "medium",
            ImpactDuration::Long => "long",
        }
    }
}

/// Effort or cost needed to undo the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostOfReversal {
    Minimal,
    Moderate,
    Significant,
}

impl DecisionAttribute for CostOfReversal {
    const NAME: &'static str = "Cost of Reversal";

    fn all() -> &'static [Self] {
        &[
            CostOfReversal::Minimal,
            CostOfReversal::Moderate,
            CostOfReversal::Significant,
        ]
    }

    fn severity(&self) -> u8 {
        match self {
            CostOfReversal::Minimal => 1,
            CostOfReversal::Moderate => 2,
            CostOfReversal::Significant => 3,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CostOfReversal::Minimal => "Minimal effort or cost",
            CostOfReversal::Moderate => "Moderate effort or cost",
            CostOfReversal::Significant => "Significant effort or cost",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            CostOfReversal::Minimal => "minimal",
            CostOfReversal::Moderate => "moderate",
            CostOfReversal::Significant => "significant",
        }
    }
}

/// Who is affected by the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderInvolvement {
    InternalOnly,
    Mixed,
    BroadExternal,
}

impl DecisionAttribute for StakeholderInvolvement {
    const NAME: &'static str = "Stakeholder Involvement";

    fn all() -> &'static [Self] {
        &[
            StakeholderInvolvement::InternalOnly,
            StakeholderInvolvement::Mixed,
            StakeholderInvolvement::BroadExternal,
        ]
    }

    fn severity(&self) -> u8 {
        match self {
            StakeholderInvolvement::InternalOnly => 1,
            StakeholderInvolvement::Mixed => 2,
            StakeholderInvolvement::BroadExternal => 3,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StakeholderInvolvement::InternalOnly => "Internal team only",
            StakeholderInvolvement::Mixed => "Mixed internal and external",
            StakeholderInvolvement::BroadExternal => "Broad external stakeholders",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            StakeholderInvolvement::InternalOnly => "internal_only",
            StakeholderInvolvement::Mixed => "mixed",
            StakeholderInvolvement::BroadExternal => "broad_external",
        }
    }
}

macro_rules! impl_attribute_traits {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.label())
                }
            }

            impl FromStr for $ty {
                type Err = ClassificationError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as DecisionAttribute>::parse_level(s)
                }
            }

            impl TryFrom<u8> for $ty {
                type Error = ClassificationError;

                fn try_from(severity: u8) -> Result<Self, Self::Error> {
                    <$ty as DecisionAttribute>::from_severity(severity)
                }
            }
        )+
    };
}

impl_attribute_traits!(ImpactDuration, CostOfReversal, StakeholderInvolvement);
