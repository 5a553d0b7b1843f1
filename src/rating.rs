//! WCAG 2.1 compliance tiers for a contrast ratio.

use std::fmt;

use serde::{Serialize, Serializer};

/// Compliance tier, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// At least 7:1
    Enhanced,
    /// At least 4.5:1
    Good,
    /// At least 3:1, large text only
    Limited,
    Fails,
}

impl Tier {
    /// Tiers with their minimum ratio, checked in order.
    const THRESHOLDS: [(f64, Tier); 3] = [
        (7.0, Tier::Enhanced),
        (4.5, Tier::Good),
        (3.0, Tier::Limited),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Enhanced => "AAA (Enhanced)",
            Tier::Good => "AA (Good)",
            Tier::Limited => "AA Large (Limited)",
            Tier::Fails => "Fails",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tier::Enhanced => "WCAG 2.1 Level AAA",
            Tier::Good => "WCAG 2.1 Level AA",
            Tier::Limited => "WCAG 2.1 Level AA, large text only",
            Tier::Fails => "Does not meet WCAG 2.1",
        }
    }

    /// Whether the tier meets any WCAG level at all.
    pub fn passes(self) -> bool {
        self != Tier::Fails
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A tier together with its human-readable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub tier: Tier,
    pub description: &'static str,
}

impl From<Tier> for Rating {
    fn from(tier: Tier) -> Self {
        Self {
            tier,
            description: tier.description(),
        }
    }
}

/// Classify a numeric contrast ratio. The first threshold met wins.
pub fn classify_ratio(ratio: f64) -> Rating {
    Tier::THRESHOLDS
        .into_iter()
        .find(|(min, _)| ratio >= *min)
        .map_or(Tier::Fails, |(_, tier)| tier)
        .into()
}

/// Classify a ratio string such as `"4.50:1"`.
///
/// Only the part before the first `:` is read; anything unparsable fails.
pub fn classify(ratio: &str) -> Rating {
    let value = ratio.split(':').next().unwrap_or_default().trim();
    match value.parse::<f64>() {
        Ok(v) => classify_ratio(v),
        Err(_) => Tier::Fails.into(),
    }
}
