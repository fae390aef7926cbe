//! Portfolio snippet data model.
//!
//! These types are built fresh by every parse call and are never persisted;
//! they derive serde so the CLI can print them as JSON and read them back.

use serde::{Deserialize, Serialize};

use crate::amount::{format_compact, parse_amount};

/// One of the three recognized financial fields of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    /// Amount invested in the project.
    Invested,
    /// Amount earned from the project so far.
    Earned,
    /// Amount the owner expects to earn.
    Expected,
}

impl CanonicalField {
    /// All canonical fields in snippet order.
    pub const ALL: [Self; 3] = [Self::Invested, Self::Earned, Self::Expected];

    /// Map a detail label to a canonical field.
    ///
    /// Matching is exact and case-sensitive: `Inv`/`Investment`,
    /// `Earn`/`Earned` and `Exp`/`Expected`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Inv" | "Investment" => Some(Self::Invested),
            "Earn" | "Earned" => Some(Self::Earned),
            "Exp" | "Expected" => Some(Self::Expected),
            _ => None,
        }
    }

    /// The abbreviated label (`Inv`, `Earn`, `Exp`).
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Invested => "Inv",
            Self::Earned => "Earn",
            Self::Expected => "Exp",
        }
    }

    /// The spelled-out label (`Investment`, `Earned`, `Expected`).
    #[must_use]
    pub fn long_label(self) -> &'static str {
        match self {
            Self::Invested => "Investment",
            Self::Earned => "Earned",
            Self::Expected => "Expected",
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invested => write!(f, "invested"),
            Self::Earned => write!(f, "earned"),
            Self::Expected => write!(f, "expected"),
        }
    }
}

/// Value of a custom stat.
///
/// Numeric when the text decodes as an amount, otherwise the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    /// A decoded amount.
    Amount(f64),
    /// Text that did not decode as an amount.
    Raw(String),
}

impl StatValue {
    /// Decode a stat value, tolerating a leading `$`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let digits = text.strip_prefix('$').unwrap_or(text);
        parse_amount(digits).map_or_else(|| Self::Raw(text.to_string()), Self::Amount)
    }

    /// Get the numeric value, if any.
    #[must_use]
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            Self::Amount(amount) => Some(*amount),
            Self::Raw(_) => None,
        }
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount(amount) => f.write_str(&format_compact(*amount)),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

/// A named fact attached to a project beyond the canonical fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    /// Label as written in the snippet.
    pub label: String,
    /// Decoded value.
    pub value: StatValue,
}

impl Stat {
    /// Create a new stat.
    #[must_use]
    pub fn new(label: impl Into<String>, value: StatValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A single project in a snippet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Project name from the project header line.
    pub name: String,

    /// Amount invested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invested_amount: Option<f64>,

    /// Amount earned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_amount: Option<f64>,

    /// Amount expected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<f64>,

    /// Custom stats in order of appearance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<Stat>,
}

impl ProjectRecord {
    /// Create an empty record with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get the value of a canonical field.
    #[must_use]
    pub fn canonical(&self, field: CanonicalField) -> Option<f64> {
        match field {
            CanonicalField::Invested => self.invested_amount,
            CanonicalField::Earned => self.earned_amount,
            CanonicalField::Expected => self.expected_amount,
        }
    }

    /// Set a canonical field, replacing any previous value.
    pub fn set_canonical(&mut self, field: CanonicalField, amount: f64) {
        let slot = match field {
            CanonicalField::Invested => &mut self.invested_amount,
            CanonicalField::Earned => &mut self.earned_amount,
            CanonicalField::Expected => &mut self.expected_amount,
        };
        *slot = Some(amount);
    }

    /// Builder form of [`set_canonical`](Self::set_canonical).
    #[must_use]
    pub fn with_canonical(mut self, field: CanonicalField, amount: f64) -> Self {
        self.set_canonical(field, amount);
        self
    }

    /// Append a stat.
    #[must_use]
    pub fn with_stat(mut self, label: impl Into<String>, value: StatValue) -> Self {
        self.stats.push(Stat::new(label, value));
        self
    }

    /// Find the first stat with the given label.
    #[must_use]
    pub fn stat(&self, label: &str) -> Option<&StatValue> {
        self.stats
            .iter()
            .find(|stat| stat.label == label)
            .map(|stat| &stat.value)
    }
}

/// Sums of the canonical fields across a snippet.
///
/// A total is `None` when no project carries that field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Total invested.
    pub invested: Option<f64>,
    /// Total earned.
    pub earned: Option<f64>,
    /// Total expected.
    pub expected: Option<f64>,
}

impl Totals {
    /// Get the total for a canonical field.
    #[must_use]
    pub fn get(&self, field: CanonicalField) -> Option<f64> {
        match field {
            CanonicalField::Invested => self.invested,
            CanonicalField::Earned => self.earned,
            CanonicalField::Expected => self.expected,
        }
    }
}

/// A parsed portfolio snippet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSnippet {
    /// Display name of the portfolio owner.
    pub owner_name: String,

    /// Projects in order of appearance.
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

impl PortfolioSnippet {
    /// Create an empty snippet for the given owner.
    #[must_use]
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            projects: Vec::new(),
        }
    }

    /// Check if the snippet has no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Find the first project with the given name.
    #[must_use]
    pub fn project(&self, name: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.name == name)
    }

    /// Sum every canonical field over the projects that carry it.
    #[must_use]
    pub fn totals(&self) -> Totals {
        let sum = |field: CanonicalField| {
            self.projects
                .iter()
                .filter_map(|project| project.canonical(field))
                .fold(None, |acc: Option<f64>, amount| {
                    Some(acc.unwrap_or(0.0) + amount)
                })
        };

        Totals {
            invested: sum(CanonicalField::Invested),
            earned: sum(CanonicalField::Earned),
            expected: sum(CanonicalField::Expected),
        }
    }
}
