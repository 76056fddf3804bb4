//! Filter predicates evaluated against a single record

use crate::core::record::Filterable;
use serde::{Deserialize, Serialize};

/// One end of a numeric interval
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RangeBound {
    pub value: f64,
    #[serde(default = "default_inclusive")]
    pub inclusive: bool,
}

fn default_inclusive() -> bool {
    true
}

impl RangeBound {
    pub fn inclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    pub fn exclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// Numeric interval with optional, independently open or closed ends
///
/// A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct NumericRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<RangeBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<RangeBound>,
}

impl NumericRange {
    /// `(-inf, value)`
    pub fn below(value: f64) -> Self {
        Self {
            min: None,
            max: Some(RangeBound::exclusive(value)),
        }
    }

    /// `(value, +inf)`
    pub fn above(value: f64) -> Self {
        Self {
            min: Some(RangeBound::exclusive(value)),
            max: None,
        }
    }

    /// `[min, max]`
    pub fn closed(min: f64, max: f64) -> Self {
        Self {
            min: Some(RangeBound::inclusive(min)),
            max: Some(RangeBound::inclusive(max)),
        }
    }

    /// `[min, max)`
    pub fn half_open(min: f64, max: f64) -> Self {
        Self {
            min: Some(RangeBound::inclusive(min)),
            max: Some(RangeBound::exclusive(max)),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = self.min.is_none_or(|b| {
            if b.inclusive {
                value >= b.value
            } else {
                value > b.value
            }
        });
        let below_max = self.max.is_none_or(|b| {
            if b.inclusive {
                value <= b.value
            } else {
                value < b.value
            }
        });
        above_min && below_max
    }

    /// True when the lower bound lies above the upper bound
    pub fn is_inverted(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min.value > max.value,
            _ => false,
        }
    }

    /// The first bound that is NaN or infinite, if any
    pub fn non_finite_bound(&self) -> Option<f64> {
        [self.min, self.max]
            .into_iter()
            .flatten()
            .map(|bound| bound.value)
            .find(|value| !value.is_finite())
    }

    /// Check whether this range is a sub-interval of `other`
    pub fn is_within(&self, other: &NumericRange) -> bool {
        let min_ok = match (other.min, self.min) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(o), Some(s)) => {
                s.value > o.value || (s.value == o.value && (o.inclusive || !s.inclusive))
            }
        };
        let max_ok = match (other.max, self.max) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(o), Some(s)) => {
                s.value < o.value || (s.value == o.value && (o.inclusive || !s.inclusive))
            }
        };
        min_ok && max_ok
    }
}

/// A named range offered as a single filter choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBucket {
    /// Key used in query inputs (e.g., "0-50000")
    pub key: String,

    /// Human-readable label
    #[serde(default)]
    pub label: String,

    pub range: NumericRange,
}

impl PriceBucket {
    pub fn new(key: impl Into<String>, label: impl Into<String>, range: NumericRange) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            range,
        }
    }

    /// Storefront price buckets in RWF
    pub fn storefront_defaults() -> Vec<PriceBucket> {
        vec![
            PriceBucket::new("0-50000", "Below 50,000 RWF", NumericRange::below(50_000.0)),
            PriceBucket::new(
                "50000-150000",
                "50,000 - 150,000 RWF",
                NumericRange::closed(50_000.0, 150_000.0),
            ),
            PriceBucket::new("150000+", "Above 150,000 RWF", NumericRange::above(150_000.0)),
        ]
    }
}

/// Which categorical field a predicate targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Category,
    Status,
}

/// A single active filter condition
///
/// Inactive conditions are never built, so every predicate here constrains.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring in any text field; term is lower-cased
    Text(String),
    /// Exact equality on a categorical field
    Equals {
        dimension: Dimension,
        value: String,
    },
    /// Range membership of the numeric field
    Range(NumericRange),
    /// Case-insensitive substring in the location field; term is lower-cased
    Location(String),
}

impl Predicate {
    pub fn text(term: &str) -> Self {
        Predicate::Text(term.to_lowercase())
    }

    pub fn location(term: &str) -> Self {
        Predicate::Location(term.to_lowercase())
    }

    pub fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        match self {
            Predicate::Text(term) => record
                .text_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(term.as_str())),
            Predicate::Equals { dimension, value } => {
                let actual = match dimension {
                    Dimension::Category => record.category(),
                    Dimension::Status => record.status(),
                };
                actual == Some(value.as_str())
            }
            Predicate::Range(range) => record.range_value().is_some_and(|v| range.contains(v)),
            Predicate::Location(term) => record
                .location()
                .is_some_and(|loc| loc.to_lowercase().contains(term.as_str())),
        }
    }
}
