use crate::utils::error::{Result, SelectError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed continuous interval a selector works over. Established once at
/// construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min_bound: f64,
    pub max_bound: f64,
}

impl ValueDomain {
    pub fn new(min_bound: f64, max_bound: f64) -> Result<Self> {
        if !min_bound.is_finite() || !max_bound.is_finite() || min_bound >= max_bound {
            return Err(SelectError::InvalidDomain {
                min_bound,
                max_bound,
            });
        }
        Ok(Self {
            min_bound,
            max_bound,
        })
    }

    /// Derive the domain from the data set being visualized. A data set whose
    /// values are all identical cannot form a scale and is rejected.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(SelectError::EmptyDataset);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        Self::new(min, max)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min_bound).min(self.max_bound)
    }

    pub fn span(&self) -> f64 {
        self.max_bound - self.min_bound
    }
}

/// The committed outcome of a selector session. A disabled bound is reported
/// as the corresponding unbounded sentinel, i.e. no filtering on that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelection {
    pub min: f64,
    pub max: f64,
}

impl RangeSelection {
    /// Lowest value possible; stands in for "no lower bound".
    pub const UNBOUNDED_MIN: f64 = f64::MIN;
    /// Highest value possible; stands in for "no upper bound".
    pub const UNBOUNDED_MAX: f64 = f64::MAX;

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn has_lower_bound(&self) -> bool {
        self.min != Self::UNBOUNDED_MIN
    }

    pub fn has_upper_bound(&self) -> bool {
        self.max != Self::UNBOUNDED_MAX
    }
}

/// Everything a front-end needs to redraw the selector after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorSnapshot {
    pub lower_enabled: bool,
    pub upper_enabled: bool,
    pub lower_position: u32,
    pub upper_position: u32,
    pub lower_value: f64,
    pub upper_value: f64,
}

/// One user interaction, already stripped of any widget-toolkit detail.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    SetLowerEnabled(bool),
    SetUpperEnabled(bool),
    /// Raw text committed in the lower-bound field.
    LowerText(String),
    /// Raw text committed in the upper-bound field.
    UpperText(String),
    /// Lower slider moved to a discrete position.
    LowerScale(u32),
    /// Upper slider moved to a discrete position.
    UpperScale(u32),
    Confirm,
    Cancel,
}

/// One element of the data set being visualized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub value: f64,
}

impl DataPoint {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A matched element in a highlight report, carrying the styling a renderer
/// would apply to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightedNode {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub color: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightReport {
    pub session: String,
    pub created_at: DateTime<Utc>,
    pub range: RangeSelection,
    pub matched: Vec<HighlightedNode>,
    pub matched_count: usize,
    pub total: usize,
}

/// One pathway in a caller-supplied hierarchy. The JSON adapter for the
/// `PathwaySource` port; an ontology-backed source would implement the same
/// trait without this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayEntry {
    pub name: String,
    #[serde(default)]
    pub children: Vec<PathwayEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathwayModel {
    pub pathways: Vec<PathwayEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_rejects_degenerate_bounds() {
        assert!(ValueDomain::new(0.0, 100.0).is_ok());
        assert!(ValueDomain::new(5.0, 5.0).is_err());
        assert!(ValueDomain::new(10.0, 2.0).is_err());
        assert!(ValueDomain::new(f64::NAN, 2.0).is_err());
    }

    #[test]
    fn test_domain_from_values() {
        let domain = ValueDomain::from_values(&[3.0, -1.5, 7.25, 0.0]).unwrap();
        assert_eq!(domain.min_bound, -1.5);
        assert_eq!(domain.max_bound, 7.25);

        assert!(matches!(
            ValueDomain::from_values(&[]),
            Err(SelectError::EmptyDataset)
        ));
        // All-identical values cannot form a scale.
        assert!(ValueDomain::from_values(&[2.0, 2.0, 2.0]).is_err());
    }

    #[test]
    fn test_domain_clamp() {
        let domain = ValueDomain::new(0.0, 10.0).unwrap();
        assert_eq!(domain.clamp(-3.0), 0.0);
        assert_eq!(domain.clamp(15.0), 10.0);
        assert_eq!(domain.clamp(4.2), 4.2);
    }

    #[test]
    fn test_selection_sentinels() {
        let open_below = RangeSelection {
            min: RangeSelection::UNBOUNDED_MIN,
            max: 10.0,
        };
        assert!(!open_below.has_lower_bound());
        assert!(open_below.has_upper_bound());
        assert!(open_below.contains(-1.0e300));
        assert!(!open_below.contains(10.5));
    }
}
