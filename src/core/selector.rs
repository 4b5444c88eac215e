use crate::core::scale::{self, SCALE_STEPS};
use crate::domain::model::{RangeSelection, SelectorSnapshot, ValueDomain};
use crate::utils::error::{Result, SelectError};

/// The range-selector state machine: an optional lower and upper bound over
/// a fixed domain, each independently enabled, with the ordering invariant
/// `lower_position <= upper_position` enforced by clamping whenever both
/// bounds are enabled.
#[derive(Debug, Clone)]
pub struct RangeSelector {
    domain: ValueDomain,
    lower_enabled: bool,
    upper_enabled: bool,
    lower_position: u32,
    upper_position: u32,
}

impl RangeSelector {
    pub fn new(domain: ValueDomain) -> Self {
        Self {
            domain,
            lower_enabled: true,
            upper_enabled: true,
            lower_position: 0,
            upper_position: SCALE_STEPS,
        }
    }

    pub fn domain(&self) -> &ValueDomain {
        &self.domain
    }

    pub fn snapshot(&self) -> SelectorSnapshot {
        SelectorSnapshot {
            lower_enabled: self.lower_enabled,
            upper_enabled: self.upper_enabled,
            lower_position: self.lower_position,
            upper_position: self.upper_position,
            lower_value: scale::to_value(&self.domain, self.lower_position),
            upper_value: scale::to_value(&self.domain, self.upper_position),
        }
    }

    pub fn set_lower_enabled(&mut self, enabled: bool) {
        self.lower_enabled = enabled;

        // Re-enabling must not resurrect a lower bound above the upper one.
        if enabled && self.upper_enabled && self.lower_position > self.upper_position {
            self.lower_position = self.upper_position;
        }
    }

    pub fn set_upper_enabled(&mut self, enabled: bool) {
        self.upper_enabled = enabled;

        if enabled && self.lower_enabled && self.upper_position < self.lower_position {
            self.upper_position = self.lower_position;
        }
    }

    /// Commit raw text into the lower bound. Out-of-domain values clamp to
    /// the domain ends; a value that would cross the enabled upper bound is
    /// tied to it instead.
    pub fn set_lower_value(&mut self, text: &str) -> Result<()> {
        let value = parse_numeric(text)?;
        let position = scale::to_position(&self.domain, self.domain.clamp(value));

        if self.upper_enabled && position > self.upper_position {
            self.lower_position = self.upper_position;
        } else {
            self.lower_position = position;
        }
        Ok(())
    }

    /// Commit raw text into the upper bound; symmetric to `set_lower_value`.
    pub fn set_upper_value(&mut self, text: &str) -> Result<()> {
        let value = parse_numeric(text)?;
        let position = scale::to_position(&self.domain, self.domain.clamp(value));

        if self.lower_enabled && position < self.lower_position {
            self.upper_position = self.lower_position;
        } else {
            self.upper_position = position;
        }
        Ok(())
    }

    /// Move the lower slider. Pushes the enabled upper bound up with it when
    /// the move would otherwise cross it.
    pub fn set_lower_position(&mut self, position: u32) {
        let position = position.min(SCALE_STEPS);
        self.lower_position = position;

        if self.upper_enabled && self.upper_position < position {
            self.upper_position = position;
        }
    }

    /// Move the upper slider. Pushes the enabled lower bound down with it
    /// when the move would otherwise cross it.
    pub fn set_upper_position(&mut self, position: u32) {
        let position = position.min(SCALE_STEPS);
        self.upper_position = position;

        if self.lower_enabled && position < self.lower_position {
            self.lower_position = position;
        }
    }

    /// Commit the session. A disabled bound is reported as the unbounded
    /// sentinel on its side; with both bounds disabled there is nothing to
    /// select and the session must stay open.
    pub fn confirm(&self) -> Result<RangeSelection> {
        if !self.lower_enabled && !self.upper_enabled {
            return Err(SelectError::NoBoundSelected);
        }

        let min = if self.lower_enabled {
            scale::to_value(&self.domain, self.lower_position)
        } else {
            RangeSelection::UNBOUNDED_MIN
        };
        let max = if self.upper_enabled {
            scale::to_value(&self.domain, self.upper_position)
        } else {
            RangeSelection::UNBOUNDED_MAX
        };

        Ok(RangeSelection { min, max })
    }
}

fn parse_numeric(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SelectError::ParseError {
            input: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(min: f64, max: f64) -> RangeSelector {
        RangeSelector::new(ValueDomain::new(min, max).unwrap())
    }

    #[test]
    fn test_initial_state_spans_domain() {
        let s = selector(0.0, 100.0);
        let snap = s.snapshot();
        assert!(snap.lower_enabled && snap.upper_enabled);
        assert_eq!(snap.lower_position, 0);
        assert_eq!(snap.upper_position, 1000);
        assert_eq!(snap.lower_value, 0.0);
        assert_eq!(snap.upper_value, 100.0);
    }

    #[test]
    fn test_push_down_propagation() {
        let mut s = selector(0.0, 100.0);
        s.set_lower_position(700);
        s.set_upper_position(300);

        let snap = s.snapshot();
        assert_eq!(snap.lower_position, 700);
        assert_eq!(snap.upper_position, 700);
        assert_eq!(snap.lower_value, 70.0);
        assert_eq!(snap.upper_value, 70.0);
    }

    #[test]
    fn test_push_up_propagation() {
        let mut s = selector(0.0, 100.0);
        s.set_upper_position(300);
        s.set_lower_position(800);

        let snap = s.snapshot();
        assert_eq!(snap.lower_position, 800);
        assert_eq!(snap.upper_position, 800);
    }

    #[test]
    fn test_no_push_against_disabled_bound() {
        let mut s = selector(0.0, 100.0);
        s.set_upper_enabled(false);
        s.set_lower_position(900);

        // Disabled upper bound keeps its old position; nothing to push.
        let snap = s.snapshot();
        assert_eq!(snap.lower_position, 900);
        assert_eq!(snap.upper_position, 1000);
    }

    #[test]
    fn test_text_entry_clamps_into_domain() {
        let mut s = selector(0.0, 10.0);
        s.set_lower_value("15").unwrap();
        assert_eq!(s.snapshot().lower_position, 1000);

        s.set_lower_value("-3.5").unwrap();
        assert_eq!(s.snapshot().lower_position, 0);
    }

    #[test]
    fn test_text_entry_ties_to_opposite_bound() {
        let mut s = selector(0.0, 100.0);
        s.set_upper_position(400);
        s.set_lower_value("80").unwrap();

        // 80 would land at 800, above the enabled upper bound at 400.
        assert_eq!(s.snapshot().lower_position, 400);

        let mut s = selector(0.0, 100.0);
        s.set_lower_position(600);
        s.set_upper_value("10").unwrap();
        assert_eq!(s.snapshot().upper_position, 600);
    }

    #[test]
    fn test_malformed_text_is_a_parse_error() {
        let mut s = selector(0.0, 100.0);
        assert!(matches!(
            s.set_lower_value("abc"),
            Err(SelectError::ParseError { .. })
        ));
        assert!(matches!(
            s.set_upper_value(""),
            Err(SelectError::ParseError { .. })
        ));
        assert!(matches!(
            s.set_lower_value("NaN"),
            Err(SelectError::ParseError { .. })
        ));
        // Failed parses leave the state untouched.
        assert_eq!(s.snapshot().lower_position, 0);
        assert_eq!(s.snapshot().upper_position, 1000);
    }

    #[test]
    fn test_reenabling_clamps_stale_position() {
        let mut s = selector(0.0, 100.0);
        s.set_lower_enabled(false);
        s.set_upper_position(300);
        // Lower slider kept moving while disabled, as the widget would not;
        // simulate the stale state directly through a position move.
        s.set_lower_position(500);
        s.set_upper_position(300);
        s.set_lower_enabled(true);

        let snap = s.snapshot();
        assert!(snap.lower_position <= snap.upper_position);
    }

    #[test]
    fn test_confirm_uses_sentinels_for_disabled_bounds() {
        let mut s = selector(0.0, 10.0);
        s.set_lower_enabled(false);

        let selection = s.confirm().unwrap();
        assert_eq!(selection.min, RangeSelection::UNBOUNDED_MIN);
        assert_eq!(selection.max, 10.0);
    }

    #[test]
    fn test_confirm_with_no_bounds_fails() {
        let mut s = selector(0.0, 10.0);
        s.set_lower_enabled(false);
        s.set_upper_enabled(false);
        assert!(matches!(s.confirm(), Err(SelectError::NoBoundSelected)));
    }

    #[test]
    fn test_positions_clamp_to_scale_range() {
        let mut s = selector(0.0, 100.0);
        s.set_upper_position(4242);
        assert_eq!(s.snapshot().upper_position, 1000);
    }
}
