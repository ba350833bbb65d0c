//! Per-axis auto-increment counters.

use serde::{Deserialize, Serialize};

use super::axis::AxisMap;

/// Caller-supplied, partial increment rule for one axis.
///
/// Every field is optional; missing fields fall back to
/// `{ current: 0, base: null, i: null }`, except that a rule with a base and
/// no explicit `current` starts counting from its base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncrementRule {
    /// Starting value of the running counter
    pub current: Option<f64>,
    /// Value the counter snaps back to on reset
    pub base: Option<f64>,
    /// Amount added after every slide
    #[serde(rename = "i", alias = "step")]
    pub step: Option<f64>,
}

impl IncrementRule {
    /// Create an empty rule (no auto-increment).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reset base.
    #[inline]
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = Some(base);
        self
    }

    /// Set the per-slide step.
    #[inline]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Set the starting value of the counter.
    #[inline]
    pub fn with_current(mut self, current: f64) -> Self {
        self.current = Some(current);
        self
    }
}

/// Running counter for one axis.
///
/// Auto-increment is active only when both `base` and `step` are set. A
/// counter without a base ignores resets, and a counter that is not active
/// ignores advances; neither case is an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IncrementState {
    current: f64,
    base: Option<f64>,
    #[serde(rename = "i")]
    step: Option<f64>,
}

impl IncrementState {
    /// Create a counter starting at `current`.
    pub fn new(current: f64, base: Option<f64>, step: Option<f64>) -> Self {
        Self { current, base, step }
    }

    /// The running value.
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// The reset base, if configured.
    #[inline]
    pub fn base(&self) -> Option<f64> {
        self.base
    }

    /// The per-slide step, if configured.
    #[inline]
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Whether the counter advances after every slide.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.base.is_some() && self.step.is_some()
    }

    /// Snap the counter back to its base. No-op without a base.
    pub fn reset(&mut self) {
        if let Some(base) = self.base {
            self.current = base;
        }
    }

    /// Add the step to the counter. No-op unless the counter is active.
    pub fn advance(&mut self) {
        if let (Some(_), Some(step)) = (self.base, self.step) {
            self.current += step;
        }
    }
}

impl From<IncrementRule> for IncrementState {
    fn from(rule: IncrementRule) -> Self {
        let current = rule.current.or(rule.base).unwrap_or(0.0);
        Self::new(current, rule.base, rule.step)
    }
}

/// One counter per axis, threaded through a single assembly pass.
pub type IncrementTable = AxisMap<IncrementState>;

impl IncrementTable {
    /// Build the starting counters from caller rules.
    pub fn from_rules(rules: &AxisMap<IncrementRule>) -> Self {
        rules.map(|_, rule| IncrementState::from(*rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::Axis;

    #[test]
    fn test_default_state_is_inactive() {
        let state = IncrementState::from(IncrementRule::new());
        assert_eq!(state.current(), 0.0);
        assert_eq!(state.base(), None);
        assert_eq!(state.step(), None);
        assert!(!state.is_active());
    }

    #[test]
    fn test_reset_without_base_is_ignored() {
        let mut state = IncrementState::new(7.0, None, Some(1.0));
        state.reset();
        assert_eq!(state.current(), 7.0);
    }

    #[test]
    fn test_reset_snaps_to_base() {
        let mut state = IncrementState::new(42.0, Some(5.0), None);
        state.reset();
        assert_eq!(state.current(), 5.0);
    }

    #[test]
    fn test_advance_requires_base_and_step() {
        let mut step_only = IncrementState::new(0.0, None, Some(3.0));
        step_only.advance();
        assert_eq!(step_only.current(), 0.0);

        let mut base_only = IncrementState::new(0.0, Some(1.0), None);
        base_only.advance();
        assert_eq!(base_only.current(), 0.0);

        let mut active = IncrementState::new(10.0, Some(10.0), Some(-2.0));
        active.advance();
        active.advance();
        assert_eq!(active.current(), 6.0);
    }

    #[test]
    fn test_counter_starts_at_base_unless_current_given() {
        let mut state = IncrementState::from(IncrementRule::new().with_base(100.0).with_step(5.0));
        assert_eq!(state.current(), 100.0);
        state.advance();
        assert_eq!(state.current(), 105.0);

        let state = IncrementState::from(
            IncrementRule::new().with_base(100.0).with_step(5.0).with_current(1.0),
        );
        assert_eq!(state.current(), 1.0);
    }

    #[test]
    fn test_table_from_rules() {
        let mut rules = AxisMap::<IncrementRule>::default();
        rules[Axis::Y] = IncrementRule::new().with_current(3.0).with_base(1.0).with_step(2.0);

        let table = IncrementTable::from_rules(&rules);
        assert!(table[Axis::Y].is_active());
        assert_eq!(table[Axis::Y].current(), 3.0);
        assert!(table.iter().filter(|(axis, _)| *axis != Axis::Y).all(|(_, s)| !s.is_active()));
    }

    #[test]
    fn test_rule_accepts_i_and_step_keys() {
        let rule: IncrementRule = serde_saphyr::from_str("base: 0\ni: 1000\n").unwrap();
        assert_eq!(rule.step, Some(1000.0));

        let rule: IncrementRule = serde_saphyr::from_str("step: 2\n").unwrap();
        assert_eq!(rule.step, Some(2.0));
        assert_eq!(rule.base, None);
    }
}
