//! Bounded numeric player components (health, mana).
//!
//! A `Component` holds a value clamped to `[min, max]`. Every successful
//! change returns a `ComponentChange` so the caller can publish the matching
//! notifications; boundary flags are only set on the change that crosses
//! into the bound.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Health,
    Mana,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Health => f.write_str("health"),
            ComponentKind::Mana => f.write_str("mana"),
        }
    }
}

/// Why a component change was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("{kind} change amount must be positive, got {amount}")]
    InvalidAmount { kind: ComponentKind, amount: i64 },

    #[error("{kind} {value} is outside [{min}, {max}]")]
    OutOfBounds {
        kind: ComponentKind,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{0} is already at its minimum")]
    AtMinimum(ComponentKind),

    #[error("{0} is already at its maximum")]
    AtMaximum(ComponentKind),

    #[error("{kind} is already {value}")]
    Unchanged { kind: ComponentKind, value: i64 },
}

impl ComponentError {
    /// Expected gameplay outcome rather than bad data.
    #[must_use]
    pub fn is_no_op(&self) -> bool {
        matches!(
            self,
            ComponentError::AtMinimum(_) | ComponentError::AtMaximum(_) | ComponentError::Unchanged { .. }
        )
    }
}

/// A successful value change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentChange {
    pub kind: ComponentKind,
    pub old: i64,
    pub new: i64,
    min: i64,
    max: i64,
}

impl ComponentChange {
    /// This change moved the value onto its minimum.
    #[must_use]
    pub fn reached_min(&self) -> bool {
        self.new == self.min && self.old != self.min
    }

    /// This change moved the value onto its maximum.
    #[must_use]
    pub fn reached_max(&self) -> bool {
        self.new == self.max && self.old != self.max
    }
}

/// A value bounded to `[min, max]`.
///
/// ```
/// use rust_ccg_match::players::{Component, ComponentKind};
///
/// let mut health = Component::new(ComponentKind::Health, 30, 0, 100).unwrap();
/// let change = health.decrease(50).unwrap();
///
/// assert_eq!(health.value(), 0);
/// assert!(change.reached_min());
/// assert!(health.decrease(1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    kind: ComponentKind,
    value: i64,
    min: i64,
    max: i64,
}

impl Component {
    /// Create a component. Fails when `value` is outside `[min, max]` or the
    /// bounds are inverted.
    pub fn new(kind: ComponentKind, value: i64, min: i64, max: i64) -> Result<Self, ComponentError> {
        if min > max || value < min || value > max {
            return Err(ComponentError::OutOfBounds { kind, value, min, max });
        }
        Ok(Self { kind, value, min, max })
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    #[must_use]
    pub fn is_at_min(&self) -> bool {
        self.value == self.min
    }

    #[must_use]
    pub fn is_at_max(&self) -> bool {
        self.value == self.max
    }

    /// Set the value directly.
    pub fn set(&mut self, value: i64) -> Result<ComponentChange, ComponentError> {
        if value < self.min || value > self.max {
            return Err(ComponentError::OutOfBounds {
                kind: self.kind,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if value == self.value {
            return Err(ComponentError::Unchanged {
                kind: self.kind,
                value,
            });
        }
        Ok(self.apply(value))
    }

    /// Lower the value by `amount`, clamped at the minimum.
    pub fn decrease(&mut self, amount: i64) -> Result<ComponentChange, ComponentError> {
        self.check_amount(amount)?;
        if self.is_at_min() {
            return Err(ComponentError::AtMinimum(self.kind));
        }
        let next = self.value.saturating_sub(amount).max(self.min);
        Ok(self.apply(next))
    }

    /// Raise the value by `amount`, clamped at the maximum.
    pub fn increase(&mut self, amount: i64) -> Result<ComponentChange, ComponentError> {
        self.check_amount(amount)?;
        if self.is_at_max() {
            return Err(ComponentError::AtMaximum(self.kind));
        }
        let next = self.value.saturating_add(amount).min(self.max);
        Ok(self.apply(next))
    }

    fn check_amount(&self, amount: i64) -> Result<(), ComponentError> {
        if amount <= 0 {
            return Err(ComponentError::InvalidAmount {
                kind: self.kind,
                amount,
            });
        }
        Ok(())
    }

    fn apply(&mut self, next: i64) -> ComponentChange {
        let old = self.value;
        self.value = next;
        ComponentChange {
            kind: self.kind,
            old,
            new: next,
            min: self.min,
            max: self.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(value: i64) -> Component {
        Component::new(ComponentKind::Health, value, 0, 100).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(Component::new(ComponentKind::Mana, 11, 0, 10).is_err());
        assert!(Component::new(ComponentKind::Mana, 5, 10, 0).is_err());
    }

    #[test]
    fn test_decrease_clamps_and_flags_crossing() {
        let mut hp = health(30);

        let change = hp.decrease(50).unwrap();

        assert_eq!((change.old, change.new), (30, 0));
        assert!(change.reached_min());
        assert!(!change.reached_max());
    }

    #[test]
    fn test_decrease_at_minimum_is_no_op() {
        let mut hp = health(0);

        let err = hp.decrease(10).unwrap_err();

        assert_eq!(err, ComponentError::AtMinimum(ComponentKind::Health));
        assert!(err.is_no_op());
        assert_eq!(hp.value(), 0);
    }

    #[test]
    fn test_bound_error_messages() {
        assert_eq!(
            ComponentError::AtMinimum(ComponentKind::Health).to_string(),
            "health is already at its minimum"
        );
        assert_eq!(
            ComponentError::AtMaximum(ComponentKind::Mana).to_string(),
            "mana is already at its maximum"
        );
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut hp = health(50);

        assert!(matches!(hp.decrease(0), Err(ComponentError::InvalidAmount { amount: 0, .. })));
        assert!(matches!(hp.increase(-5), Err(ComponentError::InvalidAmount { .. })));
        assert!(!hp.decrease(-1).unwrap_err().is_no_op());
        assert_eq!(hp.value(), 50);
    }

    #[test]
    fn test_increase_clamps_at_max() {
        let mut hp = health(95);

        let change = hp.increase(20).unwrap();

        assert_eq!(hp.value(), 100);
        assert!(change.reached_max());
        assert_eq!(hp.increase(1), Err(ComponentError::AtMaximum(ComponentKind::Health)));
    }

    #[test]
    fn test_partial_decrease_does_not_flag() {
        let mut hp = health(100);

        let change = hp.decrease(10).unwrap();

        assert!(!change.reached_min());
        assert!(!change.reached_max());
    }

    #[test]
    fn test_set() {
        let mut hp = health(40);

        assert!(matches!(hp.set(101), Err(ComponentError::OutOfBounds { .. })));
        assert!(matches!(hp.set(40), Err(ComponentError::Unchanged { value: 40, .. })));

        let change = hp.set(100).unwrap();
        assert!(change.reached_max());
        assert_eq!(hp.value(), 100);
    }
}
