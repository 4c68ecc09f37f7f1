//! # Counter
//!
//! The single authoritative viewer count for the process.
//!
//! One `Counter` is constructed at startup and shared through [`crate::state::State`].
//! All mutation goes through [`Counter::apply`], which funnels concurrent handlers
//! through one atomic, so increments cannot be lost when requests overlap.
//!
//! The value is signed and has no floor: a decrement whose matching increment was
//! never delivered (or vice versa) simply pushes the count below zero. Lifetime is
//! the process lifetime, every restart begins at zero.

use std::sync::atomic::{AtomicI64, Ordering};

pub struct Counter {
    value: AtomicI64,
}

/// The two recognized mutations. Anything else on the wire parses to `None`
/// and callers leave the counter untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
}

impl Action {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "increment" => Some(Self::Increment),
            "decrement" => Some(Self::Decrement),
            _ => None,
        }
    }
}

impl Counter {
    pub fn new() -> Self {
        Self {
            value: AtomicI64::new(0),
        }
    }

    pub fn read(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    pub fn apply(&self, action: Action) -> i64 {
        let delta = match action {
            Action::Increment => 1,
            Action::Decrement => -1,
        };

        self.value.fetch_add(delta, Ordering::SeqCst) + delta
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Counter};

    #[test]
    fn starts_at_zero() {
        assert_eq!(Counter::new().read(), 0);
    }

    #[test]
    fn increment_persists() {
        let counter = Counter::new();

        assert_eq!(counter.apply(Action::Increment), 1);
        assert_eq!(counter.read(), 1);
    }

    #[test]
    fn decrement_has_no_floor() {
        let counter = Counter::new();

        assert_eq!(counter.apply(Action::Decrement), -1);
        assert_eq!(counter.apply(Action::Decrement), -2);
        assert_eq!(counter.read(), -2);
    }

    #[test]
    fn sequences_sum_in_call_order() {
        let counter = Counter::new();
        let actions = [
            Action::Increment,
            Action::Increment,
            Action::Decrement,
            Action::Increment,
            Action::Decrement,
            Action::Decrement,
            Action::Decrement,
        ];

        let mut expected = 0;
        for action in actions {
            expected += match action {
                Action::Increment => 1,
                Action::Decrement => -1,
            };
            assert_eq!(counter.apply(action), expected);
        }
        assert_eq!(counter.read(), expected);
    }

    #[test]
    fn unknown_literals_do_not_parse() {
        assert_eq!(Action::parse("increment"), Some(Action::Increment));
        assert_eq!(Action::parse("decrement"), Some(Action::Decrement));
        assert_eq!(Action::parse("noop-unknown"), None);
        assert_eq!(Action::parse("Increment"), None);
        assert_eq!(Action::parse(""), None);
    }
}
