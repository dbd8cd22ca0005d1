//! Monetary values posted with calls and accumulated in campaign balances

use serde::{Deserialize, Serialize};

/// A non-negative value in the host's smallest currency unit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Amount(pub u128);

impl Amount {
    pub fn new(value: u128) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value as u128)
    }
}

impl Amount {
    /// Total of `amounts`, or `None` if it exceeds `u128::MAX`
    pub fn checked_sum<I: IntoIterator<Item = Amount>>(amounts: I) -> Option<Amount> {
        amounts
            .into_iter()
            .try_fold(Amount::zero(), Amount::checked_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add() {
        assert_eq!(
            Amount::new(10).checked_add(Amount::new(5)),
            Some(Amount::new(15))
        );
        assert_eq!(Amount::new(u128::MAX).checked_add(Amount::new(1)), None);
    }

    #[test]
    fn test_checked_sum() {
        let total = Amount::checked_sum([1u128, 2, 3].into_iter().map(Amount::new));
        assert_eq!(total, Some(Amount::new(6)));
        assert_eq!(Amount::checked_sum(std::iter::empty()), Some(Amount::zero()));
    }

    #[test]
    fn test_checked_sum_overflow_is_none() {
        let total = Amount::checked_sum([Amount::new(u128::MAX), Amount::new(1)]);
        assert_eq!(total, None);
    }
}
