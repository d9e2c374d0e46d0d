//! Point value sets.
//!
//! An ace counts as both 1 and 11 until a total forces a choice, so a run of
//! cards is worth a *set* of totals rather than a single number. Combining two
//! sets takes every pairwise sum, which models each ace choosing independently.

extern crate alloc;

use alloc::collections::BTreeSet;
use core::fmt;
use core::ops::Add;

use crate::card::Rank;

/// The highest total that does not bust.
pub const BLACKJACK: u16 = 21;

/// Every total a run of cards can represent at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Values(BTreeSet<u16>);

impl Values {
    /// The value set of no cards, `{0}`. Identity of [`Values::combine`].
    #[must_use]
    pub fn zero() -> Self {
        Self(BTreeSet::from([0]))
    }

    /// Returns the totals a single card of `rank` contributes.
    ///
    /// ```
    /// use bjrules::{Rank, Values};
    ///
    /// assert_eq!(Values::from_rank(Rank::Ace), Values::from([1, 11]));
    /// assert_eq!(Values::from_rank(Rank::King), Values::from([10]));
    /// ```
    #[must_use]
    pub fn from_rank(rank: Rank) -> Self {
        match rank {
            Rank::Ace => Self(BTreeSet::from([1, 11])),
            _ => Self(BTreeSet::from([u16::from(rank.ordinal().min(10))])),
        }
    }

    /// Returns every pairwise sum of `self` and `other`.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        self.0
            .iter()
            .flat_map(|a| other.0.iter().map(move |b| a.saturating_add(*b)))
            .collect()
    }

    /// Returns the totals that do not exceed 21. Empty when every
    /// interpretation busts.
    #[must_use]
    pub fn eligible(&self) -> Self {
        self.0.range(..=BLACKJACK).copied().collect()
    }

    /// Returns the highest total that does not exceed 21.
    #[must_use]
    pub fn best_eligible(&self) -> Option<u16> {
        self.0.range(..=BLACKJACK).next_back().copied()
    }

    /// Returns the smallest total.
    #[must_use]
    pub fn min(&self) -> Option<u16> {
        self.0.first().copied()
    }

    /// Returns the largest total.
    #[must_use]
    pub fn max(&self) -> Option<u16> {
        self.0.last().copied()
    }

    /// Returns whether `value` is one of the totals.
    #[must_use]
    pub fn contains(&self, value: u16) -> bool {
        self.0.contains(&value)
    }

    /// Returns the number of distinct totals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set holds no totals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the totals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().copied()
    }
}

impl Default for Values {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for &Values {
    type Output = Values;

    fn add(self, rhs: Self) -> Values {
        self.combine(rhs)
    }
}

impl FromIterator<u16> for Values {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[u16; N]> for Values {
    fn from(values: [u16; N]) -> Self {
        Self(BTreeSet::from(values))
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}
