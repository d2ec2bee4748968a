// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of occurrences of a letter (or of all letters) in some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharCount(usize);

impl CharCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Bump the count by one occurrence.
    #[inline]
    pub const fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: usize) -> Self {
        Self(self.0.saturating_add(rhs))
    }

    #[inline]
    #[must_use]
    pub const fn saturating_add_count(self, rhs: Self) -> Self {
        self.saturating_add(rhs.0)
    }
}

impl Default for CharCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for CharCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add_count(rhs)
    }
}

impl Add<usize> for CharCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for CharCount {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add_count(rhs);
    }
}

impl AddAssign<usize> for CharCount {
    fn add_assign(&mut self, rhs: usize) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for CharCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a CharCount> for CharCount {
    fn sum<I: Iterator<Item = &'a CharCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sum<usize> for CharCount {
    fn sum<I: Iterator<Item = usize>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl FromIterator<usize> for CharCount {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().sum()
    }
}

impl FromIterator<CharCount> for CharCount {
    fn from_iter<I: IntoIterator<Item = CharCount>>(iter: I) -> Self {
        iter.into_iter().sum()
    }
}

impl From<usize> for CharCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<CharCount> for usize {
    fn from(value: CharCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for CharCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<CharCount> for usize {
    fn eq(&self, other: &CharCount) -> bool {
        *self == other.0
    }
}

impl num_traits::Zero for CharCount {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

mod display {
    use std::fmt;

    use super::CharCount;

    impl fmt::Display for CharCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.value(), f)
        }
    }
}
