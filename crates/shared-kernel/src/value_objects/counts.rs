// crates/shared-kernel/src/value_objects/counts.rs
use std::ops::Sub;

/// Unsigned line counter used for session bookkeeping and numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineNumber(u64);

impl LineNumber {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Advance by one, saturating at `u64::MAX`.
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for LineNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl Sub for LineNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl From<u64> for LineNumber {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl PartialEq<u64> for LineNumber {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<LineNumber> for u64 {
    fn eq(&self, other: &LineNumber) -> bool {
        *self == other.0
    }
}

mod display {
    use std::fmt;

    use super::LineNumber;

    impl fmt::Display for LineNumber {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.value(), f)
        }
    }
}
