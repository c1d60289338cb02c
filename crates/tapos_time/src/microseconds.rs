use core::ops::Add;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Microseconds(pub i64);

impl Microseconds {
    #[inline]
    pub const fn new(count: i64) -> Self {
        Self(count)
    }

    #[inline]
    pub const fn count(self) -> i64 {
        self.0
    }

    /// Whole seconds, rounding toward negative infinity.
    #[inline]
    pub const fn to_seconds(self) -> i64 {
        self.0.div_euclid(1_000_000)
    }

    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl Add for Microseconds {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

#[inline]
pub const fn seconds(s: i64) -> Microseconds {
    Microseconds(s * 1_000_000)
}
#[inline]
pub const fn milliseconds(ms: i64) -> Microseconds {
    Microseconds(ms * 1_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_seconds_truncates() {
        assert_eq!(Microseconds::new(1_999_999).to_seconds(), 1);
        assert_eq!(milliseconds(60_500).to_seconds(), 60);
        assert_eq!(Microseconds::new(-1).to_seconds(), -1);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(seconds(1).checked_add(milliseconds(500)), Some(milliseconds(1_500)));
        assert_eq!(Microseconds::new(i64::MAX).checked_add(seconds(1)), None);
    }
}
