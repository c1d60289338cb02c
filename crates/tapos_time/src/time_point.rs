use tapos_error::TaposError;

use crate::{Microseconds, TimePointSec};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct TimePoint {
    pub elapsed: Microseconds, // microseconds since UNIX epoch
}

impl TimePoint {
    #[inline]
    pub const fn new(elapsed: Microseconds) -> Self {
        Self { elapsed }
    }

    #[inline]
    pub const fn time_since_epoch(&self) -> Microseconds {
        self.elapsed
    }

    #[inline]
    pub fn checked_add(self, rhs: Microseconds) -> Option<Self> {
        self.elapsed.checked_add(rhs).map(TimePoint::new)
    }

    /// Drops the sub-second part. Fails when the result does not fit the
    /// 32-bit seconds range used on the wire.
    pub fn to_time_point_sec(self) -> Result<TimePointSec, TaposError> {
        let secs = self.elapsed.to_seconds();
        u32::try_from(secs).map(TimePointSec::new).map_err(|_| {
            TaposError::InvalidArgument(format!("timestamp {secs} out of range for TimePointSec"))
        })
    }
}

impl From<TimePointSec> for TimePoint {
    #[inline]
    fn from(t: TimePointSec) -> Self {
        TimePoint::new(crate::seconds(t.sec_since_epoch() as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{milliseconds, seconds};

    #[test]
    fn test_truncates_to_whole_seconds() {
        let tp = TimePoint::new(seconds(1_704_067_200) + milliseconds(999));
        assert_eq!(tp.to_time_point_sec().unwrap().sec_since_epoch(), 1_704_067_200);
    }

    #[test]
    fn test_out_of_range() {
        let before_epoch = TimePoint::new(milliseconds(-1));
        assert!(before_epoch.to_time_point_sec().is_err());

        let past_2106 = TimePoint::new(seconds(u32::MAX as i64 + 1));
        assert!(past_2106.to_time_point_sec().is_err());
    }

    #[test]
    fn test_round_trip_from_sec() {
        let sec = TimePointSec::new(42);
        assert_eq!(TimePoint::from(sec.clone()).to_time_point_sec().unwrap(), sec);
    }
}
