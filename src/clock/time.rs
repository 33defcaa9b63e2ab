// SPDX-License-Identifier: MPL-2.0
//! Wall-clock sampling for the clock face.

use chrono::Timelike;

/// Hour, minute and second read for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    /// 0..=23
    pub hour: u32,
    /// 0..=59
    pub minute: u32,
    /// 0..=59
    pub second: u32,
}

impl TimeSample {
    /// Builds a sample, wrapping out-of-range fields into their valid range.
    #[must_use]
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Hour on a 12-hour dial, 0..=11. Noon and midnight both map to 0.
    #[must_use]
    pub fn hour12(self) -> u32 {
        self.hour % 12
    }

    #[must_use]
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }
}

/// Source of the current time of day.
pub trait TimeSource {
    fn now(&self) -> TimeSample;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> TimeSample {
        TimeSample::from_time(&chrono::Local::now())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub TimeSample);

impl TimeSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> TimeSample {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn hour12_folds_noon_and_midnight() {
        assert_eq!(TimeSample::new(0, 0, 0).hour12(), 0);
        assert_eq!(TimeSample::new(12, 0, 0).hour12(), 0);
        assert_eq!(TimeSample::new(15, 0, 0).hour12(), 3);
        assert_eq!(TimeSample::new(23, 59, 59).hour12(), 11);
    }

    #[test]
    fn new_wraps_out_of_range_fields() {
        assert_eq!(TimeSample::new(25, 61, 60), TimeSample::new(1, 1, 0));
    }

    #[test]
    fn samples_from_chrono_time() {
        let time = NaiveTime::from_hms_opt(13, 45, 7).expect("valid time");
        assert_eq!(TimeSample::from_time(&time), TimeSample::new(13, 45, 7));
    }

    #[test]
    fn fixed_clock_returns_its_sample() {
        let sample = TimeSample::new(3, 0, 0);
        assert_eq!(FixedClock(sample).now(), sample);
        assert_eq!((&FixedClock(sample)).now(), sample);
    }

    #[test]
    fn system_clock_is_in_range() {
        let now = SystemClock.now();
        assert!(now.hour < 24);
        assert!(now.minute < 60);
        assert!(now.second < 60);
    }
}
