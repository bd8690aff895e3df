use chrono::{Local, Timelike};

/// Hour and minute sampled from the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    hour: u32,
    minute: u32,
}

/// Number of lit slots in each indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    /// Five-hour blocks, 0..=4.
    pub hour_tens: u32,
    /// Remaining hours, 0..=4.
    pub hour_ones: u32,
    /// Five-minute blocks, 0..=11.
    pub minute_tens: u32,
    /// Remaining minutes, 0..=4.
    pub minute_ones: u32,
}

impl ClockReading {
    /// `None` unless `hour < 24` and `minute < 60`.
    #[cfg(test)]
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(ClockReading { hour, minute })
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        ClockReading {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn segments(&self) -> Segments {
        Segments {
            hour_tens: self.hour / 5,
            hour_ones: self.hour % 5,
            minute_tens: self.minute / 5,
            minute_ones: self.minute % 5,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn hours_split_into_fives() {
        for hour in 0..24 {
            let s = ClockReading::new(hour, 0).unwrap().segments();
            assert!(s.hour_tens <= 4);
            assert!(s.hour_ones <= 4);
            assert_eq!(s.hour_tens * 5 + s.hour_ones, hour);
        }
    }

    #[test]
    fn minutes_split_into_fives() {
        for minute in 0..60 {
            let s = ClockReading::new(0, minute).unwrap().segments();
            assert!(s.minute_tens <= 11);
            assert!(s.minute_ones <= 4);
            assert_eq!(s.minute_tens * 5 + s.minute_ones, minute);
        }
    }

    #[test]
    fn afternoon_reading() {
        let s = ClockReading::new(14, 37).unwrap().segments();
        assert_eq!(
            s,
            Segments {
                hour_tens: 2,
                hour_ones: 4,
                minute_tens: 7,
                minute_ones: 2,
            }
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ClockReading::new(24, 0).is_none());
        assert!(ClockReading::new(0, 60).is_none());
        assert!(ClockReading::new(23, 59).is_some());
    }

    #[test]
    fn reads_from_time() {
        let time = NaiveTime::from_hms_opt(9, 41, 12).unwrap();
        let reading = ClockReading::from_time(&time);
        assert_eq!((reading.hour(), reading.minute()), (9, 41));
    }
}
