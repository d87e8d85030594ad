//! Minute-precise time-of-day arithmetic. The core never touches `NaiveTime`
//! formatting directly past the resource loader boundary — everything downstream
//! works in `ShiftTime` and plain minute counts.

use chrono::NaiveDateTime;
use shared::{DomainError, DomainResult};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time-of-day at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShiftTime {
    pub hour: u8,
    pub minute: u8,
}

impl ShiftTime {
    pub fn new(hour: u8, minute: u8) -> DomainResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidInput(format!(
                "time out of range: {hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn from_minutes(total_minutes: u32) -> Self {
        let m = total_minutes % MINUTES_PER_DAY;
        Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
        }
    }

    pub fn as_minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    pub fn add_minutes(&self, minutes: i64) -> Self {
        let current = self.as_minutes() as i64;
        let wrapped = (current + minutes).rem_euclid(MINUTES_PER_DAY as i64);
        Self::from_minutes(wrapped as u32)
    }

    pub fn render(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

pub fn parse_hhmm(value: &str) -> DomainResult<ShiftTime> {
    let mut parts = value.trim().splitn(3, ':');
    let hour = parts
        .next()
        .and_then(|p| p.parse::<u8>().ok())
        .ok_or_else(|| DomainError::InvalidInput(format!("bad time string: {value}")))?;
    let minute = parts
        .next()
        .and_then(|p| p.parse::<u8>().ok())
        .ok_or_else(|| DomainError::InvalidInput(format!("bad time string: {value}")))?;
    ShiftTime::new(hour, minute)
}

/// Duration in minutes from `start` to `end`, wrapping past midnight when
/// `end <= start`.
pub fn duration_minutes(start: ShiftTime, end: ShiftTime) -> u32 {
    let s = start.as_minutes();
    let e = end.as_minutes();
    if e <= s {
        MINUTES_PER_DAY - s + e
    } else {
        e - s
    }
}

/// Whether `[a_start, a_end)` and `[b_start, b_end)` share any minute,
/// both normalized for overnight wrap.
pub fn overlaps(a_start: ShiftTime, a_end: ShiftTime, b_start: ShiftTime, b_end: ShiftTime) -> bool {
    let a = normalized_range(a_start, a_end);
    let b = normalized_range(b_start, b_end);
    a.0 < b.1 && b.0 < a.1
}

/// Whether `point` falls within `[start, end)`, normalized for overnight wrap.
pub fn contains(start: ShiftTime, end: ShiftTime, point: ShiftTime) -> bool {
    let (s, e) = normalized_range(start, end);
    let p = point.as_minutes();
    (p >= s && p < e) || (p + MINUTES_PER_DAY >= s && p + MINUTES_PER_DAY < e)
}

/// Normalizes a possibly-overnight range to a `(start, end)` pair of minute
/// offsets where `end > start`, `end` may exceed `MINUTES_PER_DAY`.
fn normalized_range(start: ShiftTime, end: ShiftTime) -> (u32, u32) {
    let s = start.as_minutes();
    let e = end.as_minutes();
    if e <= s {
        (s, e + MINUTES_PER_DAY)
    } else {
        (s, e)
    }
}

/// Rest between two datetimes, in hours as a real number.
pub fn rest_hours(prev_end: NaiveDateTime, next_start: NaiveDateTime) -> f64 {
    (next_start - prev_end).num_seconds() as f64 / 3600.0
}

/// Partitions a day into fixed-length slots, identified by their start
/// time-of-day. Used by the assignment loop to walk a day interval by
/// interval.
#[derive(Debug, Clone, Copy)]
pub struct IntervalGrid {
    interval_minutes: u32,
}

impl IntervalGrid {
    pub fn new(interval_minutes: u32) -> DomainResult<Self> {
        if interval_minutes == 0 || MINUTES_PER_DAY % interval_minutes != 0 {
            return Err(DomainError::InvalidInput(format!(
                "interval_minutes {interval_minutes} must evenly divide a day"
            )));
        }
        Ok(Self { interval_minutes })
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// All interval start times across a full day, in chronological order.
    pub fn all_day_intervals(&self) -> Vec<ShiftTime> {
        (0..MINUTES_PER_DAY)
            .step_by(self.interval_minutes as usize)
            .map(ShiftTime::from_minutes)
            .collect()
    }

    /// Interval starts covering `[start, end)`, with overnight normalization.
    /// Rejects a span this grid's granularity does not evenly divide.
    pub fn intervals_for_range(&self, start: ShiftTime, end: ShiftTime) -> DomainResult<Vec<ShiftTime>> {
        let span = duration_minutes(start, end);
        if span == 0 || span % self.interval_minutes != 0 {
            return Err(DomainError::InvalidInput(format!(
                "span of {span} minutes is not divisible by the {} minute grid",
                self.interval_minutes
            )));
        }
        let count = span / self.interval_minutes;
        Ok((0..count)
            .map(|i| start.add_minutes((i * self.interval_minutes) as i64))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_handles_overnight_wrap() {
        let start = ShiftTime::new(22, 0).unwrap();
        let end = ShiftTime::new(6, 0).unwrap();
        assert_eq!(duration_minutes(start, end), 8 * 60);
    }

    #[test]
    fn duration_same_day() {
        let start = ShiftTime::new(9, 0).unwrap();
        let end = ShiftTime::new(17, 30).unwrap();
        assert_eq!(duration_minutes(start, end), 8 * 60 + 30);
    }

    #[test]
    fn overlaps_detects_overnight_overlap() {
        let a_start = ShiftTime::new(22, 0).unwrap();
        let a_end = ShiftTime::new(6, 0).unwrap();
        let b_start = ShiftTime::new(5, 0).unwrap();
        let b_end = ShiftTime::new(9, 0).unwrap();
        assert!(overlaps(a_start, a_end, b_start, b_end));
    }

    #[test]
    fn overlaps_rejects_disjoint_ranges() {
        let a_start = ShiftTime::new(8, 0).unwrap();
        let a_end = ShiftTime::new(12, 0).unwrap();
        let b_start = ShiftTime::new(13, 0).unwrap();
        let b_end = ShiftTime::new(17, 0).unwrap();
        assert!(!overlaps(a_start, a_end, b_start, b_end));
    }

    #[test]
    fn contains_checks_point_within_same_day_range() {
        let start = ShiftTime::new(8, 0).unwrap();
        let end = ShiftTime::new(12, 0).unwrap();
        assert!(contains(start, end, ShiftTime::new(8, 0).unwrap()));
        assert!(contains(start, end, ShiftTime::new(11, 59).unwrap()));
        assert!(!contains(start, end, ShiftTime::new(12, 0).unwrap()));
        assert!(!contains(start, end, ShiftTime::new(7, 59).unwrap()));
    }

    #[test]
    fn contains_handles_overnight_wrap() {
        let start = ShiftTime::new(22, 0).unwrap();
        let end = ShiftTime::new(6, 0).unwrap();
        assert!(contains(start, end, ShiftTime::new(23, 0).unwrap()));
        assert!(contains(start, end, ShiftTime::new(2, 0).unwrap()));
        assert!(!contains(start, end, ShiftTime::new(6, 0).unwrap()));
        assert!(!contains(start, end, ShiftTime::new(12, 0).unwrap()));
    }

    #[test]
    fn interval_grid_rejects_granularity_not_dividing_a_day() {
        assert!(IntervalGrid::new(13).is_err());
    }

    #[test]
    fn interval_grid_rejects_span_not_divisible_by_granularity() {
        let grid = IntervalGrid::new(60).unwrap();
        let start = ShiftTime::new(9, 0).unwrap();
        let end = ShiftTime::new(10, 30).unwrap();
        assert!(grid.intervals_for_range(start, end).is_err());
    }

    #[test]
    fn interval_grid_enumerates_intervals() {
        let grid = IntervalGrid::new(60).unwrap();
        let start = ShiftTime::new(9, 0).unwrap();
        let end = ShiftTime::new(12, 0).unwrap();
        let intervals = grid.intervals_for_range(start, end).unwrap();
        assert_eq!(
            intervals.iter().map(|t| t.render()).collect::<Vec<_>>(),
            vec!["09:00", "10:00", "11:00"]
        );
    }

    #[test]
    fn rest_hours_computes_real_valued_gap() {
        let prev_end = chrono::NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let next_start = chrono::NaiveDate::from_ymd_opt(2026, 1, 6)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(rest_hours(prev_end, next_start), 11.5);
    }
}
