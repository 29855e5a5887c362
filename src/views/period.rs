//! Reporting periods anchored in the business time zone.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan, Zoned};

/// Boundaries used by the dashboard, pipeline and report aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Periods {
    pub now: Timestamp,
    pub today: Date,
    pub day_start: Timestamp,
    pub day_end: Timestamp,
    /// Monday 00:00 of the current week
    pub week_start: Timestamp,
    pub month_start: Timestamp,
    /// First day of each of the trailing months, oldest first, current month last
    pub trailing_months: Vec<Date>,
    pub trailing_start: Timestamp,
    tz: TimeZone,
}

impl Periods {
    pub const TRAILING_MONTHS: i32 = 6;

    pub fn at(now: &Zoned) -> Result<Self, jiff::Error> {
        let tz = now.time_zone().clone();
        let today = now.date();
        let midnight = |date: Date| -> Result<Timestamp, jiff::Error> {
            Ok(date.to_zoned(tz.clone())?.timestamp())
        };

        let monday = today.checked_sub(i64::from(today.weekday().to_monday_zero_offset()).days())?;
        let first = today.first_of_month();
        let mut trailing_months = Vec::with_capacity(Self::TRAILING_MONTHS as usize);
        for back in (0..Self::TRAILING_MONTHS).rev() {
            trailing_months.push(first.checked_sub(back.months())?);
        }
        let trailing_start = midnight(trailing_months[0])?;

        Ok(Self {
            now: now.timestamp(),
            today,
            day_start: midnight(today)?,
            day_end: midnight(today.tomorrow()?)?,
            week_start: midnight(monday)?,
            month_start: midnight(first)?,
            trailing_months,
            trailing_start,
            tz,
        })
    }

    pub fn now_in(tz: &TimeZone) -> Result<Self, jiff::Error> {
        Self::at(&Timestamp::now().to_zoned(tz.clone()))
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn at(s: &str) -> Periods {
        let zoned: Zoned = s.parse().unwrap();
        Periods::at(&zoned).unwrap()
    }

    #[test]
    fn test_week_starts_monday() {
        // 2025-01-15 is a Wednesday
        let periods = at("2025-01-15T14:30:00[UTC]");
        assert_eq!(periods.today, date(2025, 1, 15));
        assert_eq!(periods.week_start, "2025-01-13T00:00:00Z".parse::<Timestamp>().unwrap());
        assert_eq!(periods.day_start, "2025-01-15T00:00:00Z".parse::<Timestamp>().unwrap());
        assert_eq!(periods.day_end, "2025-01-16T00:00:00Z".parse::<Timestamp>().unwrap());
    }

    #[test]
    fn test_monday_is_its_own_week_start() {
        let periods = at("2025-01-13T08:00:00[UTC]");
        assert_eq!(periods.week_start, periods.day_start);
    }

    #[test]
    fn test_trailing_months_cross_year() {
        let periods = at("2025-02-10T09:00:00[UTC]");
        assert_eq!(
            periods.trailing_months,
            vec![
                date(2024, 9, 1),
                date(2024, 10, 1),
                date(2024, 11, 1),
                date(2024, 12, 1),
                date(2025, 1, 1),
                date(2025, 2, 1),
            ]
        );
        assert_eq!(periods.month_start, "2025-02-01T00:00:00Z".parse::<Timestamp>().unwrap());
    }

    #[test]
    fn test_boundaries_follow_time_zone() {
        let periods = at("2025-01-15T23:30:00-06:00[-06:00]");
        assert_eq!(periods.today, date(2025, 1, 15));
        // local midnight is 06:00 UTC
        assert_eq!(periods.day_start, "2025-01-15T06:00:00Z".parse::<Timestamp>().unwrap());
    }
}
