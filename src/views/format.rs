//! Number and time formatting shared by the view models.

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use jiff::Timestamp;
use jiff::civil::{Date, Time};

/// Rounds half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole` as a percentage with two decimals; 0 when `whole` is 0.
pub fn percent(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

/// Currency amount for JSON, rounded to cents.
pub fn money(amount: &BigDecimal) -> f64 {
    amount
        .with_scale_round(2, RoundingMode::HalfUp)
        .to_f64()
        .unwrap_or(0.0)
}

pub fn money_opt(amount: Option<&BigDecimal>) -> Option<f64> {
    amount.map(money)
}

/// "just now", "5 minutes ago", "1 day ago", ...; future instants read "just now".
pub fn relative_time(then: Timestamp, now: Timestamp) -> String {
    let seconds = now.duration_since(then).as_secs();
    if seconds < 60 {
        return "just now".to_string();
    }

    let (count, unit) = match seconds {
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s if s < 7 * 86_400 => (s / 86_400, "day"),
        s if s < 30 * 86_400 => (s / (7 * 86_400), "week"),
        s if s < 365 * 86_400 => (s / (30 * 86_400), "month"),
        s => (s / (365 * 86_400), "year"),
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// "Monday, January 15, 2025"
pub fn date_label(date: Date) -> String {
    date.strftime("%A, %B %-d, %Y").to_string()
}

/// "Jan 15, 2025"
pub fn short_date(date: Date) -> String {
    date.strftime("%b %-d, %Y").to_string()
}

/// "9:00 AM"
pub fn time_label(time: Time) -> String {
    time.strftime("%-I:%M %p").to_string()
}

/// "7 AM", "12 PM", "1 PM" for an hour of the day.
pub fn hour_label(hour: u8) -> String {
    let suffix = if hour < 12 || hour == 24 { "AM" } else { "PM" };
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{twelve} {suffix}")
}

/// "9:00 AM - 10:30 AM", or just the start when there is no end.
pub fn time_window(start: Option<Time>, end: Option<Time>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{} - {}", time_label(start), time_label(end))),
        (Some(start), None) => Some(time_label(start)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;
    use jiff::civil::{date, time};
    use std::str::FromStr;

    #[test]
    fn test_percent() {
        assert_eq!(percent(3, 10), 30.0);
        assert_eq!(percent(1, 3), 33.33);
        assert_eq!(percent(2, 3), 66.67);
        assert_eq!(percent(5, 0), 0.0);
    }

    #[test]
    fn test_money_rounds_to_cents() {
        let amount = BigDecimal::from_str("1249.995").unwrap();
        assert_eq!(money(&amount), 1250.0);
        assert_eq!(money(&BigDecimal::from(0)), 0.0);
        assert_eq!(money_opt(None), None);
    }

    #[test]
    fn test_relative_time() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let ago = |secs: i64| now.checked_sub(SignedDuration::from_secs(secs)).unwrap();
        assert_eq!(relative_time(ago(10), now), "just now");
        assert_eq!(relative_time(ago(60), now), "1 minute ago");
        assert_eq!(relative_time(ago(5 * 3600), now), "5 hours ago");
        assert_eq!(relative_time(ago(86_400), now), "1 day ago");
        assert_eq!(relative_time(ago(3 * 86_400), now), "3 days ago");
        assert_eq!(relative_time(ago(14 * 86_400), now), "2 weeks ago");
        assert_eq!(relative_time(now.checked_add(SignedDuration::from_hours(1)).unwrap(), now), "just now");
    }

    #[test]
    fn test_labels() {
        assert_eq!(date_label(date(2025, 1, 15)), "Wednesday, January 15, 2025");
        assert_eq!(short_date(date(2025, 3, 4)), "Mar 4, 2025");
        assert_eq!(time_label(time(9, 0, 0, 0)), "9:00 AM");
        assert_eq!(time_label(time(13, 30, 0, 0)), "1:30 PM");
        assert_eq!(hour_label(7), "7 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(18), "6 PM");
        assert_eq!(
            time_window(Some(time(9, 0, 0, 0)), Some(time(10, 30, 0, 0))).as_deref(),
            Some("9:00 AM - 10:30 AM")
        );
        assert_eq!(time_window(None, Some(time(10, 0, 0, 0))), None);
    }
}
