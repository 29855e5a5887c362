//! Arithmetic shared by the report pages.

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::Serialize;
use utoipa::ToSchema;

use crate::views::format::{money, percent};

/// Share of memberships that are not expired.
pub fn renewal_rate(not_expired: i64, total: i64) -> f64 {
    percent(not_expired, total)
}

/// Expands sparse group-by rows to one entry per variant of `all`, in that
/// order, with 0 for variants the query did not return.
pub fn complete_tallies<E>(all: &[E], rows: Vec<(E, i64)>) -> Vec<(E, i64)>
where
    E: Copy + Eq + std::hash::Hash,
{
    let counts: HashMap<E, i64> = rows.into_iter().collect();
    all.iter()
        .map(|variant| (*variant, counts.get(variant).copied().unwrap_or(0)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthRevenue {
    /// "2025-01"
    pub month: String,
    /// "Jan 2025"
    pub label: String,
    pub revenue: f64,
}

/// Sums payments into the calendar months of `months` (first days, in
/// display order) as seen from `tz`. Payments outside those months are ignored.
pub fn revenue_by_month(
    payments: &[(Timestamp, BigDecimal)],
    months: &[Date],
    tz: &TimeZone,
) -> Vec<MonthRevenue> {
    let mut totals: HashMap<(i16, i8), BigDecimal> = HashMap::new();
    for (paid_at, amount) in payments {
        let day = paid_at.to_zoned(tz.clone()).date();
        *totals.entry((day.year(), day.month())).or_default() += amount;
    }

    months
        .iter()
        .map(|first| MonthRevenue {
            month: first.strftime("%Y-%m").to_string(),
            label: first.strftime("%b %Y").to_string(),
            revenue: totals
                .get(&(first.year(), first.month()))
                .map(money)
                .unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobStatus;
    use jiff::civil::date;
    use std::str::FromStr;

    fn paid(at: &str, amount: &str) -> (Timestamp, BigDecimal) {
        (at.parse().unwrap(), BigDecimal::from_str(amount).unwrap())
    }

    #[test]
    fn test_revenue_by_month_fills_gaps() {
        let months = [date(2024, 11, 1), date(2024, 12, 1), date(2025, 1, 1)];
        let payments = vec![
            paid("2024-11-03T15:00:00Z", "100.25"),
            paid("2024-11-28T15:00:00Z", "99.75"),
            paid("2025-01-02T10:00:00Z", "450"),
            paid("2024-06-01T10:00:00Z", "9999"),
        ];
        let series = revenue_by_month(&payments, &months, &TimeZone::UTC);
        let revenue: Vec<f64> = series.iter().map(|m| m.revenue).collect();
        assert_eq!(revenue, vec![200.0, 0.0, 450.0]);
        assert_eq!(series[0].month, "2024-11");
        assert_eq!(series[2].label, "Jan 2025");
    }

    #[test]
    fn test_revenue_uses_business_zone() {
        let months = [date(2024, 12, 1), date(2025, 1, 1)];
        // 03:00 UTC on Jan 1 is still Dec 31 six hours west
        let payments = vec![paid("2025-01-01T03:00:00Z", "80")];
        let west = TimeZone::fixed(jiff::tz::offset(-6));
        let series = revenue_by_month(&payments, &months, &west);
        assert_eq!(series[0].revenue, 80.0);
        assert_eq!(series[1].revenue, 0.0);
    }

    #[test]
    fn test_complete_tallies_orders_and_zero_fills() {
        let rows = vec![(JobStatus::Completed, 4), (JobStatus::Pending, 2)];
        let full = complete_tallies(&JobStatus::ALL, rows);
        assert_eq!(full.len(), JobStatus::ALL.len());
        assert_eq!(full[0], (JobStatus::Pending, 2));
        assert_eq!(full[1], (JobStatus::Scheduled, 0));
        assert_eq!(full[5], (JobStatus::Completed, 4));
    }

    #[test]
    fn test_renewal_rate() {
        assert_eq!(renewal_rate(45, 50), 90.0);
        assert_eq!(renewal_rate(0, 0), 0.0);
    }
}
