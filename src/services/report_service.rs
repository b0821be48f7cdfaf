use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::booking::Booking;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub total_sales: Decimal,
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesTotals {
    pub total_sales: Decimal,
    pub total_orders: u64,
    pub average_order: Decimal,
}

/// Aggregations over stored bookings for the admin reports.
pub struct ReportService;

impl ReportService {
    /// Parses `YYYY-MM-DD` bounds into an inclusive UTC datetime range
    /// covering the full start and end days. Unparseable values are
    /// treated as an open bound.
    pub fn parse_report_range(
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let start = start_date
            .and_then(Self::parse_date)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());
        let end = end_date
            .and_then(Self::parse_date)
            .and_then(|date| date.and_hms_milli_opt(23, 59, 59, 999))
            .map(|naive| naive.and_utc());
        (start, end)
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
    }

    /// Groups bookings by calendar day of creation, newest day first.
    pub fn daily_sales_history(bookings: &[Booking]) -> Vec<DailySales> {
        let mut days: BTreeMap<NaiveDate, (Decimal, u64)> = BTreeMap::new();
        for booking in bookings {
            let entry = days
                .entry(booking.created_at.date_naive())
                .or_insert((Decimal::ZERO, 0));
            entry.0 += booking.total_amount;
            entry.1 += 1;
        }
        days.into_iter()
            .rev()
            .map(|(date, (total_sales, orders))| DailySales {
                date,
                total_sales,
                orders,
            })
            .collect()
    }

    pub fn totals(bookings: &[Booking]) -> SalesTotals {
        let total_sales: Decimal = bookings.iter().map(|booking| booking.total_amount).sum();
        let total_orders = bookings.len() as u64;
        let average_order = if total_orders == 0 {
            Decimal::ZERO
        } else {
            (total_sales / Decimal::from(total_orders)).round_dp(2)
        };
        SalesTotals {
            total_sales,
            total_orders,
            average_order,
        }
    }
}
