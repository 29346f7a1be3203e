//! Sales reporting.
//!
//! Filters persisted orders by exact day or by calendar month and sums
//! their totals. No filter means an empty report, never "all orders".

use chrono::{Datelike, NaiveDate};
use sqlx::PgPool;

use pronto_core::Money;

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;
use crate::models::order::Order;

/// Form value selecting the day filter.
const FILTER_DAY: &str = "dia";
/// Form value selecting the month filter.
const FILTER_MONTH: &str = "mes";

/// A sales report filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesFilter {
    /// Orders placed on this exact calendar day.
    Day(NaiveDate),
    /// Orders placed anywhere in this month.
    Month {
        /// Calendar year.
        year: i32,
        /// Calendar month, 1-12.
        month: u32,
    },
}

impl SalesFilter {
    /// Build a filter from the report form's fields.
    ///
    /// `filtro` is `"dia"` or `"mes"`; `fecha` is an ISO `YYYY-MM-DD`
    /// date. A missing or unrecognized mode, or a missing or malformed
    /// date, yields `None` — the report is then empty rather than
    /// unfiltered.
    #[must_use]
    pub fn from_form(filtro: Option<&str>, fecha: Option<&str>) -> Option<Self> {
        let date = NaiveDate::parse_from_str(fecha?, "%Y-%m-%d").ok()?;

        match filtro? {
            FILTER_DAY => Some(Self::Day(date)),
            FILTER_MONTH => Some(Self::Month {
                year: date.year(),
                month: date.month(),
            }),
            _ => None,
        }
    }
}

/// A computed sales report.
#[derive(Debug, Clone)]
pub struct SalesReport {
    /// The matching orders, oldest first.
    pub orders: Vec<Order>,
    /// Sum of the matching orders' totals.
    pub total: Money,
}

impl SalesReport {
    /// An empty report with a zero total.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            orders: Vec::new(),
            total: Money::ZERO,
        }
    }
}

/// Sales reporting service.
pub struct SalesService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> SalesService<'a> {
    /// Create a new sales service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// Compute the report for the given filter.
    ///
    /// `None` short-circuits to an empty report without touching the
    /// database.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn report(
        &self,
        filter: Option<SalesFilter>,
    ) -> Result<SalesReport, RepositoryError> {
        let Some(filter) = filter else {
            return Ok(SalesReport::empty());
        };

        let orders = match filter {
            SalesFilter::Day(date) => self.orders.placed_on_day(date).await?,
            SalesFilter::Month { year, month } => {
                self.orders.placed_in_month(year, month).await?
            }
        };

        let total = orders.iter().map(|order| order.total).sum();

        Ok(SalesReport { orders, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_filter_from_form() {
        let filter = SalesFilter::from_form(Some("dia"), Some("2024-03-15"));
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        assert_eq!(filter, Some(SalesFilter::Day(expected)));
    }

    #[test]
    fn test_month_filter_keeps_year_and_month_only() {
        let filter = SalesFilter::from_form(Some("mes"), Some("2024-03-15"));
        assert_eq!(
            filter,
            Some(SalesFilter::Month {
                year: 2024,
                month: 3
            })
        );
    }

    #[test]
    fn test_missing_or_bad_input_yields_no_filter() {
        assert_eq!(SalesFilter::from_form(None, Some("2024-03-15")), None);
        assert_eq!(SalesFilter::from_form(Some("dia"), None), None);
        assert_eq!(SalesFilter::from_form(Some("dia"), Some("15/03/2024")), None);
        assert_eq!(
            SalesFilter::from_form(Some("semana"), Some("2024-03-15")),
            None
        );
    }

    #[test]
    fn test_empty_report() {
        let report = SalesReport::empty();
        assert!(report.orders.is_empty());
        assert_eq!(report.total, Money::ZERO);
    }
}
