//! Derived, never-stored aggregates.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::category::Category;

/// Totals over a set of transactions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

/// Expense total for one category and its share of all expenses.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category_id: String,
    pub total: f64,
    pub percentage: f64,
}

/// A category summary joined with the category it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub total: f64,
    pub percentage: f64,
}

/// Calendar month bucket. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Short label such as `Jan 2024`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => write!(f, "{}", first.format("%b %Y")),
            None => write!(f, "{}-{:02}", self.year, self.month),
        }
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        MonthKey::of(date)
    }
}

/// Income and expense sums keyed by month.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlyTotals {
    pub income: BTreeMap<MonthKey, f64>,
    pub expenses: BTreeMap<MonthKey, f64>,
}

impl MonthlyTotals {
    /// Every month present on either side, oldest first.
    pub fn months(&self) -> Vec<MonthKey> {
        let mut months: Vec<MonthKey> = self
            .income
            .keys()
            .chain(self.expenses.keys())
            .copied()
            .collect();
        months.sort();
        months.dedup();
        months
    }

    pub fn income_for(&self, month: MonthKey) -> f64 {
        self.income.get(&month).copied().unwrap_or(0.0)
    }

    pub fn expenses_for(&self, month: MonthKey) -> f64 {
        self.expenses.get(&month).copied().unwrap_or(0.0)
    }
}

/// One chart point of the monthly trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTrendPoint {
    pub month: MonthKey,
    pub income: f64,
    pub expenses: f64,
}
