//! Aggregates derived from a flat transaction list.

use std::collections::HashMap;

use crate::ledger::{
    Category, CategoryBreakdown, CategorySummary, FinancialSummary, MonthKey, MonthlyTotals,
    MonthlyTrendPoint, Transaction, TransactionType,
};

use super::CategoryService;

pub struct SummaryService;

impl SummaryService {
    /// Income and expense totals with `balance = income - expenses`.
    pub fn summarize(transactions: &[Transaction]) -> FinancialSummary {
        let (total_income, total_expenses) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expenses), txn| {
                    match txn.transaction_type {
                        TransactionType::Income => (income + txn.amount, expenses),
                        TransactionType::Expense => (income, expenses + txn.amount),
                    }
                });
        FinancialSummary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }

    /// Per-category expense totals, in order of first appearance.
    ///
    /// Percentages are of total expenses and are `0` when that total is `0`.
    pub fn category_summaries(transactions: &[Transaction]) -> Vec<CategorySummary> {
        let mut order: Vec<&str> = Vec::new();
        let mut sums: HashMap<&str, f64> = HashMap::new();
        let mut total_expenses = 0.0;

        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            total_expenses += txn.amount;
            let id = txn.category_id.as_str();
            let entry = sums.entry(id).or_insert_with(|| {
                order.push(id);
                0.0
            });
            *entry += txn.amount;
        }

        order
            .into_iter()
            .map(|id| {
                let total = sums[id];
                let percentage = if total_expenses > 0.0 {
                    total / total_expenses * 100.0
                } else {
                    0.0
                };
                CategorySummary {
                    category_id: id.to_string(),
                    total,
                    percentage,
                }
            })
            .collect()
    }

    /// Category summaries, largest total first.
    pub fn sorted_category_summaries(transactions: &[Transaction]) -> Vec<CategorySummary> {
        let mut summaries = Self::category_summaries(transactions);
        summaries.sort_by(|a, b| b.total.total_cmp(&a.total));
        summaries
    }

    /// Sorted summaries joined with their categories; dangling ids show as Unknown.
    pub fn category_breakdown(
        transactions: &[Transaction],
        categories: &[Category],
    ) -> Vec<CategoryBreakdown> {
        Self::sorted_category_summaries(transactions)
            .into_iter()
            .map(|summary| CategoryBreakdown {
                category: CategoryService::resolve(&summary.category_id, categories),
                total: summary.total,
                percentage: summary.percentage,
            })
            .collect()
    }

    /// Buckets amounts by the calendar month of each transaction's date.
    pub fn group_by_month(transactions: &[Transaction]) -> MonthlyTotals {
        let mut totals = MonthlyTotals::default();
        for txn in transactions {
            let bucket = match txn.transaction_type {
                TransactionType::Income => &mut totals.income,
                TransactionType::Expense => &mut totals.expenses,
            };
            *bucket.entry(MonthKey::of(txn.date)).or_insert(0.0) += txn.amount;
        }
        totals
    }

    /// Chronological trend over the last `window` months that have activity.
    pub fn monthly_trend(transactions: &[Transaction], window: usize) -> Vec<MonthlyTrendPoint> {
        let totals = Self::group_by_month(transactions);
        let months = totals.months();
        let skip = months.len().saturating_sub(window);
        months
            .into_iter()
            .skip(skip)
            .map(|month| MonthlyTrendPoint {
                month,
                income: totals.income_for(month),
                expenses: totals.expenses_for(month),
            })
            .collect()
    }
}
