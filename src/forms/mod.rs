//! Input validation for the transaction and category forms.
//!
//! The finance store accepts whatever it is given, so the presentation layer
//! runs drafts through these checks before calling it.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::ledger::{
    Category, CategoryKind, NewCategory, NewTransaction, Transaction, TransactionType,
};

pub const AMOUNT_MESSAGE: &str = "Please enter a valid amount greater than zero";
pub const CATEGORY_MESSAGE: &str = "Please select a category";
pub const DATE_MESSAGE: &str = "Please select a date";
pub const NAME_MESSAGE: &str = "Please enter a category name";
pub const COLOR_MESSAGE: &str = "Please choose a color like #3B82F6";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Amount,
    Category,
    Date,
    Name,
    Color,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Amount => "amount",
            FormField::Category => "category",
            FormField::Date => "date",
            FormField::Name => "name",
            FormField::Color => "color",
        };
        f.write_str(label)
    }
}

/// Every failing field with the message to show next to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} form field(s) are invalid", .fields.len())]
pub struct FormErrors {
    fields: BTreeMap<FormField, String>,
}

impl FormErrors {
    fn add(&mut self, field: FormField, message: &str) {
        self.fields.insert(field, message.to_string());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Raw transaction form state, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: String,
    pub transaction_type: TransactionType,
    pub category_id: String,
    pub description: String,
    pub date: String,
}

impl TransactionDraft {
    /// Empty expense form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            transaction_type: TransactionType::Expense,
            category_id: String::new(),
            description: String::new(),
            date: today.format(DATE_FORMAT).to_string(),
        }
    }

    /// Pre-filled form for editing an existing transaction.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            amount: transaction.amount.to_string(),
            transaction_type: transaction.transaction_type,
            category_id: transaction.category_id.clone(),
            description: transaction.description.clone(),
            date: transaction.date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Switches the type and, if the chosen category no longer fits, picks the
    /// first one that does.
    pub fn set_type(&mut self, transaction_type: TransactionType, categories: &[Category]) {
        self.transaction_type = transaction_type;
        let kind = CategoryKind::from(transaction_type);
        let fits = categories
            .iter()
            .any(|c| c.id == self.category_id && c.kind == kind);
        if !fits {
            self.category_id = categories
                .iter()
                .find(|c| c.kind == kind)
                .map(|c| c.id.clone())
                .unwrap_or_default();
        }
    }

    pub fn validate(&self) -> Result<NewTransaction, FormErrors> {
        let mut errors = FormErrors::default();

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0);
        if amount.is_none() {
            errors.add(FormField::Amount, AMOUNT_MESSAGE);
        }
        if self.category_id.trim().is_empty() {
            errors.add(FormField::Category, CATEGORY_MESSAGE);
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok();
        if date.is_none() {
            errors.add(FormField::Date, DATE_MESSAGE);
        }

        match (amount, date) {
            (Some(amount), Some(date)) if errors.is_empty() => Ok(NewTransaction {
                amount,
                transaction_type: self.transaction_type,
                category_id: self.category_id.trim().to_string(),
                description: self.description.trim().to_string(),
                date,
            }),
            _ => Err(errors),
        }
    }

    /// Validates and applies the draft to `original`, keeping its id and
    /// creation time.
    pub fn into_update(&self, original: &Transaction) -> Result<Transaction, FormErrors> {
        let data = self.validate()?;
        Ok(Transaction::from_new(
            data,
            original.id.clone(),
            original.created_at,
        ))
    }
}

/// Raw category form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
    pub icon: String,
    pub kind: CategoryKind,
}

impl CategoryDraft {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            color: category.color.clone(),
            icon: category.icon.clone(),
            kind: category.kind,
        }
    }

    pub fn validate(&self) -> Result<NewCategory, FormErrors> {
        let mut errors = FormErrors::default();
        if self.name.trim().is_empty() {
            errors.add(FormField::Name, NAME_MESSAGE);
        }
        if !is_hex_color(self.color.trim()) {
            errors.add(FormField::Color, COLOR_MESSAGE);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewCategory::new(
            self.name.trim(),
            self.color.trim().to_uppercase(),
            self.icon.trim(),
            self.kind,
        ))
    }

    pub fn into_update(&self, original: &Category) -> Result<Category, FormErrors> {
        let data = self.validate()?;
        Ok(Category::from_new(data, original.id.clone()))
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
