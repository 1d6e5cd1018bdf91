use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Direction of money flow. Amounts stay positive; the sign lives here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// A single dated, categorized income or expense record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(with = "stored_amount")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds a stored record from user data plus store-assigned identity.
    pub fn from_new(data: NewTransaction, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            amount: data.amount,
            transaction_type: data.transaction_type,
            category_id: data.category_id,
            description: data.description,
            date: data.date,
            created_at,
        }
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// Transaction payload supplied by callers; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category_id: String,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(
        amount: f64,
        transaction_type: TransactionType,
        category_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            transaction_type,
            category_id: category_id.into(),
            description: String::new(),
            date,
        }
    }

    pub fn income(amount: f64, category_id: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(amount, TransactionType::Income, category_id, date)
    }

    pub fn expense(amount: f64, category_id: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(amount, TransactionType::Expense, category_id, date)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Serializes dates as `YYYY-MM-DD`; reading also accepts full RFC 3339
/// timestamps and keeps their calendar date.
mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|stamp| stamp.date_naive())
            .map_err(|_| de::Error::custom(format!("invalid transaction date `{raw}`")))
    }
}

/// Finite amounts are plain JSON numbers. JSON has no infinity or NaN, so
/// those are written as the strings `inf`, `-inf` and `NaN`.
mod stored_amount {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if amount.is_finite() {
            serializer.serialize_f64(*amount)
        } else {
            serializer.collect_str(amount)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(value) => Ok(value),
            RawAmount::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| de::Error::custom(format!("invalid amount `{raw}`"))),
        }
    }
}
