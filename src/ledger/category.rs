use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

pub const UNKNOWN_CATEGORY_ID: &str = "unknown";
pub const FALLBACK_ICON: &str = "Sparkles";
const NEUTRAL_COLOR: &str = "#9CA3AF";

/// Ids that were treated as income before categories carried a `kind`.
const LEGACY_INCOME_IDS: [&str; 3] = ["salary", "investment", "other_income"];

/// Icon names the presentation layer knows how to draw.
pub const KNOWN_ICONS: [&str; 12] = [
    "ShoppingBag",
    "Utensils",
    "Home",
    "Car",
    "Plane",
    "Clipboard",
    "Sparkles",
    "Headphones",
    "Heart",
    "Banknote",
    "Building",
    "Briefcase",
];

/// Whether a category groups income or expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    #[default]
    Expense,
}

impl CategoryKind {
    /// Classifies records persisted without an explicit kind.
    pub fn infer_from_id(id: &str) -> Self {
        if LEGACY_INCOME_IDS.contains(&id) {
            CategoryKind::Income
        } else {
            CategoryKind::Expense
        }
    }

    pub fn accepts(self, transaction_type: TransactionType) -> bool {
        matches!(
            (self, transaction_type),
            (CategoryKind::Income, TransactionType::Income)
                | (CategoryKind::Expense, TransactionType::Expense)
        )
    }
}

impl From<TransactionType> for CategoryKind {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Income => CategoryKind::Income,
            TransactionType::Expense => CategoryKind::Expense,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Income => "Income",
            CategoryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// A named, styled grouping assigned to transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "StoredCategory")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
        kind: CategoryKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
            kind,
        }
    }

    pub fn from_new(data: NewCategory, id: String) -> Self {
        Self {
            id,
            name: data.name,
            color: data.color,
            icon: data.icon,
            kind: data.kind,
        }
    }

    /// Stand-in for references to categories that no longer exist.
    pub fn unknown() -> Self {
        Self::new(
            UNKNOWN_CATEGORY_ID,
            "Unknown",
            NEUTRAL_COLOR,
            FALLBACK_ICON,
            CategoryKind::Expense,
        )
    }

    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_CATEGORY_ID
    }

    /// Icon to render; unrecognised names fall back to `Sparkles`.
    pub fn display_icon(&self) -> &str {
        if KNOWN_ICONS.contains(&self.icon.as_str()) {
            &self.icon
        } else {
            FALLBACK_ICON
        }
    }
}

/// Category payload supplied by callers; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub icon: String,
    pub kind: CategoryKind,
}

impl NewCategory {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
        kind: CategoryKind,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
            kind,
        }
    }
}

/// On-disk shape; `kind` is absent in records written by older versions.
#[derive(Deserialize)]
struct StoredCategory {
    id: String,
    name: String,
    color: String,
    icon: String,
    #[serde(default)]
    kind: Option<CategoryKind>,
}

impl From<StoredCategory> for Category {
    fn from(stored: StoredCategory) -> Self {
        let kind = stored
            .kind
            .unwrap_or_else(|| CategoryKind::infer_from_id(&stored.id));
        Self {
            id: stored.id,
            name: stored.name,
            color: stored.color,
            icon: stored.icon,
            kind,
        }
    }
}

static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    use CategoryKind::{Expense, Income};
    [
        ("food", "Food & Dining", "#EF4444", "Utensils", Expense),
        ("housing", "Housing & Rent", "#3B82F6", "Home", Expense),
        ("transportation", "Transportation", "#F59E0B", "Car", Expense),
        ("shopping", "Shopping", "#EC4899", "ShoppingBag", Expense),
        ("travel", "Travel", "#8B5CF6", "Plane", Expense),
        ("healthcare", "Healthcare", "#10B981", "Clipboard", Expense),
        ("entertainment", "Entertainment", "#F97316", "Headphones", Expense),
        ("personal", "Personal Care", "#6366F1", "Heart", Expense),
        ("other_expense", "Other Expenses", NEUTRAL_COLOR, "Sparkles", Expense),
        ("salary", "Salary", "#10B981", "Briefcase", Income),
        ("investment", "Investment", "#6366F1", "Building", Income),
        ("other_income", "Other Income", "#8B5CF6", "Banknote", Income),
    ]
    .into_iter()
    .map(|(id, name, color, icon, kind)| Category::new(id, name, color, icon, kind))
    .collect()
});

/// The built-in category set used when nothing is stored.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES.clone()
}
