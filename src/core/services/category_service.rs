use crate::ledger::{Category, CategoryKind, Transaction};

pub struct CategoryService;

impl CategoryService {
    /// Looks up `id`, falling back to the Unknown sentinel.
    pub fn resolve(id: &str, categories: &[Category]) -> Category {
        Self::find(id, categories)
            .cloned()
            .unwrap_or_else(Category::unknown)
    }

    pub fn find<'a>(id: &str, categories: &'a [Category]) -> Option<&'a Category> {
        categories.iter().find(|category| category.id == id)
    }

    /// Categories a transaction of the given kind may be filed under.
    pub fn options_for(kind: CategoryKind, categories: &[Category]) -> Vec<&Category> {
        categories
            .iter()
            .filter(|category| category.kind == kind)
            .collect()
    }

    /// Number of transactions filed under `id`.
    pub fn usage_count(id: &str, transactions: &[Transaction]) -> usize {
        transactions
            .iter()
            .filter(|txn| txn.category_id == id)
            .count()
    }

    pub fn is_in_use(id: &str, transactions: &[Transaction]) -> bool {
        transactions.iter().any(|txn| txn.category_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{default_categories, UNKNOWN_CATEGORY_ID};

    #[test]
    fn resolve_returns_sentinel_for_dangling_ids() {
        let categories = default_categories();
        assert_eq!(CategoryService::resolve("food", &categories).name, "Food & Dining");
        let missing = CategoryService::resolve("deleted-long-ago", &categories);
        assert_eq!(missing.id, UNKNOWN_CATEGORY_ID);
        assert_eq!(missing.name, "Unknown");
        assert_eq!(missing.color, "#9CA3AF");
        assert_eq!(missing.icon, "Sparkles");
    }

    #[test]
    fn options_split_by_kind() {
        let categories = default_categories();
        assert_eq!(CategoryService::options_for(CategoryKind::Income, &categories).len(), 3);
        assert_eq!(CategoryService::options_for(CategoryKind::Expense, &categories).len(), 9);
    }
}
