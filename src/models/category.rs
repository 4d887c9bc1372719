use serde::Serialize;

use crate::models::TransactionType;

pub const DEFAULT_INCOME_COLOR: &str = "#10B981";
pub const DEFAULT_EXPENSE_COLOR: &str = "#EF4444";

/// Static classification tag with a flow direction and display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub color: &'static str,
    pub icon: &'static str
}

const fn category(
    id: &'static str,
    name: &'static str,
    transaction_type: TransactionType,
    color: &'static str,
    icon: &'static str
) -> Category {
    Category { id, name, transaction_type, color, icon }
}

pub static DEFAULT_CATEGORIES: [Category; 12] = [
    category("1", "Salary", TransactionType::Income, "#059669", "Wallet"),
    category("2", "Freelance", TransactionType::Income, "#047857", "Briefcase"),
    category("3", "Investments", TransactionType::Income, "#065F46", "TrendingUp"),
    category("4", "Other", TransactionType::Income, "#10B981", "Plus"),
    category("5", "Food & Dining", TransactionType::Expense, "#DC2626", "UtensilsCrossed"),
    category("6", "Transportation", TransactionType::Expense, "#B91C1C", "Car"),
    category("7", "Housing", TransactionType::Expense, "#991B1B", "Home"),
    category("8", "Healthcare", TransactionType::Expense, "#7F1D1D", "Heart"),
    category("9", "Education", TransactionType::Expense, "#EF4444", "GraduationCap"),
    category("10", "Entertainment", TransactionType::Expense, "#F59E0B", "Gamepad2"),
    category("11", "Shopping", TransactionType::Expense, "#D97706", "ShoppingBag"),
    category("12", "Other", TransactionType::Expense, "#92400E", "MoreHorizontal"),
];

/// Read-only view over a fixed list of categories.
///
/// Names repeat across types ("Other" is both an income and an expense category),
/// so every lookup takes the `(name, type)` pair.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRegistry {
    categories: &'static [Category]
}

impl CategoryRegistry {
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    pub fn all(&self) -> &'static [Category] {
        self.categories
    }

    pub fn find(&self, name: &str, transaction_type: TransactionType) -> Option<&'static Category> {
        self.categories.iter()
            .find(|category| category.name == name && category.transaction_type == transaction_type)
    }

    pub fn for_type(&self, transaction_type: TransactionType) -> impl Iterator<Item = &'static Category> {
        self.categories.iter()
            .filter(move |category| category.transaction_type == transaction_type)
    }

    /// Display color for a category, falling back to the type's default color for
    /// names the registry does not know.
    pub fn color_for(&self, name: &str, transaction_type: TransactionType) -> &'static str {
        match self.find(name, transaction_type) {
            Some(category) => category.color,
            None => match transaction_type {
                TransactionType::Income => DEFAULT_INCOME_COLOR,
                TransactionType::Expense => DEFAULT_EXPENSE_COLOR
            }
        }
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(&DEFAULT_CATEGORIES)
    }
}
