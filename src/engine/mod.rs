mod aggregation;
mod errors;
mod listing;

pub use aggregation::{category_breakdown, monthly_totals, savings_goal, summarize, CategoryShare, MonthlySummary, MonthlyTotals};
pub use errors::ListingError;
pub use listing::{filter_and_sort, SortOrder, TransactionFilter};
