//! Expenses and expense categories.

use crate::rest::kind::{Coercion, ResourceKind};
use crate::rest::registry::Registry;

/// A category expenses are filed under.
/// `GET /expense_categories/{id}`, `GET /expense_categories/`.
pub static EXPENSE_CATEGORY: ResourceKind = ResourceKind::new("ExpenseCategory")
    .with_item_name("expense_category")
    .with_get_path("/expense_categories/")
    .with_list_path("/expense_categories/");

/// An expense. `GET /expenses/{id}`, `GET /expenses/`.
pub static EXPENSE: ResourceKind = ResourceKind::new("Expense")
    .with_get_path("/expenses/")
    .with_list_path("/expenses/")
    .with_coercions(&[
        ("created_at", Coercion::DateTime),
        ("updated_at", Coercion::DateTime),
        ("spent_at", Coercion::Date),
    ]);

pub(super) fn register(registry: &mut Registry) {
    registry.register(&EXPENSE_CATEGORY).register(&EXPENSE);
}
