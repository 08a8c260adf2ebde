//! Expense Summary
//!
//! Totals all expenses and breaks the total down by category. Categories are
//! listed in the order they are first met while walking the collection, and
//! only categories that actually occur are listed.

use crate::models::{Category, Expense, Money};

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category
    pub category: Category,
    /// Sum of the amounts in this category
    pub total: Money,
    /// Number of expenses in this category
    pub expense_count: usize,
}

/// Summary of the whole collection
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Sum of every amount
    pub total: Money,
    /// Per-category subtotals, in first-encounter order
    pub by_category: Vec<CategoryTotal>,
    /// Total number of expenses
    pub expense_count: usize,
}

impl ExpenseSummary {
    /// Summarize a collection; `None` if there is nothing to summarize
    pub fn generate(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let total: Money = expenses.iter().map(|e| e.amount).sum();

        // Seven categories at most, a linear scan keeps first-encounter order
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        for expense in expenses {
            match by_category
                .iter_mut()
                .find(|t| t.category == expense.category)
            {
                Some(entry) => {
                    entry.total += expense.amount;
                    entry.expense_count += 1;
                }
                None => by_category.push(CategoryTotal {
                    category: expense.category,
                    total: expense.amount,
                    expense_count: 1,
                }),
            }
        }

        Some(Self {
            total,
            by_category,
            expense_count: expenses.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn expense(id: i64, amount: f64, category: Category) -> Expense {
        Expense::new(
            ExpenseId::from_raw(id),
            "2025-03-01",
            Money::new(amount),
            category,
            "",
        )
    }

    #[test]
    fn test_empty_collection_has_no_summary() {
        assert!(ExpenseSummary::generate(&[]).is_none());
    }

    #[test]
    fn test_two_categories() {
        let expenses = vec![
            expense(1, 12.5, Category::Food),
            expense(2, 80.0, Category::Bills),
        ];

        let summary = ExpenseSummary::generate(&expenses).unwrap();
        assert_eq!(summary.total.value(), 92.5);
        assert_eq!(summary.expense_count, 2);
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].category, Category::Food);
        assert_eq!(summary.by_category[0].total.value(), 12.5);
        assert_eq!(summary.by_category[1].category, Category::Bills);
        assert_eq!(summary.by_category[1].total.value(), 80.0);
    }

    #[test]
    fn test_first_encounter_order_and_accumulation() {
        let expenses = vec![
            expense(1, 10.0, Category::Utilities),
            expense(2, 1.0, Category::Food),
            expense(3, 5.0, Category::Utilities),
            expense(4, 2.0, Category::Other),
        ];

        let summary = ExpenseSummary::generate(&expenses).unwrap();
        let order: Vec<_> = summary.by_category.iter().map(|t| t.category).collect();
        assert_eq!(
            order,
            vec![Category::Utilities, Category::Food, Category::Other]
        );
        assert_eq!(summary.by_category[0].total.value(), 15.0);
        assert_eq!(summary.by_category[0].expense_count, 2);
    }

    #[test]
    fn test_subtotals_add_up_to_total() {
        let expenses = vec![
            expense(1, 3.1, Category::Food),
            expense(2, 4.2, Category::Groceries),
            expense(3, -1.0, Category::Food),
            expense(4, 100.01, Category::Transportation),
        ];

        let summary = ExpenseSummary::generate(&expenses).unwrap();
        let subtotal: Money = summary.by_category.iter().map(|t| t.total).sum();
        assert_eq!(
            format!("{:.2}", subtotal.value()),
            format!("{:.2}", summary.total.value())
        );
    }
}
