//! Implements a store that keeps every record in process memory.

use std::sync::{Mutex, MutexGuard};

use crate::{
    DatabaseId, Error,
    budget::{Budget, NewBudget},
    category::{Category, CategoryId, CategoryName},
    expense::{Expense, NewExpense},
    stores::{BudgetStore, CategoryStore, ExpenseStore, UserStore},
    user::{NewUser, User},
};

/// Holds users, categories, expenses and budgets in append-only sequences.
///
/// Each sequence has its own lock and IDs are assigned while the lock is
/// held, so concurrent requests can never observe duplicate or skipped IDs.
/// Records are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    categories: Mutex<Vec<Category>>,
    expenses: Mutex<Vec<Expense>>,
    budgets: Mutex<Vec<Budget>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A record with an ID assigned by the store.
trait Record: Clone {
    fn id(&self) -> DatabaseId;
}

impl Record for User {
    fn id(&self) -> DatabaseId {
        self.id
    }
}

impl Record for Category {
    fn id(&self) -> DatabaseId {
        self.id
    }
}

impl Record for Expense {
    fn id(&self) -> DatabaseId {
        self.id
    }
}

impl Record for Budget {
    fn id(&self) -> DatabaseId {
        self.id
    }
}

/// The ID for the next record: one more than the last record's ID, or 1 for
/// an empty sequence.
fn next_id<T: Record>(records: &[T]) -> DatabaseId {
    records.last().map_or(1, |record| record.id() + 1)
}

fn lock<T>(records: &Mutex<Vec<T>>) -> Result<MutexGuard<'_, Vec<T>>, Error> {
    records
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)
}

fn append<T: Record>(
    records: &Mutex<Vec<T>>,
    build: impl FnOnce(DatabaseId) -> T,
) -> Result<T, Error> {
    let mut records = lock(records)?;
    let record = build(next_id(&records));
    records.push(record.clone());

    Ok(record)
}

fn get_all<T: Record>(records: &Mutex<Vec<T>>) -> Result<Vec<T>, Error> {
    Ok(lock(records)?.clone())
}

impl UserStore for MemoryStore {
    fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let user = append(&self.users, |id| User {
            id,
            username: user.username,
            email: user.email,
        })?;
        tracing::debug!("created user {}", user.id);

        Ok(user)
    }

    fn get_all_users(&self) -> Result<Vec<User>, Error> {
        get_all(&self.users)
    }
}

impl CategoryStore for MemoryStore {
    fn create_category(&self, name: CategoryName) -> Result<Category, Error> {
        let category = append(&self.categories, |id| Category { id, name })?;
        tracing::debug!("created category {}", category.id);

        Ok(category)
    }

    fn get_category(&self, category_id: CategoryId) -> Result<Category, Error> {
        lock(&self.categories)?
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_all_categories(&self) -> Result<Vec<Category>, Error> {
        get_all(&self.categories)
    }
}

impl ExpenseStore for MemoryStore {
    fn create_expense(&self, expense: NewExpense) -> Result<Expense, Error> {
        let expense = append(&self.expenses, |id| Expense {
            id,
            user_id: expense.user_id,
            category_id: expense.category_id,
            amount: expense.amount,
            description: expense.description,
            date: expense.date,
        })?;
        tracing::debug!("created expense {}", expense.id);

        Ok(expense)
    }

    fn get_all_expenses(&self) -> Result<Vec<Expense>, Error> {
        get_all(&self.expenses)
    }
}

impl BudgetStore for MemoryStore {
    fn create_budget(&self, budget: NewBudget) -> Result<Budget, Error> {
        let budget = append(&self.budgets, |id| Budget {
            id,
            user_id: budget.user_id,
            category_id: budget.category_id,
            amount: budget.amount,
            month: budget.month,
            alert_threshold: budget.alert_threshold,
        })?;
        tracing::debug!("created budget {}", budget.id);

        Ok(budget)
    }

    fn get_all_budgets(&self) -> Result<Vec<Budget>, Error> {
        get_all(&self.budgets)
    }
}
