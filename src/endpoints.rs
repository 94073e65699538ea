//! The endpoint URIs.
//!
//! Each form page is served with GET and its submission is handled with POST
//! on the same path.

/// The landing page with links to every form.
pub const ROOT: &str = "/";
/// The page and form submission route for adding a user.
pub const ADD_USER: &str = "/add_user";
/// The page and form submission route for adding a category.
pub const ADD_CATEGORY: &str = "/add_category";
/// The page and form submission route for recording an expense.
pub const ADD_EXPENSE_FORM: &str = "/add_expense_form";
/// The page and form submission route for setting a monthly budget.
pub const SET_BUDGET: &str = "/set_budget";
/// The page and form submission route for the monthly report.
pub const REPORT: &str = "/report";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The JSON API route for adding an expense.
pub const API_ADD_EXPENSE: &str = "/add_expense";
/// The JSON API route for listing all expenses.
pub const API_EXPENSES: &str = "/expenses";
