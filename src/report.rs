//! Per-category monthly spending reports with budget status.

mod engine;
mod page;

pub use engine::{
    BudgetStatus, CategorySummary, MonthlyReport, build_report, classify, generate_report,
};
pub use page::{ReportForm, get_report_page, report_endpoint};
