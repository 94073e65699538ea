//! The report page: a form for choosing a user and month, and the resulting table.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    app_state::EntryState,
    endpoints,
    form::{FormChoices, parse_id},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, base,
        form_error_message, format_currency, id_select, text_input,
    },
    navigation::NavBar,
    report::{BudgetStatus, MonthlyReport, generate_report},
    timezone::{format_month, local_today},
    user::UserId,
};

const UNKNOWN_USER: &str = "Unknown user";

/// Form data for requesting a report.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub month: String,
}

impl ReportForm {
    fn parse(&self) -> Result<(UserId, &str), Error> {
        let user_id = parse_id(&self.user_id).ok_or(Error::MissingReportUser)?;

        let month = self.month.trim();
        if month.is_empty() {
            return Err(Error::MissingMonth);
        }

        Ok((user_id, month))
    }
}

/// A generated report together with who and when it is for.
struct ReportView<'a> {
    username: &'a str,
    month: &'a str,
    report: MonthlyReport,
}

/// Render the report form with the month defaulting to the current month.
pub async fn get_report_page(State(state): State<EntryState>) -> Result<Response, Error> {
    let choices = FormChoices::load(state.store.as_ref())?;
    let today = local_today(&state.local_timezone)?;

    let form = ReportForm {
        month: format_month(today),
        ..Default::default()
    };

    Ok(report_view(&form, &choices, None, "").into_response())
}

/// Generate the report for the submitted user and month.
///
/// Invalid submissions render the form with an error message and no report.
pub async fn report_endpoint(
    State(state): State<EntryState>,
    Form(form): Form<ReportForm>,
) -> Result<Response, Error> {
    let choices = FormChoices::load(state.store.as_ref())?;

    let (user_id, month) = match form.parse() {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::debug!("rejected report request: {error}");
            return Ok(report_view(&form, &choices, None, &error.to_string()).into_response());
        }
    };

    let report = generate_report(state.store.as_ref(), user_id, month)
        .inspect_err(|error| tracing::error!("could not generate report: {error}"))?;

    let username = choices
        .users
        .iter()
        .find(|(id, _)| *id == user_id)
        .map_or(UNKNOWN_USER, |(_, username)| username.as_str());

    let view = ReportView {
        username,
        month,
        report,
    };

    Ok(report_view(&form, &choices, Some(&view), "").into_response())
}

fn status_style(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Ok => "status-ok",
        BudgetStatus::NearLimit => "status-near-limit",
        BudgetStatus::Exceeded => "status-exceeded",
    }
}

fn report_table(view: &ReportView) -> Markup {
    html! {
        section id="report"
        {
            h3 { "Report for " (view.username) " in " (view.month) }

            p { "Total spent: " strong { (format_currency(view.report.total)) } }

            @if view.report.categories.is_empty() {
                p { "No expenses recorded for this month." }
            } @else {
                table class=(TABLE_STYLE)
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Spent" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Budget" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Remaining" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                        }
                    }

                    tbody
                    {
                        @for summary in &view.report.categories {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (summary.category) }
                                td class=(TABLE_CELL_STYLE) { (format_currency(summary.spent)) }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    @if summary.budget > 0.0 {
                                        (format_currency(summary.budget))
                                    } @else {
                                        "-"
                                    }
                                }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    @if let Some(remaining) = summary.remaining() {
                                        (format_currency(remaining))
                                    } @else {
                                        "-"
                                    }
                                }
                                td class={(TABLE_CELL_STYLE) " " (status_style(summary.status))}
                                {
                                    (summary.status.to_string())
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn report_view(
    form: &ReportForm,
    choices: &FormChoices,
    report: Option<&ReportView>,
    error_message: &str,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::REPORT).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class=(FORM_CONTAINER_STYLE)
            {
                form method="post" action=(endpoints::REPORT) class=(FORM_STYLE)
                {
                    h2 { "Monthly Report" }

                    (id_select("user_id", "User", &choices.users, parse_id(&form.user_id)))
                    (text_input("month", "Month", "month", &form.month, true))
                    (form_error_message(error_message))

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Generate Report" }
                }
            }

            @if let Some(report) = report {
                (report_table(report))
            }
        }
    };

    base("Report", &[], &content)
}
