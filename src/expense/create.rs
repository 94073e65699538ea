//! Defines the page and endpoint for recording an expense.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    Error,
    app_state::EntryState,
    endpoints,
    expense::{ExpenseForm, NewExpense},
    flash::set_flash,
    form::{FormChoices, parse_id},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_STYLE, amount_input, base,
        dollar_input_styles, form_error_message, id_select, text_input,
    },
    navigation::NavBar,
    stores::ExpenseStore,
    timezone::local_today,
};

/// Renders the page for recording an expense, with the date defaulting to today.
pub async fn get_add_expense_page(State(state): State<EntryState>) -> Result<Response, Error> {
    let choices = FormChoices::load(state.store.as_ref())?;
    let today = local_today(&state.local_timezone)?;

    let form = ExpenseForm {
        date: today.to_string(),
        ..Default::default()
    };

    Ok(add_expense_view(&form, &choices, "").into_response())
}

/// A route handler for recording an expense, redirects to the landing page on success.
pub async fn add_expense_endpoint(
    State(state): State<EntryState>,
    jar: PrivateCookieJar,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let expense = match NewExpense::try_from(&form) {
        Ok(expense) => expense,
        Err(error) => {
            tracing::debug!("rejected expense submission: {error}");

            return match FormChoices::load(state.store.as_ref()) {
                Ok(choices) => add_expense_view(&form, &choices, &error.to_string()).into_response(),
                Err(error) => error.into_response(),
            };
        }
    };

    if let Err(error) = state.store.create_expense(expense) {
        tracing::error!("could not create expense: {error}");
        return error.into_response();
    }

    (set_flash(jar, "Expense recorded."), Redirect::to(endpoints::ROOT)).into_response()
}

fn add_expense_view(form: &ExpenseForm, choices: &FormChoices, error_message: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_EXPENSE_FORM).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form method="post" action=(endpoints::ADD_EXPENSE_FORM) class=(FORM_STYLE)
            {
                h2 { "Add Expense" }

                (id_select("user_id", "User", &choices.users, parse_id(&form.user_id)))
                (id_select(
                    "category_id",
                    "Category",
                    &choices.categories,
                    parse_id(&form.category_id),
                ))
                (amount_input("amount", "Amount", &form.amount))
                (text_input("description", "Description", "text", &form.description, false))
                (text_input("date", "Date", "date", &form.date, true))
                (form_error_message(error_message))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Record Expense" }
            }
        }
    };

    base("Add Expense", &[dollar_input_styles()], &content)
}
