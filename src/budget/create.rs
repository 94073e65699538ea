//! Defines the page and endpoint for setting a monthly budget.

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
    budget::{BudgetForm, DEFAULT_ALERT_THRESHOLD, NewBudget},
    endpoints,
    flash::set_flash,
    form::{FormChoices, parse_id},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_STYLE,
        FORM_TEXT_INPUT_STYLE, amount_input, base, dollar_input_styles, form_error_message,
        id_select, text_input,
    },
    navigation::NavBar,
    stores::BudgetStore,
    timezone::{format_month, local_today},
};

/// Renders the page for setting a budget, with the month defaulting to the current month.
pub async fn get_set_budget_page(State(state): State<EntryState>) -> Result<Response, Error> {
    let choices = FormChoices::load(state.store.as_ref())?;
    let today = local_today(&state.local_timezone)?;

    let form = BudgetForm {
        month: format_month(today),
        ..Default::default()
    };

    Ok(set_budget_view(&form, &choices, "").into_response())
}

/// A route handler for setting a budget, redirects to the landing page on success.
///
/// Setting a second budget for the same user, category and month adds another
/// record, the report uses the first one.
pub async fn set_budget_endpoint(
    State(state): State<EntryState>,
    jar: PrivateCookieJar,
    Form(form): Form<BudgetForm>,
) -> Response {
    let budget = match NewBudget::try_from(&form) {
        Ok(budget) => budget,
        Err(error) => {
            tracing::debug!("rejected budget submission: {error}");

            return match FormChoices::load(state.store.as_ref()) {
                Ok(choices) => set_budget_view(&form, &choices, &error.to_string()).into_response(),
                Err(error) => error.into_response(),
            };
        }
    };

    if let Err(error) = state.store.create_budget(budget) {
        tracing::error!("could not create budget: {error}");
        return error.into_response();
    }

    (set_flash(jar, "Budget stored."), Redirect::to(endpoints::ROOT)).into_response()
}

fn set_budget_view(form: &BudgetForm, choices: &FormChoices, error_message: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::SET_BUDGET).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form method="post" action=(endpoints::SET_BUDGET) class=(FORM_STYLE)
            {
                h2 { "Set Budget" }

                (id_select("user_id", "User", &choices.users, parse_id(&form.user_id)))
                (id_select(
                    "category_id",
                    "Category",
                    &choices.categories,
                    parse_id(&form.category_id),
                ))
                (amount_input("amount", "Budget", &form.amount))
                (text_input("month", "Month", "month", &form.month, true))

                div
                {
                    label for="alert_threshold" class=(FORM_LABEL_STYLE) { "Alert Threshold (%)" }

                    input
                        id="alert_threshold"
                        type="number"
                        name="alert_threshold"
                        step="any"
                        min="0"
                        placeholder=(DEFAULT_ALERT_THRESHOLD.to_string())
                        value=(form.alert_threshold)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                (form_error_message(error_message))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Store Budget" }
            }
        }
    };

    base("Set Budget", &[dollar_input_styles()], &content)
}
