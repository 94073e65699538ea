//! Category creation page and endpoint.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    app_state::EntryState,
    category::{CategoryForm, CategoryName},
    endpoints,
    flash::set_flash,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_STYLE, base, form_error_message,
        text_input,
    },
    navigation::NavBar,
    stores::CategoryStore,
};

/// Render the page for adding a category.
pub async fn get_add_category_page() -> Response {
    add_category_view("", "").into_response()
}

/// Handle the add category form submission, redirects to the landing page on success.
pub async fn add_category_endpoint(
    State(state): State<EntryState>,
    jar: PrivateCookieJar,
    Form(form): Form<CategoryForm>,
) -> Response {
    let name = match CategoryName::new(&form.name) {
        Ok(name) => name,
        Err(error) => {
            tracing::debug!("rejected category submission: {error}");
            return add_category_view(&form.name, &error.to_string()).into_response();
        }
    };

    if let Err(error) = state.store.create_category(name) {
        tracing::error!("could not create category: {error}");
        return error.into_response();
    }

    (set_flash(jar, "Category saved."), Redirect::to(endpoints::ROOT)).into_response()
}

fn add_category_view(name: &str, error_message: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_CATEGORY).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form method="post" action=(endpoints::ADD_CATEGORY) class=(FORM_STYLE)
            {
                h2 { "Add Category" }

                (text_input("name", "Category Name", "text", name, true))
                (form_error_message(error_message))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Category" }
            }
        }
    };

    base("Add Category", &[], &content)
}


#[cfg(test)]
mod add_category_endpoint_tests {
    use axum::{Form, extract::State};

    use crate::{
        category::{Category, CategoryForm, CategoryName, add_category_endpoint},
        endpoints,
        stores::CategoryStore,
        test_utils::{
            assert_form_error_message, assert_redirect, assert_status_ok, assert_valid_html,
            get_test_cookie_jar, get_test_entry_state, must_get_form, parse_html_document,
        },
    };

    #[tokio::test]
    async fn can_add_category() {
        let state = get_test_entry_state();
        let form = CategoryForm {
            name: "  Groceries ".to_owned(),
        };

        let response =
            add_category_endpoint(State(state.clone()), get_test_cookie_jar(), Form(form)).await;

        assert_redirect(&response, endpoints::ROOT);
        assert_eq!(
            state.store.get_category(1),
            Ok(Category {
                id: 1,
                name: CategoryName::new_unchecked("Groceries"),
            })
        );
    }

    #[tokio::test]
    async fn empty_name_rerenders_form() {
        let state = get_test_entry_state();
        let form = CategoryForm {
            name: "   ".to_owned(),
        };

        let response =
            add_category_endpoint(State(state.clone()), get_test_cookie_jar(), Form(form)).await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_error_message(&form, "Category name cannot be empty.");
        assert!(state.store.get_all_categories().unwrap().is_empty());
    }
}
