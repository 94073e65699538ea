//! User creation page and endpoint.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    app_state::EntryState,
    endpoints,
    flash::set_flash,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_STYLE, base, form_error_message,
        text_input,
    },
    navigation::NavBar,
    stores::UserStore,
    user::{NewUser, UserForm},
};

/// Render the page for adding a user.
pub async fn get_add_user_page() -> Response {
    add_user_view(&UserForm::default(), "").into_response()
}

/// Handle the add user form submission, redirects to the landing page on success.
pub async fn add_user_endpoint(
    State(state): State<EntryState>,
    jar: PrivateCookieJar,
    Form(form): Form<UserForm>,
) -> Response {
    let user = match NewUser::new(&form.username, &form.email) {
        Ok(user) => user,
        Err(error) => {
            tracing::debug!("rejected user submission: {error}");
            return add_user_view(&form, &error.to_string()).into_response();
        }
    };

    if let Err(error) = state.store.create_user(user) {
        tracing::error!("could not create user: {error}");
        return error.into_response();
    }

    (
        set_flash(jar, "User has been added."),
        Redirect::to(endpoints::ROOT),
    )
        .into_response()
}

fn add_user_view(form: &UserForm, error_message: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_USER).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form method="post" action=(endpoints::ADD_USER) class=(FORM_STYLE)
            {
                h2 { "Add User" }

                (text_input("username", "Name", "text", &form.username, true))
                (text_input("email", "Email", "email", &form.email, true))
                (form_error_message(error_message))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add User" }
            }
        }
    };

    base("Add User", &[], &content)
}
