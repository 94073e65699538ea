//! The landing page with links to every form.

use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    endpoints,
    flash::{flash_view, take_flash},
    html::{PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
};

const PAGES: [(&str, &str, &str); 5] = [
    (endpoints::ADD_USER, "Add User", "Register a person whose expenses you track."),
    (endpoints::ADD_CATEGORY, "Add Category", "Create a category such as Groceries or Rent."),
    (endpoints::ADD_EXPENSE_FORM, "Add Expense", "Record an amount spent in a category."),
    (endpoints::SET_BUDGET, "Set Budget", "Set a monthly limit for a user and category."),
    (endpoints::REPORT, "Report", "See spending by category against each budget."),
];

/// Display the landing page and the pending flash message, if any.
///
/// The flash message is removed from the cookie jar so it is only shown once.
pub async fn get_index_page(jar: PrivateCookieJar) -> (PrivateCookieJar, Markup) {
    let (jar, message) = take_flash(jar);

    (jar, index_view(message.as_deref()))
}

fn index_view(message: Option<&str>) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            @if let Some(message) = message {
                (flash_view(message))
            }

            h1 { "Expense Tracker" }

            div class="card-grid"
            {
                @for (url, title, description) in PAGES {
                    div class="card"
                    {
                        h2 { (link(url, title)) }
                        p { (description) }
                    }
                }
            }
        }
    };

    base("Home", &[], &content)
}
