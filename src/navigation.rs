//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "nav-link-current"
        } else {
            "nav-link"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let pages = [
            (endpoints::ROOT, "Home"),
            (endpoints::ADD_USER, "Add User"),
            (endpoints::ADD_CATEGORY, "Add Category"),
            (endpoints::ADD_EXPENSE_FORM, "Add Expense"),
            (endpoints::SET_BUDGET, "Set Budget"),
            (endpoints::REPORT, "Report"),
        ];

        let links = pages
            .into_iter()
            .map(|(url, title)| Link {
                url,
                title,
                is_current: active_endpoint == url,
            })
            .collect();

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html! {
            nav class="nav-bar"
            {
                @for link in self.links {
                    (link.into_html())
                }
            }
        }
    }
}
