//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{get_set_budget_page, set_budget_endpoint},
    category::{add_category_endpoint, get_add_category_page},
    endpoints,
    expense::{add_expense_endpoint, get_add_expense_page},
    index::get_index_page,
    not_found::get_404_not_found,
    report::{get_report_page, report_endpoint},
    user::{add_user_endpoint, get_add_user_page},
};

/// Return a router with all the form-driven app's routes.
///
/// Each form is served with GET and submitted with POST on the same path.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::ADD_USER,
            get(get_add_user_page).post(add_user_endpoint),
        )
        .route(
            endpoints::ADD_CATEGORY,
            get(get_add_category_page).post(add_category_endpoint),
        )
        .route(
            endpoints::ADD_EXPENSE_FORM,
            get(get_add_expense_page).post(add_expense_endpoint),
        )
        .route(
            endpoints::SET_BUDGET,
            get(get_set_budget_page).post(set_budget_endpoint),
        )
        .route(endpoints::REPORT, get(get_report_page).post(report_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        AppState, build_router, endpoints,
        flash::COOKIE_FLASH,
        stores::{ExpenseStore, UserStore},
        test_utils::get_test_app_state,
    };

    fn get_test_server(state: AppState) -> TestServer {
        TestServer::new(build_router(state))
    }

    fn alert_messages(text: &str) -> Vec<String> {
        let html = Html::parse_document(text);
        let selector = Selector::parse(".alert p").unwrap();

        html.select(&selector)
            .map(|element| element.text().collect::<String>())
            .collect()
    }

    #[tokio::test]
    async fn every_form_page_is_served() {
        let server = get_test_server(get_test_app_state());

        for endpoint in [
            endpoints::ROOT,
            endpoints::ADD_USER,
            endpoints::ADD_CATEGORY,
            endpoints::ADD_EXPENSE_FORM,
            endpoints::SET_BUDGET,
            endpoints::REPORT,
        ] {
            server.get(endpoint).await.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn flash_message_is_shown_once() {
        let server = get_test_server(get_test_app_state());

        let response = server
            .post(endpoints::ADD_USER)
            .form(&[("username", "alice"), ("email", "alice@example.com")])
            .await;
        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::ROOT);
        let flash = response.cookie(COOKIE_FLASH);

        let landing = server.get(endpoints::ROOT).add_cookie(flash).await;
        landing.assert_status_ok();
        assert_eq!(alert_messages(&landing.text()), ["User has been added."]);

        let again = server.get(endpoints::ROOT).await;
        assert!(alert_messages(&again.text()).is_empty());
    }

    #[tokio::test]
    async fn invalid_submission_creates_nothing() {
        let state = get_test_app_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::ADD_EXPENSE_FORM)
            .form(&[
                ("user_id", "1"),
                ("category_id", "1"),
                ("amount", "-3"),
                ("description", ""),
                ("date", "2024-03-01"),
            ])
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("Amount must be greater than zero."));
        assert!(state.store.get_all_expenses().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_form_fields_are_validation_errors() {
        let state = get_test_app_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::ADD_USER)
            .form(&[("username", "alice")])
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("Both name and email are required."));
        assert!(state.store.get_all_users().unwrap().is_empty());
    }

    #[tokio::test]
    async fn report_after_entries() {
        let server = get_test_server(get_test_app_state());

        server
            .post(endpoints::ADD_USER)
            .form(&[("username", "alice"), ("email", "alice@example.com")])
            .await
            .assert_status_see_other();
        server
            .post(endpoints::ADD_CATEGORY)
            .form(&[("name", "Groceries")])
            .await
            .assert_status_see_other();
        for amount in ["30", "25"] {
            server
                .post(endpoints::ADD_EXPENSE_FORM)
                .form(&[
                    ("user_id", "1"),
                    ("category_id", "1"),
                    ("amount", amount),
                    ("description", "Shop"),
                    ("date", "2024-03-05"),
                ])
                .await
                .assert_status_see_other();
        }
        server
            .post(endpoints::SET_BUDGET)
            .form(&[
                ("user_id", "1"),
                ("category_id", "1"),
                ("amount", "50"),
                ("month", "2024-03"),
                ("alert_threshold", ""),
            ])
            .await
            .assert_status_see_other();

        let response = server
            .post(endpoints::REPORT)
            .form(&[("user_id", "1"), ("month", "2024-03")])
            .await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        let selector = Selector::parse("#report tbody tr td").unwrap();
        let cells = html
            .select(&selector)
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(cells.first().map(String::as_str), Some("Groceries"));
        assert_eq!(cells.last().map(String::as_str), Some("EXCEEDED"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server(get_test_app_state());

        let response = server.get("/does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
