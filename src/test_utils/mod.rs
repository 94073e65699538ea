#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod state;

pub(crate) use form::{
    assert_form_error_message, assert_form_input, assert_form_input_with_value,
    assert_form_posts_to, assert_form_select, assert_form_submit_button,
    assert_no_form_error_message, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::{
    assert_content_type, assert_redirect, assert_sets_cookie, assert_status_ok, get_header,
};
pub(crate) use state::{get_test_app_state, get_test_cookie_jar, get_test_entry_state};
