use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::DatabaseId;

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "form-container";
pub const FORM_STYLE: &str = "form";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";
pub const FORM_ERROR_STYLE: &str = "form-error";

// Table styles
pub const TABLE_STYLE: &str = "table";
pub const TABLE_HEADER_STYLE: &str = "table-header";
pub const TABLE_ROW_STYLE: &str = "table-row";
pub const TABLE_CELL_STYLE: &str = "table-cell";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page-container";

/// Extra elements to add to the page head.
pub enum HeadElement {
    Style(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }
                link href="/static/main.css" rel="stylesheet";

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body class="container"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-page"
        {
            h1 class="error-header" { (header) }

            p class="error-description" { (description) }

            p class="error-fix" { (fix) }

            a href="/" class=(BUTTON_PRIMARY_STYLE) { "Back to Homepage" }
        }
    );

    base(title, &[], &content)
}

/// A labelled text-like input, e.g. `type_` is "text", "email", "number", "date" or "month".
pub fn text_input(name: &str, label: &str, type_: &str, value: &str, required: bool) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                id=(name)
                type=(type_)
                name=(name)
                placeholder=(label)
                value=(value)
                required[required]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// A labelled number input for amounts of money.
pub fn amount_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            div class="input-wrapper"
            {
                input
                    id=(name)
                    type="number"
                    name=(name)
                    step="0.01"
                    placeholder="0.00"
                    value=(value)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

/// A labelled select element listing `options` as (ID, label) pairs.
///
/// The first option is an empty placeholder so that submitting without a
/// choice sends an empty string.
pub fn id_select(
    name: &str,
    label: &str,
    options: &[(DatabaseId, String)],
    selected: Option<DatabaseId>,
) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            select id=(name) name=(name) required class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Select " (label.to_lowercase()) }

                @for (id, text) in options {
                    option value=(id) selected[selected == Some(*id)] { (text) }
                }
            }
        }
    }
}

/// The error paragraph shown at the bottom of a form, empty messages render nothing.
pub fn form_error_message(error_message: &str) -> Markup {
    html! {
        @if !error_message.is_empty() {
            p class=(FORM_ERROR_STYLE) { (error_message) }
        }
    }
}

/// Returns the CSS styles for adding a dollar sign prefix to number inputs.
/// Used for currency input fields across multiple forms.
pub fn dollar_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
        }
        .input-wrapper input[type="number"] {
            padding-left: 1.4rem;
        }
        .input-wrapper::before {
            content: '$';
            position: absolute;
            left: 0.6rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}

pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("currency prefix is within the length limit")
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .expect("currency prefix is within the length limit")
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits trailing zeros, so we must add them ourselves.
    // For example, "12.30" is rendered as "12.3" and "12.00" as "12".
    match formatted_string.rfind('.') {
        None => formatted_string.push_str(".00"),
        Some(position) if formatted_string.len() - position == 2 => formatted_string.push('0'),
        Some(_) => {}
    }

    formatted_string
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE) { (text) }
    )
}
