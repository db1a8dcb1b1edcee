//! Handlers for the server-rendered contact form.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form as FormBody;
use formkit_core::form::{Form, Submission};
use formkit_core::validation::MessageCatalog;
use formkit_core::widgets::{Button, FieldBuilder, Hidden, Select, TextInput, Textarea};

use crate::state::AppState;

/// Version stamped into the hidden `form_version` field.
pub const CONTACT_FORM_VERSION: u32 = 1;

const CONTACT_TOPICS: [(&str, &str); 3] = [
    ("general", "General question"),
    ("support", "Support"),
    ("billing", "Billing"),
];

/// Build a fresh contact form whose fields report through `catalog`.
pub fn contact_form(catalog: &Arc<MessageCatalog>) -> Form {
    Form::new("/forms/contact")
        .control(
            TextInput::new("name")
                .label("Name")
                .not_empty()
                .max(40)
                .catalog(catalog.clone()),
        )
        .control(
            TextInput::new("email")
                .label("Email")
                .not_empty()
                .email_value()
                .catalog(catalog.clone()),
        )
        .control(
            TextInput::new("website")
                .label("Website")
                .url_value()
                .remark("Optional, e.g. https://example.com")
                .catalog(catalog.clone()),
        )
        .control(
            Select::new("topic")
                .label("Topic")
                .options(CONTACT_TOPICS)
                .value("general")
                .catalog(catalog.clone()),
        )
        .control(
            Textarea::new("message")
                .label("Message")
                .placeholder("How can we help?")
                .not_empty()
                .min(10)
                .max(2000)
                .catalog(catalog.clone()),
        )
        .control(
            Hidden::new("form_version")
                .value(CONTACT_FORM_VERSION)
                .integer_value()
                .catalog(catalog.clone()),
        )
        .control(Button::new("Send").primary())
}

/// GET /forms/contact
pub async fn show_contact(State(state): State<AppState>) -> Html<String> {
    Html(contact_form(&state.catalog).render())
}

/// POST /forms/contact
///
/// Re-renders the submitted form. Returns 422 with inline errors when any
/// field fails.
pub async fn submit_contact(
    State(state): State<AppState>,
    FormBody(submission): FormBody<Submission>,
) -> (StatusCode, Html<String>) {
    let mut form = contact_form(&state.catalog);
    let report = form.validate(&submission);

    let status = if report.is_valid {
        tracing::info!("Contact form accepted");
        StatusCode::OK
    } else {
        tracing::info!(errors = report.errors.len(), "Contact form rejected");
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Html(form.render()))
}
