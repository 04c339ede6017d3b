use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::{TypedHeader, headers::UserAgent};
use portfolio_contact::{ContactFormState, ContactPanel};
use serde::Deserialize;
use validator::Validate;

use crate::{
    routes::{
        AppState,
        index::{ContactSection, IndexTemplate, agent},
    },
    template::Template,
};

#[derive(Deserialize, Validate)]
pub struct ActionInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter a subject"))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please write a message"))]
    pub message: String,
}

impl From<ActionInput> for ContactFormState {
    fn from(input: ActionInput) -> Self {
        Self {
            name: input.name,
            subject: input.subject,
            message: input.message,
        }
    }
}

fn first_error(errors: &validator::ValidationErrors) -> String {
    let fields = errors.field_errors();

    ["name", "subject", "message"]
        .into_iter()
        .filter_map(|field| fields.get(field))
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Please fill in every field".to_owned())
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    user_agent: Option<TypedHeader<UserAgent>>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let user_agent = agent(&user_agent);

    if let Err(errors) = input.validate() {
        let error = template.t(&first_error(&errors));

        return template.render_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            IndexTemplate::new(
                &template,
                &app,
                ContactSection {
                    form: input.into(),
                    error: Some(error),
                    ..ContactSection::for_agent(user_agent)
                },
            ),
        );
    }

    let mut panel = ContactPanel::new(input.into());
    let handoff = panel.submit(user_agent, &app.config.contact.mailbox());

    template.render(IndexTemplate::new(
        &template,
        &app,
        ContactSection::after_submit(&panel, handoff),
    ))
}
