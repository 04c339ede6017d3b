use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_composer::{Composer, Confirmation};
use serde::Deserialize;

use crate::{
    routes::AppState,
    template::{Template, ToastErrorTemplate, ToastSuccessTemplate},
};

#[derive(Deserialize)]
pub struct ComposerInput {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub scheduled_time: String,
}

/// A fresh widget per request, opened and filled from the submitted fields.
fn composer(app: &AppState, input: &ComposerInput) -> portfolio_composer::Result<Composer> {
    let composer = Composer::with_latency(app.config.composer.latency());
    composer.open();
    composer.set_message(input.message.to_owned())?;
    composer.set_scheduled_time(input.scheduled_time.to_owned())?;

    Ok(composer)
}

fn respond(template: &Template, result: portfolio_composer::Result<Confirmation>) -> Response {
    match result {
        Ok(confirmation) => template.render(ToastSuccessTemplate {
            message: &confirmation.to_string(),
            description: None,
        }),
        Err(err) => {
            tracing::warn!(err = %err, "composer action rejected");

            template.render_status(
                StatusCode::CONFLICT,
                ToastErrorTemplate {
                    message: &err.to_string(),
                    description: None,
                },
            )
        }
    }
}

pub async fn send(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ComposerInput>,
) -> impl IntoResponse {
    let result = match composer(&app, &input) {
        Ok(composer) => composer.send_now().await,
        Err(err) => Err(err),
    };

    respond(&template, result)
}

pub async fn schedule(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ComposerInput>,
) -> impl IntoResponse {
    let result = match composer(&app, &input) {
        Ok(composer) => composer.schedule_for(input.scheduled_time).await,
        Err(err) => Err(err),
    };

    respond(&template, result)
}
