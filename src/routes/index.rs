use axum::{extract::State, response::IntoResponse};
use axum_extra::{TypedHeader, headers::UserAgent};
use portfolio_contact::{ContactFormState, ContactPanel, Device, Handoff};

use crate::{
    language::Language,
    routes::AppState,
    template::{Template, filters},
};

pub struct ContactItem {
    pub icon: &'static str,
    pub label: String,
    pub href: String,
    pub external: bool,
}

/// Contact details listed next to the form
pub fn contact_items(template: &Template, address: &str) -> Vec<ContactItem> {
    vec![
        ContactItem {
            icon: "mail",
            label: address.to_owned(),
            href: format!("mailto:{address}"),
            external: false,
        },
        ContactItem {
            icon: "phone",
            label: template.t("phone_display"),
            href: "tel:+8801712525910".to_owned(),
            external: false,
        },
        ContactItem {
            icon: "map-pin",
            label: template.t("Bogura, Bangladesh"),
            href: "https://maps.app.goo.gl/EV2Yob73hVp2KKpQ8".to_owned(),
            external: true,
        },
        ContactItem {
            icon: "linkedin",
            label: template.t("LinkedIn Profile"),
            href: "https://linkedin.com/in/ridoan2007".to_owned(),
            external: true,
        },
    ]
}

#[derive(Default)]
pub struct ContactSection {
    /// Lets the page script open the webmail tab inside the submit click.
    pub device: Device,
    pub form: ContactFormState,
    pub submitted: bool,
    pub dismiss_after_ms: u64,
    pub handoff: Option<Handoff>,
    pub error: Option<String>,
}

impl ContactSection {
    pub fn for_agent(user_agent: &str) -> Self {
        Self {
            device: Device::detect(user_agent),
            ..Default::default()
        }
    }

    pub fn after_submit(panel: &ContactPanel, handoff: Handoff) -> Self {
        Self {
            device: handoff.device(),
            form: panel.form.clone(),
            submitted: panel.is_submitted(),
            dismiss_after_ms: panel.remaining_ms(),
            handoff: Some(handoff),
            error: None,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub language: Language,
    pub items: Vec<ContactItem>,
    pub contact: ContactSection,
}

impl IndexTemplate {
    pub fn new(template: &Template, app: &AppState, contact: ContactSection) -> Self {
        Self {
            language: template.language(),
            items: contact_items(template, &app.config.contact.address),
            contact,
        }
    }
}

/// Reads the `User-Agent` header, empty when absent.
pub fn agent(user_agent: &Option<TypedHeader<UserAgent>>) -> &str {
    user_agent
        .as_ref()
        .map(|TypedHeader(ua)| ua.as_str())
        .unwrap_or_default()
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    user_agent: Option<TypedHeader<UserAgent>>,
) -> impl IntoResponse {
    template.render(IndexTemplate::new(
        &template,
        &app,
        ContactSection::for_agent(agent(&user_agent)),
    ))
}
