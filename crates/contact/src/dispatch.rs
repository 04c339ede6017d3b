use crate::{Device, Mailbox};

/// What the browser should do with the constructed mail URL.
///
/// A handoff only says the route was built and passed on. Whether the
/// visitor's mail client ever delivers the message cannot be observed here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Handoff {
    /// Navigate the current window to a `mailto:` URI.
    Navigate(String),
    /// Open the webmail compose page in a new browsing context.
    OpenNew(String),
}

impl Handoff {
    pub fn href(&self) -> &str {
        match self {
            Handoff::Navigate(href) | Handoff::OpenNew(href) => href,
        }
    }

    pub fn device(&self) -> Device {
        match self {
            Handoff::Navigate(_) => Device::Mobile,
            Handoff::OpenNew(_) => Device::Desktop,
        }
    }

    /// Value of the `data-handoff` attribute the page script reads.
    pub fn kind(&self) -> &'static str {
        match self {
            Handoff::Navigate(_) => "navigate",
            Handoff::OpenNew(_) => "open",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub subject: String,
    pub message: String,
}

pub fn compose_body(name: &str, message: &str) -> String {
    format!("Dear,\n\n{message}\n\nBest regards,\n{name}\n")
}

pub fn mailto_href(mailbox: &Mailbox, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        mailbox.address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub fn webmail_href(mailbox: &Mailbox, subject: &str, body: &str) -> String {
    format!(
        "https://{}/mail/?view=cm&fs=1&to={}&su={}&body={}",
        mailbox.webmail_host,
        mailbox.address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Builds the mail route for a filled form.
///
/// Fields are expected to be non-empty already; nothing is validated here and
/// there is no failure path.
pub fn dispatch(form: &ContactFormState, user_agent: &str, mailbox: &Mailbox) -> Handoff {
    let body = compose_body(&form.name, &form.message);
    let device = Device::detect(user_agent);

    let handoff = match device {
        Device::Mobile => Handoff::Navigate(mailto_href(mailbox, &form.subject, &body)),
        Device::Desktop => Handoff::OpenNew(webmail_href(mailbox, &form.subject, &body)),
    };

    tracing::info!(device = %device, kind = handoff.kind(), "contact handoff constructed");

    handoff
}
