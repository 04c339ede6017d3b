use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use strum::Display;

static MOBILE_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new("iPhone|iPad|iPod|Android")
        .case_insensitive(true)
        .build()
        .expect("mobile user-agent pattern is valid")
});

/// Client class derived from the reported user-agent.
#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Device {
    Mobile,
    #[default]
    Desktop,
}

impl Device {
    /// Anything that is not recognisably a phone or tablet is a desktop,
    /// including empty and spoofed agents.
    pub fn detect(user_agent: &str) -> Self {
        if MOBILE_AGENT.is_match(user_agent) {
            Device::Mobile
        } else {
            Device::Desktop
        }
    }
}

/// Where the visitor's own mail client should deliver to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mailbox {
    pub address: String,
    pub webmail_host: String,
}

impl Default for Mailbox {
    fn default() -> Self {
        Self {
            address: "ridoan.zisan@gmail.com".to_owned(),
            webmail_host: "mail.google.com".to_owned(),
        }
    }
}
