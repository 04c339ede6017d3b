use std::{convert::Infallible, str::FromStr};

use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const LANGUAGE_COOKIE: &str = "lang";

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    pub fn other(self) -> Self {
        match self {
            Language::En => Language::Bn,
            Language::Bn => Language::En,
        }
    }

    /// Name of the language written in that language, used on the toggle.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Bn => "বাংলা",
        }
    }

    /// Matches a BCP 47 tag on its primary subtag (`bn-BD` is Bengali).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        Language::from_str(primary).ok()
    }
}

/// Languages the visitor asked for, most preferred first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserLanguage {
    cookie: Option<Language>,
    accepted: Vec<Language>,
}

impl UserLanguage {
    pub fn from_parts(cookie: Option<&str>, accept_language: Option<&str>) -> Self {
        Self {
            cookie: cookie.and_then(|v| Language::from_str(v).ok()),
            accepted: accept_language.map(parse_accept_language).unwrap_or_default(),
        }
    }

    pub fn preferred_languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.cookie.into_iter().collect();
        for language in &self.accepted {
            if !languages.contains(language) {
                languages.push(*language);
            }
        }
        languages
    }

    pub fn preferred_or(&self, fallback: Language) -> Language {
        self.preferred_languages()
            .first()
            .copied()
            .unwrap_or(fallback)
    }
}

fn parse_accept_language(header: &str) -> Vec<Language> {
    let mut weighted: Vec<(Language, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut pieces = entry.split(';');
            let language = Language::from_tag(pieces.next()?)?;
            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            (quality > 0.0).then_some((language, quality))
        })
        .collect();

    // stable: equal weights keep header order
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.into_iter().map(|(language, _)| language).collect()
}

impl<S: Send + Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let accept_language = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        Ok(UserLanguage::from_parts(
            jar.get(LANGUAGE_COOKIE).map(|c| c.value()),
            accept_language,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("bn-BD"), Some(Language::Bn));
        assert_eq!(Language::from_tag("EN_us"), Some(Language::En));
        assert_eq!(Language::from_tag("fr-FR"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn test_cookie_wins_over_header() {
        let user = UserLanguage::from_parts(Some("bn"), Some("en-US,en;q=0.9"));
        assert_eq!(
            user.preferred_languages(),
            vec![Language::Bn, Language::En]
        );
        assert_eq!(user.preferred_or(Language::En), Language::Bn);
    }

    #[test]
    fn test_header_quality_order() {
        let user = UserLanguage::from_parts(None, Some("fr;q=1.0, en;q=0.3, bn-BD;q=0.8"));
        assert_eq!(
            user.preferred_languages(),
            vec![Language::Bn, Language::En]
        );
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let user = UserLanguage::from_parts(Some("xx"), Some("de-DE, bn;q=0"));
        assert!(user.preferred_languages().is_empty());
        assert_eq!(user.preferred_or(Language::Bn), Language::Bn);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Language::En.other(), Language::Bn);
        assert_eq!(Language::En.other().native_name(), "বাংলা");
        assert_eq!(Language::Bn.other().native_name(), "English");
        assert_eq!(Language::Bn.to_string(), "bn");
    }
}
