use std::str::FromStr;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};

use crate::{
    language::{LANGUAGE_COOKIE, Language},
    template::{NotFoundTemplate, Template},
};

/// GET /language/{lang} - remembers the chosen language and goes back home
pub async fn switch(template: Template, jar: CookieJar, Path(lang): Path<String>) -> Response {
    let Ok(language) = Language::from_str(&lang) else {
        return template.render_status(
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                language: template.language(),
            },
        );
    };

    let cookie = Cookie::build((LANGUAGE_COOKIE, language.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent()
        .build();

    (jar.add(cookie), Redirect::to("/")).into_response()
}
