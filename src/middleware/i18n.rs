// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

// Nosso extrator de idioma, a partir do Accept-Language.
pub struct Locale(pub String);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let default_lang = "en".to_string();

        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .first() // Pega o idioma preferido (ex: "hi-IN")
                    .map(|tag_string| {
                        // "hi-IN" -> split vira ["hi", "IN"] -> next() pega "hi"
                        // "en"    -> split vira ["en"]       -> next() pega "en"
                        tag_string.split('-').next().unwrap_or(tag_string).to_string()
                    })
            })
            .unwrap_or(default_lang);

        Ok(Locale(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn locale_for(header_value: Option<&str>) -> String {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header_value {
            builder = builder.header(header::ACCEPT_LANGUAGE, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        let Locale(lang) = Locale::from_request_parts(&mut parts, &()).await.unwrap();
        lang
    }

    #[tokio::test]
    async fn strips_region_from_language_tag() {
        assert_eq!(locale_for(Some("hi-IN,hi;q=0.9,en;q=0.8")).await, "hi");
    }

    #[tokio::test]
    async fn defaults_to_english_without_header() {
        assert_eq!(locale_for(None).await, "en");
    }
}
