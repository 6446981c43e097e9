use axum::extract::{Path, RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::info;

use crate::application::errors::ApiError;
use crate::application::services::Resolution;
use crate::application::state::AppState;
use crate::domain::identifiers::Identifier;
use crate::domain::placeholder::FillColor;
use crate::infrastructure::image_processing::{PLACEHOLDER_CONTENT_TYPE, render_placeholder};

/// Every proxied image is labelled JPEG whatever the origin declared.
const PROXIED_CONTENT_TYPE: &str = "image/jpeg";

pub(crate) async fn resolve_image(
    State(state): State<AppState>,
    Path((kind, value)): Path<(String, String)>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    // A decoded `%2F` would otherwise smuggle an extra path segment through.
    if value.contains('/') {
        return Ok(not_found_response());
    }
    resolve(&state, &kind, value, query.as_deref()).await
}

/// `/{kind}/` is a well-formed path whose value is the empty string.
pub(crate) async fn resolve_empty_value(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    resolve(&state, &kind, String::new(), query.as_deref()).await
}

async fn resolve(
    state: &AppState,
    kind: &str,
    value: String,
    query: Option<&str>,
) -> Result<Response, ApiError> {
    let Ok(identifier) = Identifier::parse(kind, value) else {
        return Ok(not_found_response());
    };

    match state.resolver.resolve(&identifier).await? {
        Resolution::Found(image) => {
            Ok(([(header::CONTENT_TYPE, PROXIED_CONTENT_TYPE)], image.data).into_response())
        }
        Resolution::Miss(reason) => {
            if state.log_misses {
                info!(
                    kind = %identifier.kind,
                    value = %identifier.value,
                    %reason,
                    "no image resolved"
                );
            }
            FallbackOptions::from_query(query).respond()
        }
    }
}

pub(crate) async fn not_found() -> Response {
    not_found_response()
}

fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// What a caller asked for in case no image can be resolved.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct FallbackOptions {
    placeholder: bool,
    color: Option<String>,
}

impl FallbackOptions {
    /// The first occurrence of each parameter wins; an empty `notFoundImage`
    /// counts as absent.
    pub(crate) fn from_query(query: Option<&str>) -> Self {
        let mut not_found_image: Option<String> = None;
        let mut color: Option<String> = None;

        for (key, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "notFoundImage" if not_found_image.is_none() => {
                    not_found_image = Some(value.into_owned());
                }
                "color" if color.is_none() => color = Some(value.into_owned()),
                _ => {}
            }
        }

        Self {
            placeholder: not_found_image.is_some_and(|v| !v.is_empty()),
            color,
        }
    }

    fn respond(self) -> Result<Response, ApiError> {
        if !self.placeholder {
            return Ok(not_found_response());
        }

        let png = render_placeholder(FillColor::from_hex(self.color.as_deref()))?;
        Ok(([(header::CONTENT_TYPE, PLACEHOLDER_CONTENT_TYPE)], png).into_response())
    }
}
