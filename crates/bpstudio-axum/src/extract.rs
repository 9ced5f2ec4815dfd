//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// JSON request body that tolerates a missing `Content-Type`.
///
/// A body without the header is still decoded as JSON. A non-JSON content
/// type, unparseable JSON and shape mismatches are all validation errors
/// (422).
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type_ok = is_json_or_absent(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        if !content_type_ok {
            return Err(HttpError::Validation(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        Ok(Self(serde_json::from_slice(&bytes)?))
    }
}

/// `true` when there is no content type, or it names a JSON media type.
fn is_json_or_absent(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
