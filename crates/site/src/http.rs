//! Shared plumbing for talking to the folio API with [`reqwest`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Errors from the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request itself failed (network, DNS, TLS, undecodable body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
}

/// Response bodies arrive either wrapped as `{ "data": ... }` or bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum Body<T> {
    Enveloped { data: T },
    Bare(T),
}

impl<T> Body<T> {
    fn into_inner(self) -> T {
        match self {
            Body::Enveloped { data } => data,
            Body::Bare(value) => value,
        }
    }
}

/// Check the status and decode the (possibly enveloped) JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, HttpError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(HttpError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<Body<T>>().await?.into_inner())
}
