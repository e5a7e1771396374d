use crate::User;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Why a fetch produced no users.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered without a body.
    #[error("response had no body")]
    EmptyBody,

    /// The body was not a JSON array of users.
    #[error("could not decode users: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Network-level failures, as opposed to a response that came back unusable.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

/// Decodes a whole batch; the first bad element rejects everything.
pub fn decode_users(body: &[u8]) -> Result<Vec<User>, FetchError> {
    Ok(serde_json::from_slice::<Vec<User>>(body)?)
}

pub struct UsersClient {
    client: Client,
    endpoint: Url,
}

impl UsersClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One GET, no retry. The status code is not checked: whatever body comes
    /// back goes through the decoder.
    pub async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let res = self.client.get(self.endpoint.clone()).send().await?;
        debug!(url = %self.endpoint, status = %res.status(), "users response received");

        let body = res.bytes().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        decode_users(&body)
    }
}
