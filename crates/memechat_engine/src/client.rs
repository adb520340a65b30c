use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{FailureKind, ReplyError, ReplyPayload};

#[derive(Debug, Clone)]
pub struct ReplySettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ReplySettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/chat".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    message: &'a str,
}

/// The remote service is untrusted: `meme_url` may be absent and extra
/// fields are ignored. A missing `reply` makes the body malformed.
#[derive(Debug, Deserialize)]
struct WireReply {
    reply: String,
    #[serde(default)]
    meme_url: Option<String>,
}

#[async_trait::async_trait]
pub trait ReplyService: Send + Sync {
    async fn request_reply(&self, message: &str) -> Result<ReplyPayload, ReplyError>;
}

#[derive(Debug, Clone)]
pub struct HttpReplyService {
    settings: ReplySettings,
}

impl HttpReplyService {
    pub fn new(settings: ReplySettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ReplyError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ReplyError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ReplyService for HttpReplyService {
    async fn request_reply(&self, message: &str) -> Result<ReplyPayload, ReplyError> {
        let client = self.build_client()?;

        let response = client
            .post(&self.settings.endpoint)
            .json(&WireRequest { message })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReplyError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body: WireReply = response.json().await.map_err(|err| {
            if err.is_timeout() {
                ReplyError::new(FailureKind::Timeout, err.to_string())
            } else {
                ReplyError::new(FailureKind::MalformedBody, err.to_string())
            }
        })?;

        Ok(ReplyPayload {
            reply: body.reply,
            meme_url: body.meme_url,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ReplyError {
    if err.is_timeout() {
        return ReplyError::new(FailureKind::Timeout, err.to_string());
    }
    ReplyError::new(FailureKind::Network, err.to_string())
}
