use log::debug;
use reqwest::Client as HttpClient;
use serde::{ Serialize, Deserialize };
use std::time::Duration;
use thiserror::Error;

use crate::cli::Args;

/// Failure taxonomy for one request to the chat service. The variants carry
/// the fixed user-facing texts as their display form; presentation beyond
/// that (prefixes, coloring) is the caller's call.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("The request timed out. Please try again.")]
    Timeout,
    #[error("Unable to connect to the server. Please check your internet connection.")]
    Connect,
    #[error("The server returned an error. Status code: {0}")]
    Status(u16),
    #[error("Unable to get response from server. {0}")]
    Unexpected(String),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    clear_history: Option<bool>,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Clone)]
pub struct RemoteChatClient {
    http: HttpClient,
    base_url: String,
}

impl RemoteChatClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ChatError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::Unexpected(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, ChatError> {
        Self::new(&args.chat_base_url, Duration::from_secs(args.request_timeout_secs))
    }

    /// Sends one query and returns the service's reply text. The caller is
    /// responsible for trimming and for skipping empty input entirely.
    pub async fn send(&self, query: &str) -> Result<String, ChatError> {
        let url = format!("{}/chat", self.base_url);
        let req = ChatRequest { query, clear_history: None };
        debug!("POST {} ({} bytes of query)", url, query.len());

        let resp = self.http
            .post(&url)
            .json(&req)
            .send().await
            .map_err(map_transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = resp.json::<ChatResponse>().await.map_err(map_transport_error)?;
        Ok(body.response)
    }

    /// Asks the service to forget its side of the conversation. Best-effort:
    /// the response body is ignored and the caller is expected to clear its
    /// local log whether or not this succeeds.
    pub async fn clear_history(&self) -> Result<(), ChatError> {
        let url = format!("{}/chat", self.base_url);
        let req = ChatRequest { query: "", clear_history: Some(true) };
        debug!("POST {} (clear history)", url);

        let resp = self.http
            .post(&url)
            .json(&req)
            .send().await
            .map_err(map_transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }
        Ok(())
    }
}

fn map_transport_error(err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        ChatError::Timeout
    } else if err.is_connect() {
        ChatError::Connect
    } else {
        ChatError::Unexpected(err.to_string())
    }
}
