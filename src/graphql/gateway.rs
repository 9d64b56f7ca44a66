//! Single-shot GraphQL operation dispatch with error normalization.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use url::Url;

use super::wire::{GraphQlRequest, GraphQlResponse};
use crate::auth::token::TokenStore;
use crate::error::{Error, Result};

/// Carries one request to the server. Seam for tests; production code uses
/// [`HttpTransport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        request: &GraphQlRequest,
        bearer: Option<&str>,
    ) -> Result<GraphQlResponse>;
}

/// POSTs `{query, variables}` as JSON to a single endpoint.
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: &GraphQlRequest,
        bearer: Option<&str>,
    ) -> Result<GraphQlResponse> {
        let mut builder = self.client.post(self.endpoint.clone()).json(request);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }

        // Any failure to obtain and decode a response body is a transport
        // failure; the caller never sees raw reqwest errors.
        let response = builder
            .send()
            .await
            .map_err(Error::Network)?
            .json::<GraphQlResponse>()
            .await
            .map_err(Error::Network)?;

        Ok(response)
    }
}

/// Sends exactly one operation per call, attaching the bearer credential
/// when the token store holds one. Never retries, never touches the cache.
pub struct RequestGateway {
    transport: Box<dyn Transport>,
    tokens: Arc<TokenStore>,
}

impl RequestGateway {
    pub fn new(transport: Box<dyn Transport>, tokens: Arc<TokenStore>) -> Self {
        Self { transport, tokens }
    }

    pub fn over_http(endpoint: Url, tokens: Arc<TokenStore>) -> Self {
        Self::new(Box::new(HttpTransport::new(endpoint)), tokens)
    }

    /// Issue `document` with `variables` and return the `data` payload.
    ///
    /// A non-empty top-level error list maps to [`Error::Remote`] even when
    /// partial data came back (GraphQL partial-failure semantics).
    pub async fn send(&self, document: &str, variables: Value) -> Result<Value> {
        let request = GraphQlRequest::new(document, variables);
        let token = self.tokens.get();

        debug!(operation = operation_name(document), "sending operation");

        let response = self.transport.execute(&request, token.as_deref()).await?;

        if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
            debug!(count = errors.len(), "operation returned errors");
            return Err(Error::remote(errors));
        }

        response.data.ok_or(Error::MissingData("data"))
    }
}

/// Best-effort operation name for logging, taken from the document header.
fn operation_name(document: &str) -> &str {
    document
        .split_whitespace()
        .nth(1)
        .map(|name| name.split('(').next().unwrap_or(name))
        .unwrap_or("unknown")
}
