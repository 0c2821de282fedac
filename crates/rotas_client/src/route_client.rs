use std::{future::Future, time::Duration};

use thiserror::Error;
use tracing::{debug, warn};

use crate::{route_query::RouteQuery, route_response::RouteResponse};

pub const ROUTES_API_URL: &str = "http://127.0.0.1:5000/rotas";

const ENDPOINT_ENV_VAR: &str = "ROTAS_ENDPOINT";
const REQUEST_TIMEOUT_ENV_VAR: &str = "ROTAS_REQUEST_TIMEOUT_MS";

/// Anything that went wrong between sending the query and holding a parsed
/// response. The handler does not distinguish between the variants.
#[derive(Debug, Error)]
pub enum RouteClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Sends a route query and resolves with the parsed response.
pub trait RouteTransport {
    fn fetch_routes(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<RouteResponse, RouteClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct RouteClientParams {
    pub endpoint_url: String,

    /// No timeout unless configured, the request waits for the transport
    pub timeout: Option<Duration>,
}

impl Default for RouteClientParams {
    fn default() -> Self {
        Self {
            endpoint_url: ROUTES_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl RouteClientParams {
    /// Reads `ROTAS_ENDPOINT` and `ROTAS_REQUEST_TIMEOUT_MS`, falling back
    /// to the defaults when a variable is unset.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let mut params = Self::default();

        if let Ok(endpoint_url) = std::env::var(ENDPOINT_ENV_VAR) {
            params.endpoint_url = endpoint_url;
        }

        if let Ok(timeout) = std::env::var(REQUEST_TIMEOUT_ENV_VAR) {
            let millis: u64 = timeout.parse().map_err(|_| {
                anyhow::anyhow!("{} must be a number of milliseconds", REQUEST_TIMEOUT_ENV_VAR)
            })?;
            params.timeout = Some(Duration::from_millis(millis));
        }

        Ok(params)
    }
}

pub struct HttpRouteClient {
    params: RouteClientParams,
    client: reqwest::Client,
}

impl HttpRouteClient {
    pub fn new(params: RouteClientParams) -> Result<Self, RouteClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            params,
            client: builder.build()?,
        })
    }
}

impl RouteTransport for HttpRouteClient {
    async fn fetch_routes(&self, query: &RouteQuery) -> Result<RouteResponse, RouteClientError> {
        let response = self
            .client
            .post(&self.params.endpoint_url)
            .json(query)
            .send()
            .await?;

        let status = response.status();
        debug!("RouteClient: {} answered {}", self.params.endpoint_url, status);

        // The body is rendered whatever the status, as long as it is JSON.
        if !status.is_success() {
            warn!(
                "RouteClient: non-success status {} from {}, rendering body anyway",
                status, self.params.endpoint_url
            );
        }

        let body = response.bytes().await?;
        let routes = RouteResponse::from_slice(&body)?;

        Ok(routes)
    }
}
