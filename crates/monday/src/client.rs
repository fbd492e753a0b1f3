use crate::ast::AstNode;
use crate::operation::Payload;
use crate::ClientError;
use tokio_util::sync::CancellationToken;
use url::Url;

/// The public GraphQL endpoint of the remote API.
pub const DEFAULT_ENDPOINT: &str = "https://api.monday.com/v2/";

/// Environment variable holding the API token read by [`Client::from_env`].
pub const TOKEN_VAR: &str = "MONDAY_API_TOKEN";

/// Environment variable overriding the endpoint in [`Client::from_env`].
pub const ENDPOINT_VAR: &str = "MONDAY_API_URL";

/// Sends [`Payload`]s to the remote API.
///
/// Each call is a single POST carrying the rendered payload as the `query`
/// form field and the token as the raw `Authorization` header. The response
/// is handed back untouched: decoding it (and noticing a remote error
/// envelope) is up to the caller.
#[derive(Clone, Debug)]
pub struct Client {
    endpoint: Url,
    http: reqwest::Client,
    token: String,
}
impl Client {
    /// A client for the public endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: default_endpoint(),
            http: reqwest::Client::new(),
            token: token.into(),
        }
    }

    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            endpoint: None,
            http: None,
            token: token.into(),
        }
    }

    /// A client configured from `MONDAY_API_TOKEN` and, when set,
    /// `MONDAY_API_URL`.
    pub fn from_env() -> Result<Self, ClientError> {
        let token = std::env::var(TOKEN_VAR)
            .map_err(|_| ClientError::MissingToken { var: TOKEN_VAR })?;
        let mut builder = Self::builder(token);
        if let Ok(endpoint) = std::env::var(ENDPOINT_VAR) {
            builder = builder.endpoint(&endpoint);
        }
        builder.build()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send `payload` and return the raw response.
    pub async fn exec(
        &self,
        payload: &Payload,
    ) -> Result<reqwest::Response, ClientError> {
        let query = payload.to_wire();
        log::debug!("POST {} ({} bytes)", self.endpoint, query.len());
        log::trace!("query={query}");

        let response = self.http
            .post(self.endpoint.clone())
            .header(reqwest::header::AUTHORIZATION, &self.token)
            .form(&[("query", query.as_str())])
            .send()
            .await?;
        log::debug!("{} responded {}", self.endpoint, response.status());
        Ok(response)
    }

    /// Like [`Client::exec`], giving up as soon as `cancel` fires.
    ///
    /// Nothing is sent when `cancel` has already fired.
    pub async fn exec_with_cancellation(
        &self,
        payload: &Payload,
        cancel: &CancellationToken,
    ) -> Result<reqwest::Response, ClientError> {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        tokio::select! {
            _ = cancel.cancelled() => {
                log::debug!("request to {} cancelled", self.endpoint);
                Err(ClientError::Cancelled)
            },
            response = self.exec(payload) => response,
        }
    }
}

/// Builder for a [`Client`] with a custom endpoint or HTTP client.
#[derive(Debug)]
pub struct ClientBuilder {
    endpoint: Option<String>,
    http: Option<reqwest::Client>,
    token: String,
}
impl ClientBuilder {
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_owned());
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, ...).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Client, ClientError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => Url::parse(&endpoint).map_err(|source| {
                ClientError::InvalidEndpoint { endpoint, source }
            })?,
            None => default_endpoint(),
        };
        Ok(Client {
            endpoint,
            http: self.http.unwrap_or_default(),
            token: self.token,
        })
    }
}

fn default_endpoint() -> Url {
    match Url::parse(DEFAULT_ENDPOINT) {
        Ok(url) => url,
        Err(err) => unreachable!("`{DEFAULT_ENDPOINT}` is a valid url: {err}"),
    }
}
