use crate::PdqError;
use monday::Client;
use monday::Mutation;
use monday::Payload;
use monday::Query;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A [`Client`] with typed get / create / ensure helpers.
///
/// The helpers live in one `impl SimpleClient` block per entity module.
#[derive(Clone, Debug)]
pub struct SimpleClient {
    client: Client,
}
impl SimpleClient {
    /// A client for the public endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_client(Client::new(token))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        query: Query,
    ) -> Result<Response<T>, PdqError> {
        self.send(Payload::queries([query])).await
    }

    pub(crate) async fn mutate<T: DeserializeOwned>(
        &self,
        mutation: Mutation,
    ) -> Result<Response<T>, PdqError> {
        self.send(Payload::mutations([mutation])).await
    }

    /// Send `payload` and decode the `data` member of the response.
    async fn send<T: DeserializeOwned>(
        &self,
        payload: Payload,
    ) -> Result<Response<T>, PdqError> {
        let body = self.client.exec(&payload).await?.text().await?;
        log::trace!("response: {body}");
        let envelope: Envelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(source) => return Err(PdqError::Decode { source, body }),
        };
        match envelope.data {
            Some(data) => Ok(Response { data, body }),
            None => Err(PdqError::Remote { body }),
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

/// The decoded `data` member of a response, with the raw body kept for error
/// reporting.
pub(crate) struct Response<T> {
    pub(crate) data: T,
    pub(crate) body: String,
}

/// Parse an id the remote API returned as a string.
pub(crate) fn parse_id(id: &str) -> Result<i64, PdqError> {
    id.parse().map_err(|_| PdqError::InvalidId { id: id.to_owned() })
}
