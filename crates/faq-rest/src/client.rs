//! HTTP client for the list REST API.

use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use faq_core::error::{Error, InvalidInputError, ProtocolError, TransportError};
use faq_core::types::ListUrl;

use crate::endpoints::{IF_MATCH, ODATA_JSON, ODataErrorResponse, X_HTTP_METHOD};

pub(crate) fn map_reqwest(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// HTTP client bound to one list site.
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    site: ListUrl,
    token: Option<String>,
}

impl RestClient {
    /// Create a new client for the given site, optionally sending a bearer
    /// token with every request.
    pub fn new(site: ListUrl, token: Option<String>) -> Result<Self, Error> {
        if !site.is_network() {
            return Err(InvalidInputError::ListUrl {
                value: site.to_string(),
                reason: "REST lists need an http(s) URL".to_string(),
            }
            .into());
        }

        if let Some(ref t) = token
            && HeaderValue::from_str(&format!("Bearer {}", t)).is_err()
        {
            return Err(InvalidInputError::Other {
                message: "access token contains invalid characters".to_string(),
            }
            .into());
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("faq/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(map_reqwest)?;

        Ok(Self {
            client,
            site,
            token,
        })
    }

    /// Returns the site URL this client is configured for.
    pub fn site(&self) -> &ListUrl {
        &self.site
    }

    /// Returns true if `link` points at the same origin (scheme, host and
    /// port) as the configured site. Credentials are only sent there.
    pub fn is_same_origin(&self, link: &str) -> bool {
        match (Url::parse(link), Url::parse(self.site.as_str())) {
            (Ok(link), Ok(site)) => link.origin() == site.origin(),
            _ => false,
        }
    }

    /// Absolute URL for a path below `_api/`.
    pub fn api_url(&self, path: &str) -> String {
        self.site.api_url(path)
    }

    /// GET a JSON document.
    #[instrument(skip(self, query), fields(site = %self.site))]
    pub async fn get<Q, R>(&self, url: &str, query: &Q) -> Result<R, Error>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .query(query)
            .headers(self.headers())
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// POST a JSON body and decode the JSON answer.
    #[instrument(skip(self, body), fields(site = %self.site))]
    pub async fn post<B, R>(&self, url: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(url, "POST");

        let response = self
            .client
            .post(url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// POST with a tunnelled method (`MERGE`, `DELETE`) that answers with no
    /// content.
    #[instrument(skip(self, body), fields(site = %self.site))]
    pub async fn post_tunnelled<B>(
        &self,
        url: &str,
        method: &'static str,
        body: Option<&B>,
    ) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        debug!(url, method, "POST (tunnelled)");

        let mut headers = self.headers();
        headers.insert(X_HTTP_METHOD, HeaderValue::from_static(method));
        headers.insert(IF_MATCH, HeaderValue::from_static("*"));

        let mut request = self.client.post(url).headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(map_reqwest)?;

        let status = response.status();
        trace!(status = %status, "response");
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    /// Headers sent with every request.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ODATA_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(ODATA_JSON));
        if let Some(ref token) = self.token
            && let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token))
        {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    /// Handle a response, decoding the body or the error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            response.json::<R>().await.map_err(map_reqwest)
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    /// Parse an OData error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ODataErrorResponse>().await {
            Ok(body) => ProtocolError::new(
                status,
                body.error.code,
                body.error.message.and_then(|m| m.value),
            ),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("site", &self.site)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
