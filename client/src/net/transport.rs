//! HTTP transport seam for the auth client.
//!
//! The browser build posts through `gloo-net`. Tests substitute a recording
//! fake, so everything above this trait runs natively.

pub const AUTHORIZATION: &str = "Authorization";

/// A JSON `POST` about to be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub bearer: Option<String>,
    pub body: serde_json::Value,
}

impl ApiRequest {
    /// Value of the `Authorization` header, if the request carries a token.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_deref().map(bearer_value)
    }
}

pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Status and raw body of a received response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` as a JSON `POST` and collect the response.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure when no response was received
    /// (network error, CORS rejection, unreadable body).
    async fn post_json(&self, request: ApiRequest) -> Result<ApiResponse, String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn post_json(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        (**self).post_json(request).await
    }
}

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
impl Transport for FetchTransport {
    async fn post_json(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        let mut builder = gloo_net::http::Request::post(&request.url);
        if let Some(value) = request.authorization() {
            builder = builder.header(AUTHORIZATION, &value);
        }
        let resp = builder
            .json(&request.body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        Ok(ApiResponse { status, body })
    }
}
