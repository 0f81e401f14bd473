//! HTTP client for the backend REST API

use crate::{ClientConfig, ClientError, ClientResult, Session};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client for making requests to the backend
///
/// Cheap to clone; every clone shares the connection pool and the
/// session handle.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig, session: Session) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            session,
        }
    }

    /// The session this client reads tokens from
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach the bearer token when the session holds one
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        self.handle_response(self.send(request).await?).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        self.handle_response(self.send(request).await?).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        self.handle_response(self.send(request).await?).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        self.handle_response(self.send(request).await?).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.delete(self.url(path)));
        self.handle_response(self.send(request).await?).await
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<reqwest::Response> {
        request.send().await.map_err(|err| {
            tracing::error!(error = %err, "Unable to connect to server");
            ClientError::Http(err)
        })
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::UNAUTHORIZED => {
                    tracing::warn!("Unauthorized response, tearing down session");
                    self.session.clear();
                    Err(ClientError::Unauthorized)
                }
                StatusCode::FORBIDDEN => {
                    tracing::error!("Access forbidden");
                    Err(ClientError::Forbidden(text))
                }
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                StatusCode::SERVICE_UNAVAILABLE => {
                    tracing::error!("Server is temporarily unavailable");
                    Err(ClientError::Unavailable(text))
                }
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}
