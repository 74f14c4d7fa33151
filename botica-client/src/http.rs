//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::ErrorBody;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the remote pharmacy API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.apply_auth(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.apply_auth(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body, discarding the response body
    pub async fn patch_unit<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let request = self.apply_auth(self.client.patch(self.url(path)).json(body));
        let response = request.send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Make a POST request with a multipart form
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let request = self.apply_auth(self.client.post(self.url(path)).multipart(form));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Direct PUT of raw bytes to an absolute (presigned) URL
    ///
    /// No auth header: the signature in the URL is the authorization.
    pub async fn put_raw(&self, url: &str, bytes: Vec<u8>, content_type: &str) -> ClientResult<()> {
        let response = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Map a non-2xx response onto a `ClientError`, then parse the body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    /// Status check shared by all verbs
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(Self::error_for(status, &text))
    }

    /// Translate a status + body into the error the UI reports
    fn error_for(status: StatusCode, body: &str) -> ClientError {
        let parsed = ErrorBody::parse(body);
        let message = parsed.display_message(body).to_string();

        if let Some(procesados) = parsed.procesados {
            return ClientError::PartialFailure {
                procesados,
                message,
            };
        }

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ => ClientError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// One-shot HTTP server: accepts a single connection and answers
    /// with the canned status/body.
    async fn respond_once(status_line: &'static str, body: &'static str) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        addr
    }

    fn client_for(addr: std::net::SocketAddr) -> HttpClient {
        ClientConfig::new(format!("http://{addr}"))
            .with_timeout(5)
            .build_http_client()
    }

    #[tokio::test]
    async fn success_parses_json_body() {
        let addr = respond_once("200 OK", r#"{"saldo":1250.5}"#).await;
        let value: serde_json::Value = client_for(addr).get("/cuentas-por-pagar/c1").await.unwrap();
        assert_eq!(value["saldo"], 1250.5);
    }

    #[tokio::test]
    async fn unauthorized_maps_to_session_expiry() {
        let addr = respond_once("401 Unauthorized", r#"{"message":"sesión expirada"}"#).await;
        let err = client_for(addr)
            .get::<serde_json::Value>("/cuadres/f1")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[tokio::test]
    async fn validation_carries_server_message() {
        let addr = respond_once("400 Bad Request", r#"{"message":"tasa invalida"}"#).await;
        let err = client_for(addr)
            .get::<serde_json::Value>("/cuadres/f1")
            .await
            .unwrap_err();
        match err {
            ClientError::Validation(msg) => assert_eq!(msg, "tasa invalida"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn partial_batch_failure_reports_count() {
        let addr = respond_once(
            "500 Internal Server Error",
            r#"{"message":"fallo en el item 8","procesados":7}"#,
        )
        .await;
        let err = client_for(addr)
            .get::<serde_json::Value>("/pagoscpp/masivo")
            .await
            .unwrap_err();
        match err {
            ClientError::PartialFailure { procesados, .. } => assert_eq!(procesados, 7),
            other => panic!("expected PartialFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_server_surfaces_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            // Hold the connection open past the client timeout
            tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        });

        let client = ClientConfig::new(format!("http://{addr}"))
            .with_timeout(1)
            .build_http_client();
        let err = client.get::<serde_json::Value>("/cuadres/f1").await.unwrap_err();
        assert!(matches!(err, ClientError::Timeout));
    }

    #[test]
    fn url_joins_without_duplicate_slashes() {
        let client = ClientConfig::new("http://api.local/").build_http_client();
        assert_eq!(client.url("/cuadres/f1"), "http://api.local/cuadres/f1");
        assert_eq!(client.url("cuadres/f1"), "http://api.local/cuadres/f1");
    }
}
