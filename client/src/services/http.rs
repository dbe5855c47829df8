//! # HTTP Transport
//!
//! reqwest-backed [`HttpTransport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::error::{AppError, Result};
use crate::core::service::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// HTTP transport backed by a pooled `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accept one connection, capture the request head and answer with `reply`.
    async fn serve_once(reply: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            while !received.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
            }
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&received).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_send_returns_status_and_body() {
        let (base, server) = serve_once(
            "HTTP/1.1 201 Created\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]",
        )
        .await;

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let request = HttpRequest::get(format!("{}/wallets", base))
            .with_header("access_token", "T")
            .with_query("page", "1");

        let response = transport.send(request).await.unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.body, b"[]".to_vec());

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /wallets?page=1 HTTP/1.1"));
        assert!(head.to_ascii_lowercase().contains("access_token: t"));
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_failure() {
        let (base, _server) = serve_once(
            "HTTP/1.1 401 Unauthorized\r\nContent-Length: 23\r\nConnection: close\r\n\r\n{\"message\":\"bad token\"}",
        )
        .await;

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let response = transport
            .send(HttpRequest::get(format!("{}/users", base)))
            .await
            .unwrap();

        assert_eq!(response.status, 401);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let addr = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap();

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let result = transport
            .send(HttpRequest::get(format!("http://{}/categories", addr)))
            .await;

        assert!(matches!(result, Err(AppError::Transport(_))));
    }
}
