//! HTTP access to the Starling API.

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;

use crate::api::ApiError;

/// Base URL of the production Starling API
pub const STARLING_API: &str = "https://api.starlingbank.com/api/v2";

/// Something that can GET a path from the API and hand back the body.
pub trait Fetch {
    /// Fetch the body at `path`, relative to the API's base URL.
    /// The body is returned whatever the response status.
    fn fetch(&self, path: &str) -> Result<String, ApiError>;
}

/// Blocking client for the Starling API
#[derive(Debug)]
pub struct StarlingClient {
    http: Client,
    base_url: String,
    token: String,
}

impl StarlingClient {
    /// Build a client that authenticates every request with `token`, verbatim
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(StarlingClient::with_http_client(http, base_url, token))
    }

    /// Wrap an already configured HTTP client
    pub fn with_http_client(http: Client, base_url: &str, token: &str) -> Self {
        StarlingClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Fetch for StarlingClient {
    fn fetch(&self, path: &str) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let resp = match self.http.get(&url).header(AUTHORIZATION, &self.token).send() {
            Ok(r) => r,
            Err(source) => return Err(ApiError::Transport { url, source }),
        };

        let status = resp.status();
        if !status.is_success() {
            warn!("GET {} returned status {}", url, status);
        }

        match resp.text() {
            Ok(body) => Ok(body),
            Err(source) => Err(ApiError::ResponseRead { url, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;

    /// Client that ignores any proxy set in the environment
    fn local_client(base_url: &str, token: &str) -> StarlingClient {
        let http = Client::builder().no_proxy().build().unwrap();

        StarlingClient::with_http_client(http, base_url, token)
    }

    /// Read an HTTP request head from the stream
    fn read_request(stream: &mut TcpStream) -> String {
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        String::from_utf8_lossy(&request).to_string()
    }

    /// Serve a single canned response, returning the base URL and a handle
    /// yielding the request that was received
    fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        serve_with_length(status, body, body.len())
    }

    /// Serve a single response announcing `content_length` bytes of body,
    /// then close the connection
    fn serve_with_length(
        status: &'static str,
        body: &'static str,
        content_length: usize,
    ) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                content_length,
                body
            )
            .unwrap();

            request
        });

        (format!("http://{}/api/v2", addr), handle)
    }

    #[test]
    fn token_sent_verbatim() {
        let (base_url, handle) = serve_once("200 OK", r#"{"accounts": []}"#);
        let client = local_client(&base_url, "Bearer abc123");

        let observed = client.fetch("/accounts").unwrap();
        let request = handle.join().unwrap().to_lowercase();

        assert_eq!(r#"{"accounts": []}"#, observed);
        assert!(request.starts_with("get /api/v2/accounts http/1.1"));
        assert!(request.contains("authorization: bearer abc123\r\n"));
    }

    #[test]
    fn error_status_still_returns_body() {
        let body = r#"{"error":"invalid_token","error_description":"Access token has expired"}"#;
        let (base_url, handle) = serve_once("403 Forbidden", body);
        let client = local_client(&base_url, "Bearer expired");

        let observed = client.fetch("/accounts").unwrap();
        handle.join().unwrap();

        assert_eq!(body, observed);
    }

    #[test]
    fn truncated_body() {
        let (base_url, handle) = serve_with_length("200 OK", r#"{"accounts": ["#, 512);
        let client = local_client(&base_url, "Bearer abc123");

        let observed = client.fetch("/accounts");
        handle.join().unwrap();

        assert!(matches!(observed, Err(ApiError::ResponseRead { .. })));
    }

    #[test]
    fn trailing_slash_in_base_url() {
        let client = StarlingClient::new("http://localhost/api/v2/", "").unwrap();

        assert_eq!("http://localhost/api/v2", client.base_url());
    }

    #[test]
    fn connection_refused() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let client = local_client(&format!("http://{}", addr), "Bearer abc123");

        let observed = client.fetch("/accounts");

        assert!(matches!(observed, Err(ApiError::Transport { .. })));
    }
}
