//! HTTP adapter for the Roster user API.

use crate::error::{Result, ServerClientError};
use crate::service::UserService;
use crate::types::{ClientConfig, ErrorBody};
use async_trait::async_trait;
use reqwest::{Client, Response};
use roster_core::types::{User, UserId, UserPayload};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the five user endpoints.
///
/// Every method performs exactly one request and hands back either the parsed
/// body or the failure as-is. There are no retries.
///
/// # Example
///
/// ```ignore
/// use roster_server_client::{ClientConfig, UserClient, UserService};
///
/// let client = UserClient::new(ClientConfig::new("http://localhost:3001/api"))?;
/// for user in client.get_users().await? {
///     println!("{} <{}>", user.name, user.email);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct UserClient {
    http: Client,
    base_url: String,
    base: Url,
}

impl UserClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| ServerClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            base: parsed,
        })
    }

    /// Get the API base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Append `segments` to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ServerClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl UserService for UserClient {
    async fn get_users(&self) -> Result<Vec<User>> {
        let url = self.endpoint(&["users"])?;
        debug!(url = %url, "Fetching users");

        let response = self.http.get(url).send().await.map_err(send_error)?;
        let users: Vec<User> = parse_json(response).await?;

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User> {
        let url = self.endpoint(&["user", id.as_str()])?;
        debug!(url = %url, "Fetching user");

        let response = self.http.get(url).send().await.map_err(send_error)?;
        parse_json(response).await
    }

    async fn create_user(&self, user: &UserPayload) -> Result<User> {
        let url = self.endpoint(&["add-user"])?;
        debug!(url = %url, "Creating user");

        let response = self
            .http
            .post(url)
            .json(user)
            .send()
            .await
            .map_err(send_error)?;
        parse_json(response).await
    }

    async fn update_user(&self, id: &UserId, user: &UserPayload) -> Result<User> {
        let url = self.endpoint(&["update-user", id.as_str()])?;
        debug!(url = %url, "Updating user");

        let response = self
            .http
            .put(url)
            .json(user)
            .send()
            .await
            .map_err(send_error)?;
        parse_json(response).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<()> {
        let url = self.endpoint(&["delete-user", id.as_str()])?;
        debug!(url = %url, "Deleting user");

        let response = self.http.delete(url).send().await.map_err(send_error)?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

fn send_error(e: reqwest::Error) -> ServerClientError {
    if e.is_connect() || e.is_timeout() {
        ServerClientError::ServerUnreachable(e.to_string())
    } else {
        ServerClientError::Request(e)
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ServerClientError::ParseError(e.to_string()))
}

/// Prefer the server's `{"error": ..}` message, fall back to the raw body.
async fn error_from_response(response: Response) -> ServerClientError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    ServerClientError::ServerError { status, message }
}
