//! Repository client
//!
//! Two operations against the authenticated user's account: create a
//! repository and list repositories. Neither retries nor applies its own
//! timeout.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{Error, RemoteError, RepositoryOptions, RepositoryRecord, Result, Token};

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";

/// Access to the remote hosting service.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Create a repository owned by the authenticated user.
    async fn create_repository(&self, options: &RepositoryOptions) -> Result<RepositoryRecord>;

    /// List the authenticated user's repositories in the order GitHub
    /// returns them.
    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>>;
}

/// Connection settings for [`GithubClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the REST API, without a trailing slash
    pub api_url: String,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("project-bootstrapper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// [`RepositoryClient`] backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(token: &Token, options: ClientOptions) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| Error::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .user_agent(options.user_agent)
            .default_headers(headers)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            http,
            api_url: options.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

#[async_trait]
impl RepositoryClient for GithubClient {
    async fn create_repository(&self, options: &RepositoryOptions) -> Result<RepositoryRecord> {
        tracing::info!(name = options.name(), private = options.is_private(), "Creating GitHub repository");

        let request = self.http.post(self.endpoint("/user/repos")).json(options);
        send_json(request)
            .await
            .map_err(|source| Error::CreateRepository { source })
    }

    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>> {
        tracing::info!("Listing GitHub repositories");

        let request = self.http.get(self.endpoint("/user/repos?per_page=100"));
        send_json(request)
            .await
            .map_err(|source| Error::ListRepositories { source })
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> std::result::Result<T, RemoteError> {
    let response = request.send().await.map_err(RemoteError::Transport)?;
    let response = check_status(response).await?;
    response.json().await.map_err(RemoteError::Decode)
}

/// Error payload returned by the GitHub API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    field: Option<String>,
}

async fn check_status(response: Response) -> std::result::Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = api_error_message(&body);
    tracing::warn!(status = status.as_u16(), %message, "GitHub API request failed");
    Err(RemoteError::Api { status, message })
}

/// Render GitHub's error body as one line, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) else {
        let trimmed = body.trim();
        return if trimmed.is_empty() {
            "no response body".to_string()
        } else {
            trimmed.to_string()
        };
    };

    let details: Vec<String> = parsed
        .errors
        .iter()
        .filter_map(|detail| match (&detail.message, &detail.field, &detail.code) {
            (Some(message), _, _) => Some(message.clone()),
            (None, Some(field), Some(code)) => Some(format!("{} {}", field, code)),
            _ => None,
        })
        .collect();

    if details.is_empty() {
        parsed.message
    } else {
        format!("{} ({})", parsed.message, details.join("; "))
    }
}
