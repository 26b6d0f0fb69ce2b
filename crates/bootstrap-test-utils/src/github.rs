//! In-memory stand-in for the GitHub API.

use std::sync::Mutex;

use async_trait::async_trait;
use bootstrap_github::{
    Error, RemoteError, RepositoryClient, RepositoryOptions, RepositoryRecord, Result, StatusCode,
};

/// How the fake answers remote calls
#[derive(Debug, Clone)]
enum Behaviour {
    Succeed,
    Fail { status: StatusCode, message: String },
}

/// A [`RepositoryClient`] that never touches the network.
///
/// Created repositories are remembered and returned by
/// `list_repositories` in creation order, after any seeded records.
/// Every `create_repository` call is recorded, including failed ones.
#[derive(Debug)]
pub struct FakeRepositoryClient {
    behaviour: Behaviour,
    owner: String,
    repos: Mutex<Vec<RepositoryRecord>>,
    create_calls: Mutex<Vec<RepositoryOptions>>,
    list_calls: Mutex<usize>,
}

impl Default for FakeRepositoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRepositoryClient {
    /// A client where every call succeeds.
    pub fn new() -> Self {
        Self {
            behaviour: Behaviour::Succeed,
            owner: "octocat".to_string(),
            repos: Mutex::new(Vec::new()),
            create_calls: Mutex::new(Vec::new()),
            list_calls: Mutex::new(0),
        }
    }

    /// A client where every call fails with the given API status and message.
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            behaviour: Behaviour::Fail {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message: message.into(),
            },
            ..Self::new()
        }
    }

    /// Seed existing repositories, returned first by `list_repositories`.
    pub fn with_repositories(self, names: &[&str]) -> Self {
        {
            let mut repos = self.repos.lock().unwrap();
            for name in names {
                let record = self.record(name, false, repos.len() as u64 + 1);
                repos.push(record);
            }
        }
        self
    }

    /// Options passed to every `create_repository` call so far.
    pub fn create_calls(&self) -> Vec<RepositoryOptions> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Number of `list_repositories` calls so far.
    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    fn record(&self, name: &str, private: bool, id: u64) -> RepositoryRecord {
        RepositoryRecord {
            id,
            name: name.to_string(),
            full_name: format!("{}/{}", self.owner, name),
            html_url: format!("https://github.com/{}/{}", self.owner, name),
            clone_url: format!("https://github.com/{}/{}.git", self.owner, name),
            private,
        }
    }

    fn remote_error(&self) -> Option<RemoteError> {
        match &self.behaviour {
            Behaviour::Succeed => None,
            Behaviour::Fail { status, message } => Some(RemoteError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

#[async_trait]
impl RepositoryClient for FakeRepositoryClient {
    async fn create_repository(&self, options: &RepositoryOptions) -> Result<RepositoryRecord> {
        self.create_calls.lock().unwrap().push(options.clone());

        if let Some(source) = self.remote_error() {
            return Err(Error::CreateRepository { source });
        }

        let mut repos = self.repos.lock().unwrap();
        let record = self.record(options.name(), options.is_private(), repos.len() as u64 + 1);
        repos.push(record.clone());
        Ok(record)
    }

    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>> {
        *self.list_calls.lock().unwrap() += 1;

        if let Some(source) = self.remote_error() {
            return Err(Error::ListRepositories { source });
        }
        Ok(self.repos.lock().unwrap().clone())
    }
}
