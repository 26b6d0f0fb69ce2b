//! GitHub token resolution
//!
//! The token comes from the `GITHUB_TOKEN` environment variable, falling
//! back to the contents of a token file. Resolution happens once at
//! startup.

use std::path::Path;

use crate::{Error, Result};

/// Environment variable holding the access token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// A GitHub access token. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token, trimming surrounding whitespace.
    ///
    /// Returns `None` for an empty token.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Resolve the token from the environment, then from `token_file`.
    pub fn resolve(token_file: Option<&Path>) -> Result<Self> {
        Self::resolve_from(std::env::var(TOKEN_ENV_VAR).ok(), token_file)
    }

    /// Resolve from an explicit environment value, then from `token_file`.
    ///
    /// A token file that does not exist counts as "no token"; one that
    /// exists but cannot be read is an error.
    pub fn resolve_from(env_value: Option<String>, token_file: Option<&Path>) -> Result<Self> {
        if let Some(token) = env_value.and_then(Self::new) {
            tracing::debug!(source = TOKEN_ENV_VAR, "Using GitHub token from environment");
            return Ok(token);
        }

        if let Some(path) = token_file
            && path.exists()
        {
            let content = std::fs::read_to_string(path).map_err(|source| Error::TokenFile {
                path: path.to_path_buf(),
                source,
            })?;
            if let Some(token) = Self::new(content) {
                tracing::debug!(path = %path.display(), "Using GitHub token from file");
                return Ok(token);
            }
        }

        Err(Error::MissingToken { var: TOKEN_ENV_VAR })
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn environment_wins_over_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("token");
        fs::write(&file, "from-file").unwrap();

        let token = Token::resolve_from(Some("from-env".into()), Some(&file)).unwrap();

        assert_eq!(token.expose(), "from-env");
    }

    #[test]
    fn falls_back_to_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("token");
        fs::write(&file, "  ghp_file_token\n").unwrap();

        let token = Token::resolve_from(None, Some(&file)).unwrap();

        assert_eq!(token.expose(), "ghp_file_token");
    }

    #[test]
    fn blank_environment_value_falls_back_to_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("token");
        fs::write(&file, "ghp_file_token").unwrap();

        let token = Token::resolve_from(Some("   ".into()), Some(&file)).unwrap();

        assert_eq!(token.expose(), "ghp_file_token");
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = Token::resolve_from(None, Some(&temp.path().join("absent"))).unwrap_err();
        assert!(matches!(err, Error::MissingToken { .. }));
        assert!(err.to_string().contains(TOKEN_ENV_VAR));
    }

    #[test]
    fn empty_file_is_missing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("token");
        fs::write(&file, "\n").unwrap();

        assert!(matches!(
            Token::resolve_from(None, Some(&file)),
            Err(Error::MissingToken { .. })
        ));
    }

    #[test]
    fn debug_hides_token() {
        let token = Token::new("ghp_secret").unwrap();
        assert_eq!(format!("{:?}", token), "Token(***)");
    }
}
