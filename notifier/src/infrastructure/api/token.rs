use std::path::PathBuf;

use anyhow::Context;
use domain_business::model::vo::TokenPair;
use tokio::sync::RwLock;

/// Holds the JWT pair and mirrors it to a JSON file when a path is set.
#[derive(Debug)]
pub struct TokenManager {
    path: Option<PathBuf>,
    inner: RwLock<Option<TokenPair>>,
}

impl TokenManager {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            inner: RwLock::new(None),
        }
    }

    /// Restore the tokens saved at `path`, if any.
    pub async fn load(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let tokens = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<TokenPair>(&bytes) {
                Ok(tokens) => Some(tokens),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable token file {}: {e}", path.display());
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        Ok(Self {
            path: Some(path),
            inner: RwLock::new(tokens),
        })
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner.read().await.as_ref().map(|t| t.access.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.inner.read().await.as_ref().map(|t| t.refresh.clone())
    }

    pub async fn is_logged_in(&self) -> bool {
        self.inner.read().await.is_some()
    }

    pub async fn save(&self, tokens: TokenPair) -> anyhow::Result<()> {
        let mut inner = self.inner.write().await;
        *inner = Some(tokens);
        self.persist(inner.as_ref()).await
    }

    /// Replace the access token after a refresh; the refresh token is kept.
    pub async fn update_access(&self, access: String) -> anyhow::Result<()> {
        let mut inner = self.inner.write().await;
        let Some(tokens) = inner.as_mut() else {
            anyhow::bail!("No refresh token to attach the new access token to");
        };
        tokens.access = access;
        self.persist(inner.as_ref()).await
    }

    pub async fn clear(&self) -> anyhow::Result<()> {
        let mut inner = self.inner.write().await;
        *inner = None;
        self.persist(None).await
    }

    async fn persist(&self, tokens: Option<&TokenPair>) -> anyhow::Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        match tokens {
            Some(tokens) => {
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(path, serde_json::to_vec(tokens)?)
                    .await
                    .with_context(|| format!("writing {}", path.display()))
            }
            None => match tokio::fs::remove_file(path).await {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                    Err(e).with_context(|| format!("removing {}", path.display()))
                }
                _ => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> TokenPair {
        TokenPair {
            access: "a1".to_string(),
            refresh: "r1".to_string(),
        }
    }

    #[tokio::test]
    async fn tokens_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("tokens.json");

        let manager = TokenManager::load(&path).await.unwrap();
        assert!(!manager.is_logged_in().await);
        manager.save(pair()).await.unwrap();
        manager.update_access("a2".to_string()).await.unwrap();

        let reloaded = TokenManager::load(&path).await.unwrap();
        assert_eq!(Some("a2".to_string()), reloaded.access_token().await);
        assert_eq!(Some("r1".to_string()), reloaded.refresh_token().await);

        reloaded.clear().await.unwrap();
        assert!(!path.exists());
        assert!(!TokenManager::load(&path).await.unwrap().is_logged_in().await);
    }

    #[tokio::test]
    async fn update_without_tokens_fails() {
        let manager = TokenManager::in_memory();
        assert!(manager.update_access("a".to_string()).await.is_err());
    }
}
