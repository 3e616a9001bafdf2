pub type ApiResult<T> = Result<T, ApiException>;
pub type ServiceResult<T> = Result<T, ServiceException>;

/// Failure talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiException {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Session expired, a new login is required.")]
    Unauthorized,

    #[error("The backend answered with an empty body.")]
    EmptyBody,

    #[error("Unable to decode the backend response: {0}")]
    Decode(String),

    #[error("Api internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for ApiException {
    fn from(e: anyhow::Error) -> Self {
        ApiException::InternalError { source: e }
    }
}

impl ApiException {
    /// Rewrap into a message the user can read, prefixed by `context`
    /// (e.g. "Erreur lors du chargement des commandes").
    pub fn into_service(self, context: &str) -> ServiceException {
        let message = match &self {
            ApiException::Unauthorized => "Session expirée, veuillez vous reconnecter".to_string(),
            ApiException::Status { code, message } if message.is_empty() => {
                format!("{context} (HTTP {code})")
            }
            ApiException::Status { code, message } => format!("{context}: {message} (HTTP {code})"),
            ApiException::Transport(detail) => format!("{context}: erreur réseau ({detail})"),
            ApiException::EmptyBody => format!("{context}: réponse vide du serveur"),
            ApiException::Decode(_) => format!("{context}: réponse du serveur invalide"),
            ApiException::InternalError { source } => format!("{context}: {source}"),
        };
        ServiceException::Message {
            message,
            source: self,
        }
    }
}

/// Failure surfaced by the business services, already phrased for display.
#[derive(Debug, thiserror::Error)]
pub enum ServiceException {
    #[error("{message}")]
    Message {
        message: String,
        #[source]
        source: ApiException,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrap_status_error() {
        let e = ApiException::Status {
            code: 500,
            message: "boom".to_string(),
        }
        .into_service("Erreur lors du chargement des commandes");
        assert_eq!(
            "Erreur lors du chargement des commandes: boom (HTTP 500)",
            e.to_string()
        );
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn rewrap_unauthorized() {
        let e = ApiException::Unauthorized.into_service("Erreur lors du chargement du stock");
        assert_eq!("Session expirée, veuillez vous reconnecter", e.to_string());
    }
}
