/// Failures talking to the chat-completion provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("No API key configured: set the API_KEY environment variable (authentication required)")]
    MissingApiKey,
    #[error("Failed to connect to API endpoint: {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body from {url} (status {status})")]
    ResponseBody {
        url: String,
        status: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("API request failed with status {status}: {message}")]
    RequestFailed { status: String, message: String },
    #[error("Invalid response from API: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Returns `true` for failures caused by a missing or rejected credential.
    pub fn is_auth(&self) -> bool {
        match self {
            Self::MissingApiKey => true,
            Self::RequestFailed { status, .. } => {
                status.starts_with("401") || status.starts_with("403")
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_auth() {
        assert!(ProviderError::MissingApiKey.is_auth());
        assert!(
            ProviderError::RequestFailed {
                status: "401 Unauthorized".to_string(),
                message: "invalid key".to_string(),
            }
            .is_auth()
        );
        assert!(
            !ProviderError::RequestFailed {
                status: "500 Internal Server Error".to_string(),
                message: "boom".to_string(),
            }
            .is_auth()
        );
        assert!(!ProviderError::InvalidResponse("no choices".to_string()).is_auth());
    }

    #[test]
    fn test_request_failed_message_carries_provider_text() {
        let err = ProviderError::RequestFailed {
            status: "429 Too Many Requests".to_string(),
            message: "Rate limit exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed with status 429 Too Many Requests: Rate limit exceeded"
        );
    }
}
