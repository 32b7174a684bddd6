use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Why live Copilot data could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No GitHub token was provided.
    #[error("no GitHub token available; set GITHUB_TOKEN or pass --github-token")]
    MissingCredential,

    /// A configured value cannot be sent as an HTTP header.
    #[error("invalid value for the '{name}' header")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: InvalidHeaderValue,
    },

    /// The HTTP client could not be constructed.
    #[error("could not create HTTP client")]
    Client(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("GitHub API error: HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The request never produced a response.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON.
    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Returns `true` for failures caused by local configuration rather than the remote API.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::InvalidHeader { .. } | Self::Client(_))
    }

    /// The HTTP status code, if the API answered with an error status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
