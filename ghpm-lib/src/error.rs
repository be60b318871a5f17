use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubClientError {
    #[error("could not resolve the authenticated user")]
    Auth(#[source] anyhow::Error),

    #[error("could not fetch page {page} of public repositories")]
    Fetch {
        page: u32,
        #[source]
        source: anyhow::Error,
    },

    #[error("could not serialize mutation payload")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
