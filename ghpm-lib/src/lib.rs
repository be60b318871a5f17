mod error;
mod filter;
mod github_client;
mod host;
mod logging_middleware;
mod object_model;
mod outcome;
mod pagination;
mod privatizer;
mod result;

pub use self::error::GitHubClientError;
pub use self::filter::{screen, PrivatizerConfig, STARS_THRESHOLD};
pub use self::github_client::{GitHubClient, DEFAULT_API_URL};
pub use self::host::RepositoryHost;
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{Identity, MutationPayload, RepositoryListing};
pub use self::outcome::{MutationOutcome, SkipReason};
pub use self::pagination::{PageCursor, PAGE_SIZE};
pub use self::privatizer::{Privatizer, RunReport};
pub use self::result::GitHubClientResult;
