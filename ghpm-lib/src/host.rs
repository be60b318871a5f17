use crate::object_model::{Identity, RepositoryListing};
use crate::outcome::MutationOutcome;
use crate::result::GitHubClientResult;
use async_trait::async_trait;

#[async_trait]
pub trait RepositoryHost: Sync {
    async fn current_user(&self) -> GitHubClientResult<Identity>;

    async fn public_repos_page(
        &self,
        login: &str,
        page: u32,
    ) -> GitHubClientResult<Vec<RepositoryListing>>;

    async fn set_private(&self, full_name: &str) -> MutationOutcome;
}
