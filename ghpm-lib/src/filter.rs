use crate::object_model::{Identity, RepositoryListing};
use crate::outcome::SkipReason;

pub const STARS_THRESHOLD: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivatizerConfig {
    pub stars_threshold: u32,
    pub skip_forks: bool,
}

impl Default for PrivatizerConfig {
    fn default() -> Self {
        Self {
            stars_threshold: STARS_THRESHOLD,
            skip_forks: true,
        }
    }
}

pub fn screen(
    repo: &RepositoryListing,
    identity: &Identity,
    config: &PrivatizerConfig,
) -> Option<SkipReason> {
    if repo.full_name == identity.special_repo_name() {
        return Some(SkipReason::SpecialRepo);
    }

    if repo.stargazers_count >= config.stars_threshold {
        return Some(SkipReason::Starred);
    }

    if config.skip_forks && repo.fork {
        return Some(SkipReason::Fork);
    }

    None
}
