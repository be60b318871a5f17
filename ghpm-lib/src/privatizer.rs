use crate::filter::{screen, PrivatizerConfig};
use crate::host::RepositoryHost;
use crate::object_model::{Identity, RepositoryListing};
use crate::outcome::{MutationOutcome, SkipReason};
use crate::pagination::PageCursor;
use crate::result::GitHubClientResult;
use futures_util::stream::{FuturesUnordered, StreamExt};
use log::{info, warn};
use std::collections::HashSet;
use std::future::{pending, Future};

#[derive(Debug)]
pub struct RunReport {
    pub identity: Identity,
    pub pages_fetched: usize,
    pub outcomes: Vec<(String, MutationOutcome)>,
    pub cancelled: bool,
}

impl RunReport {
    fn new(identity: Identity) -> Self {
        Self {
            identity,
            pages_fetched: 0,
            outcomes: Vec::new(),
            cancelled: false,
        }
    }

    pub fn count<F>(&self, f: F) -> usize
    where
        F: Fn(&MutationOutcome) -> bool,
    {
        self.outcomes.iter().filter(|(_, o)| f(o)).count()
    }

    pub fn privatized(&self) -> usize {
        self.count(MutationOutcome::is_success)
    }

    pub fn skipped(&self) -> usize {
        self.count(MutationOutcome::is_skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| !o.is_success() && !o.is_skipped())
    }

    pub fn should_retry(&self) -> bool {
        self.outcomes.iter().any(|(_, o)| o.is_transient())
    }

    pub fn needs_web_interface(&self) -> bool {
        self.outcomes
            .iter()
            .any(|(_, o)| *o == MutationOutcome::NotImplemented)
    }
}

pub struct Privatizer<H> {
    host: H,
    config: PrivatizerConfig,
}

impl<H> Privatizer<H>
where
    H: RepositoryHost,
{
    pub fn new(host: H, config: PrivatizerConfig) -> Self {
        Self { host, config }
    }

    pub async fn run(&self) -> GitHubClientResult<RunReport> {
        self.run_until(pending()).await
    }

    /// Runs until the last page is processed or `cancel` resolves. Cancelling
    /// drops in-flight requests; finished ones stay in the report.
    pub async fn run_until<F>(&self, cancel: F) -> GitHubClientResult<RunReport>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(cancel);

        let identity = self.host.current_user().await?;
        info!("running as {}", identity.login);

        let mut report = RunReport::new(identity.clone());
        let mut cursor = PageCursor::new();
        let mut seen = HashSet::new();

        loop {
            let page = cursor.page();
            let repos = tokio::select! {
                biased;
                () = &mut cancel => return Ok(Self::cancelled(report)),
                result = self.host.public_repos_page(&identity.login, page) => result?,
            };
            report.pages_fetched += 1;
            let page_len = repos.len();

            let names = repos.iter().map(|r| r.full_name.as_str()).collect::<Vec<_>>();
            info!("public repositories on page {}: {:?}", page, names);

            let fresh = repos
                .into_iter()
                .filter(|r| seen.insert(r.full_name.clone()))
                .collect::<Vec<_>>();
            let fresh_count = fresh.len();

            let mut retained = 0;
            let mut candidates = Vec::with_capacity(fresh_count);
            for repo in fresh {
                match screen(&repo, &identity, &self.config) {
                    Some(reason) => {
                        let outcome = MutationOutcome::Skipped(reason);
                        self.log_outcome(&repo, &outcome);
                        retained += 1;
                        report.outcomes.push((repo.full_name, outcome));
                    }
                    None => candidates.push(repo),
                }
            }

            // Outcomes are recorded as they complete so a cancelled page keeps them.
            let mut in_flight = candidates
                .iter()
                .map(|repo| self.privatize(repo))
                .collect::<FuturesUnordered<_>>();
            loop {
                tokio::select! {
                    biased;
                    () = &mut cancel => return Ok(Self::cancelled(report)),
                    next = in_flight.next() => match next {
                        Some((full_name, outcome)) => {
                            if !outcome.is_success() {
                                retained += 1;
                            }
                            report.outcomes.push((full_name, outcome));
                        }
                        None => break,
                    },
                }
            }

            cursor.advance(fresh_count, retained);
            if PageCursor::is_last(page_len) {
                break;
            }
        }

        info!(
            "done: {} privatized, {} skipped, {} failed",
            report.privatized(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }

    async fn privatize(&self, repo: &RepositoryListing) -> (String, MutationOutcome) {
        let outcome = self.host.set_private(&repo.full_name).await;
        self.log_outcome(repo, &outcome);
        (repo.full_name.clone(), outcome)
    }

    fn log_outcome(&self, repo: &RepositoryListing, outcome: &MutationOutcome) {
        let full_name = &repo.full_name;
        match outcome {
            MutationOutcome::Success => info!("{full_name} switched to private [{outcome}]"),
            MutationOutcome::NotImplemented => warn!(
                "{full_name} was not switched to private [{outcome}]: not possible through the API, use the web interface"
            ),
            MutationOutcome::NotFound => warn!(
                "{full_name} was not switched to private [{outcome}]: check the name and the token's permissions"
            ),
            MutationOutcome::ServerError => warn!(
                "{full_name} was not switched to private [{outcome}]: GitHub is likely down, re-run later"
            ),
            MutationOutcome::TransportError(e) => {
                warn!("{full_name} was not switched to private [{outcome}]: {e}")
            }
            MutationOutcome::Skipped(SkipReason::SpecialRepo) => {
                info!("skipped {full_name} [{outcome}]: profile README repository")
            }
            MutationOutcome::Skipped(SkipReason::Starred) => info!(
                "skipped {full_name} [{outcome}]: {} stars, threshold is {}",
                repo.stargazers_count, self.config.stars_threshold
            ),
            MutationOutcome::Skipped(SkipReason::Fork) => {
                info!("skipped {full_name} [{outcome}]: fork")
            }
        }
    }

    fn cancelled(mut report: RunReport) -> RunReport {
        warn!("run cancelled, remaining repositories were not processed");
        report.cancelled = true;
        report
    }
}
