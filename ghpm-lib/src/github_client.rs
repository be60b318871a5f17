use crate::error::GitHubClientError;
use crate::host::RepositoryHost;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::{Identity, MutationPayload, RepositoryListing};
use crate::outcome::MutationOutcome;
use crate::pagination::PAGE_SIZE;
use crate::result::GitHubClientResult;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::Level;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, IntoUrl, Method, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "https://api.github.com/";

pub struct GitHubClient {
    url: Url,
    token: String,
    client: ClientWithMiddleware,
    payload: Vec<u8>,
}

impl GitHubClient {
    pub fn new<U>(url: U, token: &str) -> GitHubClientResult<Self>
    where
        U: IntoUrl,
    {
        let mut url = url
            .into_url()
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;

        // Endpoints are joined relative to the base, which needs a trailing slash
        // to keep prefixes such as `/api/v3`.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let client = ClientBuilder::new(Client::new())
            .with(LoggingMiddleware::new(Level::Debug))
            .build();

        Ok(Self {
            url,
            token: String::from(token),
            client,
            payload: MutationPayload::PRIVATE.to_bytes()?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.url.join(path)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(USER_AGENT, "ghpm")
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .bearer_auth(&self.token)
    }

    async fn get_json<T>(&self, url: Url, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::GET, url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn current_user(&self) -> GitHubClientResult<Identity> {
        let url = self.endpoint("user").map_err(GitHubClientError::Auth)?;
        self.get_json::<Identity>(url, &[])
            .await
            .map_err(GitHubClientError::Auth)
    }

    async fn public_repos_page(
        &self,
        login: &str,
        page: u32,
    ) -> GitHubClientResult<Vec<RepositoryListing>> {
        let fetch = async {
            let url = self.endpoint(&format!("users/{login}/repos"))?;
            self.get_json::<Vec<RepositoryListing>>(
                url,
                &[
                    ("visibility", String::from("public")),
                    ("per_page", PAGE_SIZE.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await
        };

        fetch
            .await
            .map_err(|source| GitHubClientError::Fetch { page, source })
    }

    async fn set_private(&self, full_name: &str) -> MutationOutcome {
        let url = match self.endpoint(&format!("repos/{full_name}")) {
            Ok(url) => url,
            Err(e) => return MutationOutcome::TransportError(e.to_string()),
        };

        match self
            .request(Method::PATCH, url)
            .header(CONTENT_TYPE, "application/json")
            .body(self.payload.clone())
            .send()
            .await
        {
            Ok(response) => MutationOutcome::from_status(response.status().as_u16()),
            Err(e) => MutationOutcome::TransportError(e.to_string()),
        }
    }
}
