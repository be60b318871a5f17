use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RepositoryListing {
    #[serde(rename = "full_name")]
    pub full_name: String,

    #[serde(rename = "stargazers_count")]
    pub stargazers_count: u32,

    #[serde(rename = "fork", default)]
    pub fork: bool,
}
