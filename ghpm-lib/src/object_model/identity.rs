use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Identity {
    #[serde(rename = "login")]
    pub login: String,
}

impl Identity {
    pub fn new(login: &str) -> Self {
        Self {
            login: String::from(login),
        }
    }

    pub fn special_repo_name(&self) -> String {
        format!("{0}/{0}", self.login)
    }
}
