use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MutationPayload {
    #[serde(rename = "private")]
    private: bool,
}

impl MutationPayload {
    pub const PRIVATE: Self = Self { private: true };

    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
