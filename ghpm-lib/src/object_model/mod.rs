mod identity;
mod payload;
mod repo;

pub use self::identity::Identity;
pub use self::payload::MutationPayload;
pub use self::repo::RepositoryListing;
