use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    SpecialRepo,
    Starred,
    Fork,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::SpecialRepo => "special-repo",
            Self::Starred => "starred",
            Self::Fork => "fork",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    Success,
    NotImplemented,
    NotFound,
    ServerError,
    TransportError(String),
    Skipped(SkipReason),
}

impl MutationOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            501 => Self::NotImplemented,
            404 => Self::NotFound,
            s if s >= 500 => Self::ServerError,
            _ => Self::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ServerError | Self::TransportError(_))
    }
}

impl Display for MutationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Success => f.write_str("Success"),
            Self::NotImplemented => f.write_str("NotImplemented"),
            Self::NotFound => f.write_str("NotFound"),
            Self::ServerError => f.write_str("ServerError"),
            Self::TransportError(_) => f.write_str("TransportError"),
            Self::Skipped(reason) => write!(f, "Skipped({reason})"),
        }
    }
}
