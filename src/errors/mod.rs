use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// External resource a request was made for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Bootstrap,
    Entry(u64),
    Picks { manager_id: u64, gameweek: u32 },
    Fixtures,
    Photo(u64),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Bootstrap => write!(f, "bootstrap data"),
            Resource::Entry(id) => write!(f, "team {}", id),
            Resource::Picks { manager_id, gameweek } => {
                write!(f, "team picks for team {} in GW{}", manager_id, gameweek)
            }
            Resource::Fixtures => write!(f, "fixtures"),
            Resource::Photo(code) => write!(f, "photo {}", code),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to fetch {resource}: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to fetch {resource}: provider returned {status}")]
    Status { resource: Resource, status: StatusCode },
    #[error("Failed to decode {resource}: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to fetch current gameweek: bootstrap lists no gameweeks")]
    NoGameweeks,
}
