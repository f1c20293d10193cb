//! REST client for the league-v4 apex endpoints.
//!
//! Wraps `GET /lol/league/v4/{list}/by-queue/RANKED_SOLO_5x5` for the three
//! apex lists using [`reqwest`]. The API key travels in the `X-Riot-Token`
//! header so it never appears in logged URLs.

use std::time::Duration;

use async_trait::async_trait;

use crate::league::{ApexLadder, LeagueList};

/// Ranked solo queue identifier.
const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// Header carrying the developer/production API key.
const TOKEN_HEADER: &str = "X-Riot-Token";

/// Platform routing values accepted by the league-v4 API.
pub const PLATFORMS: [&str; 16] = [
    "br1", "eun1", "euw1", "jp1", "kr", "la1", "la2", "me1", "na1", "oc1", "ru", "sg2", "tr1",
    "tw2", "vn2", "ph2",
];

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the Riot REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum RiotApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Riot API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The configured platform is not a known routing value.
    #[error("Unknown platform routing value: {0}")]
    UnknownPlatform(String),
}

// ---------------------------------------------------------------------------
// Apex lists
// ---------------------------------------------------------------------------

/// The three apex lists, in fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApexList {
    Challenger,
    Grandmaster,
    Master,
}

impl ApexList {
    pub const ALL: [ApexList; 3] = [ApexList::Challenger, ApexList::Grandmaster, ApexList::Master];

    fn path_segment(self) -> &'static str {
        match self {
            Self::Challenger => "challengerleagues",
            Self::Grandmaster => "grandmasterleagues",
            Self::Master => "masterleagues",
        }
    }
}

// ---------------------------------------------------------------------------
// Ladder source seam
// ---------------------------------------------------------------------------

/// Anything that can produce the merged apex ladder for one platform.
#[async_trait]
pub trait LadderSource: Send + Sync {
    async fn fetch_apex_ladder(&self) -> Result<ApexLadder, RiotApiError>;
}

// ---------------------------------------------------------------------------
// RiotApi
// ---------------------------------------------------------------------------

/// HTTP client for one Riot platform.
pub struct RiotApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RiotApi {
    /// Create a client for `platform` (e.g. `na1`) with a per-request timeout.
    pub fn new(platform: &str, api_key: String, timeout: Duration) -> Result<Self, RiotApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, platform_base_url(platform)?, api_key))
    }

    /// Create a client reusing an existing [`reqwest::Client`] against an
    /// explicit base URL.
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// URL of one apex list for the solo queue.
    pub fn list_url(&self, list: ApexList) -> String {
        format!(
            "{}/lol/league/v4/{}/by-queue/{SOLO_QUEUE}",
            self.base_url,
            list.path_segment()
        )
    }

    /// Fetch one apex list.
    pub async fn fetch_list(&self, list: ApexList) -> Result<LeagueList, RiotApiError> {
        let response = self
            .client
            .get(self.list_url(list))
            .header(TOKEN_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RiotApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let league: LeagueList = response.json().await?;
        tracing::debug!(list = ?list, entries = league.entries.len(), "Fetched apex list");
        Ok(league)
    }
}

#[async_trait]
impl LadderSource for RiotApi {
    /// Fetch the Challenger, Grandmaster and Master lists in order and merge
    /// their entries.
    async fn fetch_apex_ladder(&self) -> Result<ApexLadder, RiotApiError> {
        let mut lists = Vec::with_capacity(ApexList::ALL.len());
        for list in ApexList::ALL {
            lists.push(self.fetch_list(list).await?);
        }
        let ladder = ApexLadder::from_lists(lists);
        tracing::info!(players = ladder.len(), "Fetched apex ladder");
        Ok(ladder)
    }
}

/// Base URL for a platform routing value.
pub fn platform_base_url(platform: &str) -> Result<String, RiotApiError> {
    let platform = platform.trim().to_ascii_lowercase();
    if !PLATFORMS.contains(&platform.as_str()) {
        return Err(RiotApiError::UnknownPlatform(platform));
    }
    Ok(format!("https://{platform}.api.riotgames.com"))
}
