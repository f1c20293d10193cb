//! Client for the Riot league-v4 apex ladder endpoints.
//!
//! Fetches the Challenger, Grandmaster and Master lists for the ranked solo
//! queue of one platform and exposes them as a single [`ApexLadder`].

pub mod api;
pub mod league;

pub use api::{LadderSource, RiotApi, RiotApiError};
pub use league::{ApexLadder, LeagueEntry, LeagueList};
