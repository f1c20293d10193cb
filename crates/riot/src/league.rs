//! Response types for `/lol/league/v4/*leagues/by-queue/{queue}`.

use lpwatch_core::types::Lp;
use serde::Deserialize;

/// One of the three apex lists, as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueList {
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub queue: Option<String>,
    pub entries: Vec<LeagueEntry>,
}

/// A single ranked player. Only `league_points` feeds cutoff computation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub league_points: Lp,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
}

/// Every apex player of one platform, merged across the three lists.
#[derive(Debug, Clone, Default)]
pub struct ApexLadder {
    pub entries: Vec<LeagueEntry>,
}

impl ApexLadder {
    pub fn from_lists(lists: impl IntoIterator<Item = LeagueList>) -> Self {
        let entries = lists.into_iter().flat_map(|l| l.entries).collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// LP of every player, in fetch order.
    pub fn league_points(&self) -> Vec<Lp> {
        self.entries.iter().map(|e| e.league_points).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHALLENGER_JSON: &str = r#"{
        "tier": "CHALLENGER",
        "leagueId": "a1b2",
        "queue": "RANKED_SOLO_5x5",
        "name": "Vayne's Duelists",
        "entries": [
            {"puuid": "p1", "leaguePoints": 1432, "rank": "I", "wins": 310, "losses": 250,
             "veteran": true, "inactive": false, "freshBlood": false, "hotStreak": false},
            {"puuid": "p2", "leaguePoints": 988, "rank": "I", "wins": 200, "losses": 170,
             "veteran": false, "inactive": false, "freshBlood": true, "hotStreak": true}
        ]
    }"#;

    #[test]
    fn parses_league_list_ignoring_unknown_fields() {
        let list: LeagueList = serde_json::from_str(CHALLENGER_JSON).unwrap();
        assert_eq!(list.tier.as_deref(), Some("CHALLENGER"));
        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.entries[0].league_points, 1432);
        assert_eq!(list.entries[1].wins, Some(200));
    }

    #[test]
    fn entry_needs_only_league_points() {
        let entry: LeagueEntry = serde_json::from_str(r#"{"leaguePoints": 42}"#).unwrap();
        assert_eq!(entry.league_points, 42);
        assert!(entry.puuid.is_none());
    }

    #[test]
    fn ladder_concatenates_lists_in_order() {
        let a: LeagueList = serde_json::from_str(CHALLENGER_JSON).unwrap();
        let b: LeagueList =
            serde_json::from_str(r#"{"entries": [{"leaguePoints": 700}]}"#).unwrap();
        let ladder = ApexLadder::from_lists([a, b]);
        assert_eq!(ladder.len(), 3);
        assert_eq!(ladder.league_points(), vec![1432, 988, 700]);
    }
}
