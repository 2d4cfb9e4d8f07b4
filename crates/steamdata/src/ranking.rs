//! Ordering of owned games by playtime or recency.

use std::cmp::Reverse;
use std::str::FromStr;

use crate::types::OwnedGame;

/// Field to rank owned games by, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    TotalPlaytime,
    LastPlayed,
}

impl FromStr for RankBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total_playtime" | "playtime" => Ok(Self::TotalPlaytime),
            "last_played" | "lastplayed" => Ok(Self::LastPlayed),
            other => Err(format!("unknown ranking criterion: {other}")),
        }
    }
}

/// Sorts `games` descending by `by` and keeps the first `limit`.
///
/// `None` leaves the order untouched. A `limit` of 0 (or one not smaller
/// than the list) keeps everything.
pub fn rank(mut games: Vec<OwnedGame>, by: Option<RankBy>, limit: usize) -> Vec<OwnedGame> {
    match by {
        Some(RankBy::TotalPlaytime) => games.sort_by_key(|g| Reverse(g.total_playtime_minutes)),
        Some(RankBy::LastPlayed) => games.sort_by_key(|g| Reverse(g.last_played_timestamp)),
        None => {}
    }

    if limit > 0 && limit < games.len() {
        games.truncate(limit);
    }
    games
}

/// Like [`rank`], with the criterion given by name.
///
/// Unrecognized names pass the list through unsorted.
pub fn rank_by_name(games: Vec<OwnedGame>, criterion: &str, limit: usize) -> Vec<OwnedGame> {
    rank(games, criterion.parse().ok(), limit)
}
