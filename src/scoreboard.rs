//! End-of-match standings
//!
//! Snapshot of every player's score and lives, plus the winner.

use serde::{Deserialize, Serialize};

use crate::sim::state::Player;

/// Bonus points per remaining life when ranking 3 and 4 player matches
pub const LIFE_BONUS: u32 = 10;

/// One player's line on the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub id: u8,
    pub name: String,
    pub score: u32,
    pub life: i32,
}

impl StandingEntry {
    fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Score plus the bonus for lives left
    pub fn rating(&self) -> u32 {
        let lives = u32::try_from(self.life).unwrap_or(0);
        self.score + LIFE_BONUS * lives
    }
}

/// Match standings, entries in id order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Standings {
    pub entries: Vec<StandingEntry>,
}

impl Standings {
    pub fn from_players(players: &[Player]) -> Self {
        let mut entries: Vec<_> = players
            .iter()
            .map(|p| StandingEntry {
                id: p.id,
                name: p.name.clone(),
                score: p.score,
                life: p.life,
            })
            .collect();
        entries.sort_by_key(|e| e.id);
        Self { entries }
    }

    /// Winner of the match.
    ///
    /// Head-to-head, player 1 wins unless out of lives. With three or four
    /// players the best-rated survivor wins; player 1 keeps the title
    /// unless beaten.
    pub fn winner(&self) -> Option<&StandingEntry> {
        let first = self.entries.first()?;
        if self.entries.len() < 3 {
            return if first.is_alive() {
                Some(first)
            } else {
                self.entries.get(1).or(Some(first))
            };
        }

        let mut best = first;
        for entry in &self.entries[1..] {
            if entry.is_alive() && entry.rating() > best.rating() {
                best = entry;
            }
        }
        Some(best)
    }

    /// Scoreboard lines: dot-padded name, right-aligned score
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| format!("{:.<16}{:>6}", e.name, e.score))
            .collect()
    }
}
