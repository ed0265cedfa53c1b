//! The recognized-moves table for Roshambo.
//!
//! A [`MoveTable`] maps each move identifier to the move(s) it defeats.
//! The protocol engine uses it for exactly one thing: deciding whether a
//! participant's submission names a real move. Comparing two picks to find
//! a winner is the embedding application's business, not this crate's.
//!
//! The table is plain data handed to the engine at construction, so a game
//! with a different move set (the five-move lizard/Spock variant, say)
//! needs a different table, not different code.

use std::collections::HashMap;

/// Errors raised while building a move table.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// A defeat list references a move the table doesn't define.
    #[error("move {0} defeats unknown move {1}")]
    UnknownMove(String, String),

    /// The table defines no moves at all.
    #[error("move table is empty")]
    Empty,
}

/// The set of recognized moves and what each of them defeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTable {
    defeats: HashMap<String, Vec<String>>,
}

impl MoveTable {
    /// Builds a table from `(move, defeated moves)` pairs.
    ///
    /// # Errors
    /// Returns [`RulesError::Empty`] for an empty table and
    /// [`RulesError::UnknownMove`] if any defeat list names a move the
    /// table doesn't define.
    pub fn new<I, S>(pairs: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let defeats: HashMap<String, Vec<String>> = pairs
            .into_iter()
            .map(|(m, beaten)| {
                (m.into(), beaten.into_iter().map(Into::into).collect())
            })
            .collect();

        if defeats.is_empty() {
            return Err(RulesError::Empty);
        }
        for (m, beaten) in &defeats {
            for target in beaten {
                if !defeats.contains_key(target) {
                    return Err(RulesError::UnknownMove(
                        m.clone(),
                        target.clone(),
                    ));
                }
            }
        }
        Ok(Self { defeats })
    }

    /// The classic three-move table: rock blunts scissors, paper covers
    /// rock, scissors cut paper.
    pub fn classic() -> Self {
        let mut defeats = HashMap::new();
        defeats.insert("rock".to_string(), vec!["scissors".to_string()]);
        defeats.insert("paper".to_string(), vec!["rock".to_string()]);
        defeats.insert("scissors".to_string(), vec!["paper".to_string()]);
        Self { defeats }
    }

    /// Returns `true` if `pick` names a recognized move.
    pub fn contains(&self, pick: &str) -> bool {
        self.defeats.contains_key(pick)
    }

    /// The moves that `pick` defeats, or `None` if `pick` isn't in the
    /// table.
    pub fn defeats(&self, pick: &str) -> Option<&[String]> {
        self.defeats.get(pick).map(Vec::as_slice)
    }

    /// Iterates over every recognized move identifier.
    pub fn moves(&self) -> impl Iterator<Item = &str> {
        self.defeats.keys().map(String::as_str)
    }

    /// Number of recognized moves.
    pub fn len(&self) -> usize {
        self.defeats.len()
    }

    /// Returns `true` if the table defines no moves.
    pub fn is_empty(&self) -> bool {
        self.defeats.is_empty()
    }
}

impl Default for MoveTable {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rock-paper-scissors-lizard-Spock, the five-move variant. Used to
    /// show that alternate rule sets are plain data.
    fn lizard_spock() -> MoveTable {
        MoveTable::new([
            ("rock", vec!["scissors", "lizard"]),
            ("paper", vec!["rock", "spock"]),
            ("scissors", vec!["paper", "lizard"]),
            ("lizard", vec!["spock", "paper"]),
            ("spock", vec!["scissors", "rock"]),
        ])
        .expect("table is consistent")
    }

    #[test]
    fn test_classic_membership() {
        let table = MoveTable::classic();
        assert!(table.contains("rock"));
        assert!(table.contains("paper"));
        assert!(table.contains("scissors"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_classic_rejects_unknown_moves() {
        let table = MoveTable::classic();
        assert!(!table.contains("lizard"));
        assert!(!table.contains(""));
        assert!(!table.contains("Rock")); // identifiers are case-sensitive
    }

    #[test]
    fn test_classic_defeat_lists() {
        let table = MoveTable::classic();
        assert_eq!(table.defeats("rock"), Some(&["scissors".to_string()][..]));
        assert_eq!(table.defeats("paper"), Some(&["rock".to_string()][..]));
        assert_eq!(table.defeats("lizard"), None);
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(MoveTable::default(), MoveTable::classic());
    }

    #[test]
    fn test_alternate_table_membership() {
        let table = lizard_spock();
        assert_eq!(table.len(), 5);
        assert!(table.contains("lizard"));
        assert!(table.contains("spock"));
        assert_eq!(table.defeats("lizard").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_new_rejects_unknown_defeat_target() {
        let result = MoveTable::new([("rock", vec!["dynamite"])]);
        assert!(matches!(result, Err(RulesError::UnknownMove(m, t))
            if m == "rock" && t == "dynamite"));
    }

    #[test]
    fn test_new_rejects_empty_table() {
        let pairs: [(&str, Vec<&str>); 0] = [];
        assert!(matches!(MoveTable::new(pairs), Err(RulesError::Empty)));
    }

    #[test]
    fn test_moves_iterates_all_identifiers() {
        let table = MoveTable::classic();
        let mut moves: Vec<&str> = table.moves().collect();
        moves.sort_unstable();
        assert_eq!(moves, ["paper", "rock", "scissors"]);
    }
}
