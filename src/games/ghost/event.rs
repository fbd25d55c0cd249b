use serde::Serialize;

/// Everything observable that happens during a match, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GhostEvent {
    TurnStarted {
        player: String,
    },
    LetterPlayed {
        player: String,
        letter: char,
        fragment: String,
    },
    ChallengedAsComplete {
        challenger: String,
        challenged: String,
        letter: char,
        fragment: String,
    },
    ChallengedAsImpossible {
        challenger: String,
        challenged: String,
        letter: char,
        fragment: String,
    },
    /// Outcome of a complete-word challenge.
    FragmentJudged {
        fragment: String,
        is_word: bool,
        loser: String,
    },
    /// Outcome of an impossible-fragment challenge.
    IntendedWordJudged {
        player: String,
        word: String,
        is_valid: bool,
        loser: String,
    },
    Forfeited {
        player: String,
    },
    RoundLost {
        player: String,
        strikes: usize,
        ghost_prefix: String,
    },
    PlayerEliminated {
        player: String,
        ghost_word: String,
    },
    GameWon {
        player: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_tag() {
        let event = GhostEvent::RoundLost {
            player: "Ada".into(),
            strikes: 2,
            ghost_prefix: "GH".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event": "round_lost",
                "player": "Ada",
                "strikes": 2,
                "ghost_prefix": "GH"
            })
        );
    }
}
