//! Players and their turn strategies.
//!
//! A [`Player`] carries identity and strike state; what it does on its
//! turn is delegated to a [`PlayerStrategy`]. Humans answer through a
//! [`LineInput`], computer players have no strategy yet and say so.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::PlayerConfig;
use crate::core::error::{GhostError, GhostResult};
use crate::games::ghost::input::LineInput;

/// Sequential player identifier, 0-based in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl PlayerId {
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player <{}>", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

impl PlayerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = GhostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            other => Err(GhostError::InvalidPlayerType(other.to_string())),
        }
    }
}

/// Which accusation a challenge makes against the previous player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    /// The fragment already spells a word.
    Complete,
    /// No word can extend the fragment.
    Impossible,
}

impl ChallengeKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "complete" => Some(ChallengeKind::Complete),
            "impossible" => Some(ChallengeKind::Impossible),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnType {
    Play,
    Challenge,
    Forfeit,
}

impl TurnType {
    fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "play" => Some(TurnType::Play),
            "challenge" => Some(TurnType::Challenge),
            "forfeit" => Some(TurnType::Forfeit),
            _ => None,
        }
    }
}

/// What a player decided to do with their turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play(String),
    Challenge(ChallengeKind),
    Forfeit,
}

/// Snapshot of the game handed to a strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnView {
    pub player_name: String,
    pub fragment: String,
}

/// Check that `letter` is exactly one lowercase ASCII letter.
pub fn validate_letter(letter: &str) -> GhostResult<char> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Ok(c),
        (Some(_), None) => Err(GhostError::InvalidLetter(letter.to_string())),
        _ => Err(GhostError::NotALetter(letter.to_string())),
    }
}

pub trait PlayerStrategy {
    /// Decide this turn's action.
    fn take_turn(&mut self, view: &TurnView) -> GhostResult<TurnAction>;

    /// Name the word the player meant to build with their last letter.
    fn respond_to_challenge(&mut self, view: &TurnView) -> GhostResult<String>;
}

/// Strategy driven by a person answering prompts.
pub struct HumanStrategy {
    input: Box<dyn LineInput>,
}

impl HumanStrategy {
    pub fn new(input: Box<dyn LineInput>) -> Self {
        Self { input }
    }
}

impl PlayerStrategy for HumanStrategy {
    fn take_turn(&mut self, view: &TurnView) -> GhostResult<TurnAction> {
        loop {
            let turn_type = self.input.read_line("TURN TYPE")?;
            match TurnType::parse(&turn_type) {
                Some(TurnType::Play) => {
                    let letter = self.input.read_line("LETTER")?.to_lowercase();
                    match validate_letter(&letter) {
                        Ok(_) => return Ok(TurnAction::Play(letter)),
                        Err(e) if e.is_recoverable() => self.input.report(&e.to_string()),
                        Err(e) => return Err(e),
                    }
                }
                Some(TurnType::Challenge) => {
                    if view.fragment.is_empty() {
                        self.input.report(&GhostError::EmptyFragment.to_string());
                        continue;
                    }
                    let kind = self.input.read_line("CHALLENGE TYPE (complete/impossible)")?;
                    match ChallengeKind::parse(&kind) {
                        Some(kind) => return Ok(TurnAction::Challenge(kind)),
                        None => self
                            .input
                            .report("Challenge type must be 'complete' or 'impossible'"),
                    }
                }
                Some(TurnType::Forfeit) => return Ok(TurnAction::Forfeit),
                None => self
                    .input
                    .report("Turn type must be 'play', 'challenge', or 'forfeit'"),
            }
        }
    }

    fn respond_to_challenge(&mut self, view: &TurnView) -> GhostResult<String> {
        let prompt = format!("{}'s INTENDED WORD", view.player_name);
        let word = self.input.read_line(&prompt)?;
        Ok(word.trim().to_lowercase())
    }
}

/// Computer strategy placeholder: every decision fails loudly.
#[derive(Debug, Default)]
pub struct AutomatedStrategy;

impl PlayerStrategy for AutomatedStrategy {
    fn take_turn(&mut self, _view: &TurnView) -> GhostResult<TurnAction> {
        Err(GhostError::NotYetSupported("take_turn"))
    }

    fn respond_to_challenge(&mut self, _view: &TurnView) -> GhostResult<String> {
        Err(GhostError::NotYetSupported("respond_to_challenge"))
    }
}

pub struct Player {
    id: PlayerId,
    name: String,
    kind: PlayerKind,
    strikes: usize,
    eliminated: bool,
    strategy: Box<dyn PlayerStrategy>,
}

impl Player {
    /// Create a player; without a name one is generated as `"<TYPE> <id+1>"`.
    pub fn new(
        id: PlayerId,
        kind: PlayerKind,
        name: Option<String>,
        strategy: Box<dyn PlayerStrategy>,
    ) -> Self {
        let name = name.unwrap_or_else(|| format!("{} {}", kind.as_str().to_uppercase(), id.0 + 1));
        Self { id, name, kind, strikes: 0, eliminated: false, strategy }
    }

    pub fn human(id: PlayerId, name: Option<String>, input: Box<dyn LineInput>) -> Self {
        Self::new(id, PlayerKind::Human, name, Box::new(HumanStrategy::new(input)))
    }

    pub fn computer(id: PlayerId, name: Option<String>) -> Self {
        Self::new(id, PlayerKind::Computer, name, Box::new(AutomatedStrategy))
    }

    /// Build a roster in config order, ids assigned sequentially.
    /// `input_for` supplies the input source of each human.
    pub fn from_configs<F>(configs: &[PlayerConfig], mut input_for: F) -> GhostResult<Vec<Player>>
    where
        F: FnMut(PlayerId) -> Box<dyn LineInput>,
    {
        if configs.is_empty() {
            return Err(GhostError::NoPlayers);
        }

        let players = configs
            .iter()
            .enumerate()
            .map(|(i, config)| {
                let id = PlayerId::new(i);
                match config.kind() {
                    PlayerKind::Human => Player::human(id, config.name.clone(), input_for(id)),
                    PlayerKind::Computer => Player::computer(id, config.name.clone()),
                }
            })
            .collect();
        Ok(players)
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn strikes(&self) -> usize {
        self.strikes
    }

    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    pub fn take_turn(&mut self, view: &TurnView) -> GhostResult<TurnAction> {
        self.strategy.take_turn(view)
    }

    pub fn respond_to_challenge(&mut self, view: &TurnView) -> GhostResult<String> {
        self.strategy.respond_to_challenge(view)
    }

    pub(crate) fn add_strike(&mut self) -> usize {
        self.strikes += 1;
        self.strikes
    }

    pub(crate) fn mark_eliminated(&mut self) {
        self.eliminated = true;
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("strikes", &self.strikes)
            .field("eliminated", &self.eliminated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ghost::input::ScriptedInput;

    fn view(fragment: &str) -> TurnView {
        TurnView {
            player_name: "Ada".into(),
            fragment: fragment.into(),
        }
    }

    #[test]
    fn test_generic_names() {
        let human = Player::human(PlayerId::new(0), None, Box::new(ScriptedInput::default()));
        let computer = Player::computer(PlayerId::new(1), None);
        let named = Player::computer(PlayerId::new(2), Some("HAL".into()));

        assert_eq!(human.name(), "HUMAN 1");
        assert_eq!(computer.name(), "COMPUTER 2");
        assert_eq!(named.name(), "HAL");
        assert_eq!(named.kind(), PlayerKind::Computer);
    }

    #[test]
    fn test_player_kind_from_str() {
        assert_eq!("human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!("computer".parse::<PlayerKind>().unwrap(), PlayerKind::Computer);
        assert!(matches!(
            "robot".parse::<PlayerKind>(),
            Err(GhostError::InvalidPlayerType(t)) if t == "robot"
        ));
    }

    #[test]
    fn test_validate_letter() {
        assert_eq!(validate_letter("g").unwrap(), 'g');
        assert!(matches!(validate_letter(""), Err(GhostError::NotALetter(_))));
        assert!(matches!(validate_letter("gh"), Err(GhostError::NotALetter(_))));
        assert!(matches!(validate_letter("G"), Err(GhostError::InvalidLetter(_))));
        assert!(matches!(validate_letter("7"), Err(GhostError::InvalidLetter(_))));
        assert!(matches!(validate_letter("é"), Err(GhostError::InvalidLetter(_))));
    }

    #[test]
    fn test_from_configs_assigns_sequential_ids() {
        let configs = vec![
            PlayerConfig::human("Ada"),
            PlayerConfig::default(),
            PlayerConfig { player_type: Some(PlayerKind::Computer), name: None },
        ];
        let players = Player::from_configs(&configs, |_| Box::new(ScriptedInput::default())).unwrap();

        let ids: Vec<_> = players.iter().map(Player::id).collect();
        assert_eq!(ids, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
        assert_eq!(players[0].name(), "Ada");
        assert_eq!(players[1].name(), "HUMAN 2");
        assert_eq!(players[2].name(), "COMPUTER 3");
    }

    #[test]
    fn test_from_configs_empty() {
        let result = Player::from_configs(&[], |_| Box::new(ScriptedInput::default()));
        assert!(matches!(result, Err(GhostError::NoPlayers)));
    }

    #[test]
    fn test_human_reprompts_until_valid_letter() {
        let script = ScriptedInput::new(["dance", "play", "ab", "play", "7", "PLAY", "G"]);
        let mut strategy = HumanStrategy::new(Box::new(script.clone()));

        let action = strategy.take_turn(&view("")).unwrap();
        assert_eq!(action, TurnAction::Play("g".into()));
        assert_eq!(
            script.reports(),
            vec![
                "Turn type must be 'play', 'challenge', or 'forfeit'",
                "ab is not a letter",
                "Invalid letter: 7",
            ]
        );
    }

    #[test]
    fn test_human_cannot_challenge_empty_fragment() {
        let script = ScriptedInput::new(["challenge", "forfeit"]);
        let mut strategy = HumanStrategy::new(Box::new(script.clone()));

        assert_eq!(strategy.take_turn(&view("")).unwrap(), TurnAction::Forfeit);
        assert_eq!(script.reports(), vec!["Cannot challenge on first turn of round"]);
    }

    #[test]
    fn test_human_challenge_kinds() {
        let script = ScriptedInput::new(["challenge", "maybe", "challenge", "Impossible"]);
        let mut strategy = HumanStrategy::new(Box::new(script.clone()));

        let action = strategy.take_turn(&view("gho")).unwrap();
        assert_eq!(action, TurnAction::Challenge(ChallengeKind::Impossible));
        assert_eq!(script.reports(), vec!["Challenge type must be 'complete' or 'impossible'"]);
    }

    #[test]
    fn test_human_intended_word_is_normalized() {
        let script = ScriptedInput::new(["  GHOSTLY "]);
        let mut strategy = HumanStrategy::new(Box::new(script.clone()));

        assert_eq!(strategy.respond_to_challenge(&view("ghost")).unwrap(), "ghostly");
        assert_eq!(script.prompts(), vec!["Ada's INTENDED WORD"]);
    }

    #[test]
    fn test_human_out_of_input() {
        let mut strategy = HumanStrategy::new(Box::new(ScriptedInput::new(["play"])));
        assert!(matches!(
            strategy.take_turn(&view("")),
            Err(GhostError::InputExhausted(_))
        ));
    }

    #[test]
    fn test_automated_strategy_not_supported() {
        let mut player = Player::computer(PlayerId::new(0), None);
        assert!(matches!(
            player.take_turn(&view("")),
            Err(GhostError::NotYetSupported("take_turn"))
        ));
        assert!(matches!(
            player.respond_to_challenge(&view("gh")),
            Err(GhostError::NotYetSupported("respond_to_challenge"))
        ));
    }
}
