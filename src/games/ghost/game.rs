//! Ghost rules engine: turn order, challenges, strikes and elimination.

use tracing::{debug, info};

use crate::core::config::GameSettings;
use crate::core::dictionary::{Dictionary, WordListProvider};
use crate::core::error::{GhostError, GhostResult};
use crate::core::renderer::GameRenderer;
use crate::games::ghost::event::GhostEvent;
use crate::games::ghost::player::{validate_letter, ChallengeKind, Player, PlayerId, TurnAction, TurnView};

/// One match of Ghost.
///
/// The roster is the live turn order; eliminated players move to a
/// separate list. The fragment is reset after every lost round.
pub struct GhostGame {
    players: Vec<Player>,
    eliminated: Vec<Player>,
    player_count: usize,
    current_player: Option<PlayerId>,
    min_word_length: usize,
    ghost_word: String,
    num_strikes_allowed: usize,
    word_list: Dictionary,
    current_word_fragment: String,
    game_is_over: bool,
    renderer: Box<dyn GameRenderer<GhostEvent>>,
}

impl GhostGame {
    /// Create a game, loading `settings.dictionary` from `provider`.
    pub fn new(
        players: Vec<Player>,
        settings: &GameSettings,
        provider: &dyn WordListProvider,
        renderer: Box<dyn GameRenderer<GhostEvent>>,
    ) -> GhostResult<Self> {
        let mut game = Self::with_dictionary(players, settings, Dictionary::empty(), renderer)?;
        game.word_list = game.load_word_list(provider, &settings.dictionary)?;
        Ok(game)
    }

    /// Create a game around an already loaded dictionary.
    pub fn with_dictionary(
        players: Vec<Player>,
        settings: &GameSettings,
        word_list: Dictionary,
        renderer: Box<dyn GameRenderer<GhostEvent>>,
    ) -> GhostResult<Self> {
        if players.is_empty() {
            return Err(GhostError::NoPlayers);
        }
        let ghost_word = settings.checked_ghost_word()?;
        let num_strikes_allowed = ghost_word.chars().count();

        Ok(Self {
            player_count: players.len(),
            players,
            eliminated: Vec::new(),
            current_player: None,
            min_word_length: settings.min_word_length,
            ghost_word,
            num_strikes_allowed,
            word_list,
            current_word_fragment: String::new(),
            game_is_over: false,
            renderer,
        })
    }

    pub fn load_word_list(&self, provider: &dyn WordListProvider, kind: &str) -> GhostResult<Dictionary> {
        provider.load(kind, self.min_word_length)
    }

    /// Run turns until one player is left; returns the winner.
    ///
    /// The next player is looked up before the current turn runs, so the
    /// turn after an elimination goes to whoever followed the current
    /// player when the turn began.
    pub fn start(&mut self) -> GhostResult<PlayerId> {
        if self.game_is_over {
            return Err(GhostError::GameOver);
        }
        let first = self.players.first().ok_or(GhostError::NoPlayers)?.id();
        self.current_player = Some(first);

        while !self.game_is_over {
            let current = self.current_player.ok_or(GhostError::NotStarted)?;
            let name = self.players[self.index_of(current)?].name().to_string();
            self.emit(GhostEvent::TurnStarted { player: name });

            let next = self.get_next_player()?;
            self.take_turn(current)?;
            self.check_for_game_over();
            self.current_player = Some(next);
        }

        Ok(self.players[0].id())
    }

    /// Let `id` act once, as chosen by their strategy.
    pub fn take_turn(&mut self, id: PlayerId) -> GhostResult<()> {
        if self.game_is_over {
            return Err(GhostError::GameOver);
        }
        let view = self.turn_view(id)?;
        let idx = self.index_of(id)?;
        let action = self.players[idx].take_turn(&view)?;
        debug!(player = %id, ?action, "turn chosen");

        match action {
            TurnAction::Play(letter) => self.play_letter(id, &letter),
            TurnAction::Challenge(ChallengeKind::Complete) => self.challenge_previous_player_as_complete(id),
            TurnAction::Challenge(ChallengeKind::Impossible) => self.challenge_previous_player_as_impossible(id),
            TurnAction::Forfeit => self.forfeit_round(id),
        }
    }

    /// Append one lowercase letter to the fragment.
    pub fn play_letter(&mut self, id: PlayerId, letter: &str) -> GhostResult<()> {
        let idx = self.index_of(id)?;
        let letter = validate_letter(letter)?;
        self.current_word_fragment.push(letter);

        debug!(player = %id, %letter, fragment = %self.current_word_fragment, "letter played");
        self.emit(GhostEvent::LetterPlayed {
            player: self.players[idx].name().to_string(),
            letter,
            fragment: self.current_word_fragment.clone(),
        });
        Ok(())
    }

    /// Give `id` a strike; eliminate them once the ghost word is spelled out.
    pub fn lose_round(&mut self, id: PlayerId) -> GhostResult<()> {
        let idx = self.index_of(id)?;
        self.reset_current_word_fragment();

        let strikes = self.players[idx].add_strike();
        let ghost_prefix: String = self.ghost_word.chars().take(strikes).collect();
        debug!(player = %id, strikes, "round lost");
        self.emit(GhostEvent::RoundLost {
            player: self.players[idx].name().to_string(),
            strikes,
            ghost_prefix,
        });

        if strikes == self.num_strikes_allowed {
            self.eliminate_player(id)?;
        }
        Ok(())
    }

    /// Accuse the previous player of having completed a word.
    pub fn challenge_previous_player_as_complete(&mut self, challenger: PlayerId) -> GhostResult<()> {
        let (previous, letter) = self.challenge_target(challenger)?;
        let fragment = self.current_word_fragment.clone();
        self.emit(GhostEvent::ChallengedAsComplete {
            challenger: self.name_of(challenger)?,
            challenged: self.name_of(previous)?,
            letter,
            fragment: fragment.clone(),
        });

        let is_word = self.is_valid_word(&fragment);
        let loser = if is_word { previous } else { challenger };
        debug!(%challenger, %previous, %fragment, is_word, "complete-word challenge");
        self.emit(GhostEvent::FragmentJudged {
            fragment,
            is_word,
            loser: self.name_of(loser)?,
        });
        self.lose_round(loser)
    }

    /// Accuse the previous player of building a fragment no word extends.
    pub fn challenge_previous_player_as_impossible(&mut self, challenger: PlayerId) -> GhostResult<()> {
        let (previous, letter) = self.challenge_target(challenger)?;
        self.emit(GhostEvent::ChallengedAsImpossible {
            challenger: self.name_of(challenger)?,
            challenged: self.name_of(previous)?,
            letter,
            fragment: self.current_word_fragment.clone(),
        });

        let view = self.turn_view(previous)?;
        let idx = self.index_of(previous)?;
        let intended_word = self.players[idx].respond_to_challenge(&view)?;

        let is_valid = self.is_valid_intended_word(&intended_word);
        let loser = if is_valid { challenger } else { previous };
        debug!(%challenger, %previous, %intended_word, is_valid, "impossible-fragment challenge");
        self.emit(GhostEvent::IntendedWordJudged {
            player: self.name_of(previous)?,
            word: intended_word,
            is_valid,
            loser: self.name_of(loser)?,
        });
        self.lose_round(loser)
    }

    pub fn forfeit_round(&mut self, id: PlayerId) -> GhostResult<()> {
        let player = self.name_of(id)?;
        self.emit(GhostEvent::Forfeited { player });
        self.lose_round(id)
    }

    pub fn get_next_player(&self) -> GhostResult<PlayerId> {
        let current = self.current_player.ok_or(GhostError::NotStarted)?;
        self.neighbor_of(current, true)
    }

    pub fn get_previous_player(&self) -> GhostResult<PlayerId> {
        let current = self.current_player.ok_or(GhostError::NotStarted)?;
        self.neighbor_of(current, false)
    }

    /// Point the turn at `id`, who must still be in the roster.
    pub fn set_current_player(&mut self, id: PlayerId) -> GhostResult<()> {
        self.index_of(id)?;
        self.current_player = Some(id);
        Ok(())
    }

    /// Flag the game as over once a single player is left.
    pub fn check_for_game_over(&mut self) -> bool {
        if !self.game_is_over && self.player_count == 1 {
            let winner = self.players[0].name().to_string();
            info!(winner = %winner, "game over");
            self.emit(GhostEvent::GameWon { player: winner });
            self.game_is_over = true;
        }
        self.game_is_over
    }

    pub fn eliminate_player(&mut self, id: PlayerId) -> GhostResult<()> {
        let idx = self.index_of(id)?;
        let mut player = self.players.remove(idx);
        player.mark_eliminated();
        self.player_count = self.players.len();

        info!(player = %id, name = player.name(), remaining = self.player_count, "player eliminated");
        self.emit(GhostEvent::PlayerEliminated {
            player: player.name().to_string(),
            ghost_word: self.ghost_word.clone(),
        });
        self.eliminated.push(player);
        Ok(())
    }

    pub fn reset_current_word_fragment(&mut self) {
        self.current_word_fragment.clear();
    }

    pub fn is_valid_word(&self, word: &str) -> bool {
        self.word_list.contains(word)
    }

    /// A word the previous player could have meant: extends the fragment
    /// and is in the dictionary.
    pub fn is_valid_intended_word(&self, word: &str) -> bool {
        !word.is_empty() && word.starts_with(&self.current_word_fragment) && self.is_valid_word(word)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Eliminated players, in elimination order.
    pub fn eliminated_players(&self) -> &[Player] {
        &self.eliminated
    }

    /// Look a player up whether or not they are still in the roster.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players
            .iter()
            .chain(self.eliminated.iter())
            .find(|p| p.id() == id)
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    pub fn current_word_fragment(&self) -> &str {
        &self.current_word_fragment
    }

    pub fn ghost_word(&self) -> &str {
        &self.ghost_word
    }

    pub fn num_strikes_allowed(&self) -> usize {
        self.num_strikes_allowed
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    pub fn word_list(&self) -> &Dictionary {
        &self.word_list
    }

    pub fn is_over(&self) -> bool {
        self.game_is_over
    }

    pub fn winner(&self) -> Option<&Player> {
        if self.game_is_over {
            self.players.first()
        } else {
            None
        }
    }

    fn emit(&mut self, event: GhostEvent) {
        self.renderer.render(&event);
    }

    fn index_of(&self, id: PlayerId) -> GhostResult<usize> {
        self.players
            .iter()
            .position(|p| p.id() == id)
            .ok_or(GhostError::PlayerNotInRoster(id))
    }

    fn name_of(&self, id: PlayerId) -> GhostResult<String> {
        Ok(self.players[self.index_of(id)?].name().to_string())
    }

    /// Cyclic neighbor of `id` in the live roster.
    fn neighbor_of(&self, id: PlayerId, forward: bool) -> GhostResult<PlayerId> {
        let idx = self.index_of(id)?;
        let len = self.players.len();
        let neighbor = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        Ok(self.players[neighbor].id())
    }

    /// Previous player and last letter for a challenge by `challenger`.
    fn challenge_target(&self, challenger: PlayerId) -> GhostResult<(PlayerId, char)> {
        let letter = self
            .current_word_fragment
            .chars()
            .last()
            .ok_or(GhostError::EmptyFragment)?;
        let previous = self.neighbor_of(challenger, false)?;
        Ok((previous, letter))
    }

    fn turn_view(&self, id: PlayerId) -> GhostResult<TurnView> {
        let player = &self.players[self.index_of(id)?];
        Ok(TurnView {
            player_name: player.name().to_string(),
            fragment: self.current_word_fragment.clone(),
        })
    }
}
