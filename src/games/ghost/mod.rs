//! Ghost word game: rules engine, players and renderers.
pub mod event;
pub mod game;
pub mod input;
pub mod player;
pub mod renderer;

pub use event::GhostEvent;
pub use game::GhostGame;
pub use input::{ConsoleInput, LineInput, ScriptedInput};
pub use player::{
    AutomatedStrategy, ChallengeKind, HumanStrategy, Player, PlayerId, PlayerKind, PlayerStrategy, TurnAction,
    TurnView,
};
pub use renderer::{GhostRenderer, JsonTranscript};
