pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::config::{DictionaryTable, GameSettings, PlayerConfig};
pub use crate::core::dictionary::{Dictionary, FileWordList, StaticWordList, WordListProvider};
pub use crate::core::error::{GhostError, GhostResult};
pub use crate::core::renderer::{EventLog, GameRenderer};
pub use crate::games::ghost::{GhostEvent, GhostGame, Player, PlayerId, PlayerKind};
