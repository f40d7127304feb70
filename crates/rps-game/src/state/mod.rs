//! Application State Module
//!
//! Contains the game state and the value types it is built from.

mod game;

pub use game::{GameState, Message, Outcome, Phase, Play, Player, Turn, Weapon};
pub(crate) use game::Round;
