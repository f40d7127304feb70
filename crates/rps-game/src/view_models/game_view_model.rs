//! Game View Model
//!
//! Turns a [`GameState`] into the three labels a front-end shows: the
//! message and one placeholder per player.

use crate::state::GameState;

const CHOSEN: &str = "chosen";

/// View model for the game screen - handles presentation logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameViewModel {
    pub message: String,
    pub placeholder_one: String,
    pub placeholder_two: String,
}

impl GameViewModel {
    pub fn new(state: &GameState) -> Self {
        let message = state.message().to_string();

        // Weapons are revealed only once player two has chosen
        let (placeholder_one, placeholder_two) = match (
            state.player_one_play().weapon(),
            state.player_two_play().weapon(),
        ) {
            (Some(one), Some(two)) => (one.to_string(), two.to_string()),
            (Some(_), None) => (CHOSEN.to_string(), String::new()),
            _ => (String::new(), String::new()),
        };

        Self {
            message,
            placeholder_one,
            placeholder_two,
        }
    }

    /// Text lines for a plain terminal: the message, then the placeholders
    /// once there is something to show
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.message.clone()];
        if !self.placeholder_one.is_empty() || !self.placeholder_two.is_empty() {
            lines.push(format!(
                "  player 1: {:<10} player 2: {}",
                self.placeholder_one, self.placeholder_two
            ));
        }
        lines
    }
}
