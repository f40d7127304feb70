//! LoggingMiddleware - logs all actions for debugging

use super::Middleware;
use crate::actions::Action;
use crate::state::GameState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &GameState) -> bool {
        // Skip None to reduce noise
        if !matches!(action, Action::None) {
            log::debug!("Action: {:?} (phase {:?})", action, state.phase());
        }

        true // Always pass action through
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Weapon;

    #[test]
    fn test_logging_middleware() {
        let mut middleware = LoggingMiddleware::new();
        let state = GameState::default();

        assert!(middleware.handle(&Action::ChooseWeapon(Weapon::Rock), &state));
        assert!(middleware.handle(&Action::None, &state));
    }
}
