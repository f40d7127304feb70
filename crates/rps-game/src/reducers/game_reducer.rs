use crate::actions::Action;
use crate::state::{GameState, Outcome, Player, Round, Weapon};

/// Reducer - pure function that produces new state from prior state + action
///
/// An absent prior state is replaced by a fresh round.
pub fn reduce(state: Option<GameState>, action: &Action) -> GameState {
    let state = state.unwrap_or_default();

    match action {
        Action::ChooseWeapon(weapon) => choose_weapon(state, *weapon),
        Action::None => {
            // Unhandled actions - no state change
            state
        }
    }
}

fn choose_weapon(state: GameState, weapon: Weapon) -> GameState {
    let round = match state.round() {
        Round::AwaitingPlayerOne => {
            log::debug!("{} has chosen, passing the turn", Player::One);
            Round::AwaitingPlayerTwo { player_one: weapon }
        }
        Round::AwaitingPlayerTwo { player_one } => {
            let outcome = Outcome::decide(player_one, weapon);
            log::debug!(
                "Round resolved: {} vs {} -> {}",
                player_one,
                weapon,
                outcome
            );
            Round::Resolved {
                player_one,
                player_two: weapon,
                outcome,
            }
        }
        resolved @ Round::Resolved { .. } => {
            log::debug!("Round already resolved, ignoring choice of {}", weapon);
            resolved
        }
    };

    GameState::from_round(round)
}
