//! Game State
//!
//! The round's progress is kept as a single sum type, so a play is only ever
//! readable once it was made and a result exists exactly when both players
//! have chosen.

use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Weapon {
    Rock,
    Paper,
    Scissors,
}

impl Weapon {
    /// Rock beats scissors, scissors beats paper, paper beats rock
    pub fn beats(self, other: Weapon) -> bool {
        matches!(
            (self, other),
            (Weapon::Rock, Weapon::Scissors)
                | (Weapon::Scissors, Weapon::Paper)
                | (Weapon::Paper, Weapon::Rock)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Player {
    #[strum(to_string = "PLAYER 1")]
    One,
    #[strum(to_string = "PLAYER 2")]
    Two,
}

/// Which player acts next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
}

/// A player's pick, absent until the player has chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Play {
    #[default]
    Pending,
    Chosen(Weapon),
}

impl Play {
    pub fn is_chosen(&self) -> bool {
        matches!(self, Play::Chosen(_))
    }

    pub fn weapon(&self) -> Option<Weapon> {
        match self {
            Play::Pending => None,
            Play::Chosen(weapon) => Some(*weapon),
        }
    }
}

/// Result of a resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outcome {
    #[strum(to_string = "DRAW")]
    Draw,
    #[strum(to_string = "PLAYER 1 WINS")]
    Player1Wins,
    #[strum(to_string = "PLAYER 2 WINS")]
    Player2Wins,
}

impl Outcome {
    /// Decide a round from both players' weapons
    pub fn decide(player_one: Weapon, player_two: Weapon) -> Self {
        if player_one == player_two {
            Outcome::Draw
        } else if player_one.beats(player_two) {
            Outcome::Player1Wins
        } else {
            Outcome::Player2Wins
        }
    }

    pub fn message(self) -> Message {
        match self {
            Outcome::Draw => Message::Draw,
            Outcome::Player1Wins => Message::Player1Wins,
            Outcome::Player2Wins => Message::Player2Wins,
        }
    }
}

/// What the front-end should display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Message {
    #[strum(to_string = "PLAYER 1 - Choose your weapon:")]
    Player1Choose,
    #[strum(to_string = "PLAYER 2 - Choose your weapon:")]
    Player2Choose,
    #[strum(to_string = "PLAYER 1 WINS!")]
    Player1Wins,
    #[strum(to_string = "PLAYER 2 WINS!")]
    Player2Wins,
    #[strum(to_string = "DRAW!")]
    Draw,
}

/// Coarse position in the round's state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayer1,
    AwaitingPlayer2,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Round {
    #[default]
    AwaitingPlayerOne,
    AwaitingPlayerTwo {
        player_one: Weapon,
    },
    Resolved {
        player_one: Weapon,
        player_two: Weapon,
        outcome: Outcome,
    },
}

/// Game state, only ever produced by the game reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    round: Round,
}

impl GameState {
    /// Fresh round: player one to move, nothing chosen yet
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_round(round: Round) -> Self {
        Self { round }
    }

    pub(crate) fn round(&self) -> Round {
        self.round
    }

    pub fn phase(&self) -> Phase {
        match self.round {
            Round::AwaitingPlayerOne => Phase::AwaitingPlayer1,
            Round::AwaitingPlayerTwo { .. } => Phase::AwaitingPlayer2,
            Round::Resolved { .. } => Phase::Resolved,
        }
    }

    pub fn message(&self) -> Message {
        match self.round {
            Round::AwaitingPlayerOne => Message::Player1Choose,
            Round::AwaitingPlayerTwo { .. } => Message::Player2Choose,
            Round::Resolved { outcome, .. } => outcome.message(),
        }
    }

    /// The turn stays with player two once the round is resolved
    pub fn turn(&self) -> Turn {
        let player = match self.round {
            Round::AwaitingPlayerOne => Player::One,
            Round::AwaitingPlayerTwo { .. } | Round::Resolved { .. } => Player::Two,
        };
        Turn { player }
    }

    pub fn player_one_play(&self) -> Play {
        match self.round {
            Round::AwaitingPlayerOne => Play::Pending,
            Round::AwaitingPlayerTwo { player_one } | Round::Resolved { player_one, .. } => {
                Play::Chosen(player_one)
            }
        }
    }

    pub fn player_two_play(&self) -> Play {
        match self.round {
            Round::Resolved { player_two, .. } => Play::Chosen(player_two),
            _ => Play::Pending,
        }
    }

    pub fn play(&self, player: Player) -> Play {
        match player {
            Player::One => self.player_one_play(),
            Player::Two => self.player_two_play(),
        }
    }

    /// Set if and only if both players have chosen
    pub fn result(&self) -> Option<Outcome> {
        match self.round {
            Round::Resolved { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}
