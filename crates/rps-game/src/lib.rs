//! Two-player Rock-Paper-Scissors built on a Redux-style store.
//!
//! Actions flow through the [`Store`]: first the middleware chain, then the
//! pure game reducer, then every subscriber is handed the new state.

pub mod actions;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;
pub mod view_models;

pub use actions::Action;
pub use state::{GameState, Message, Outcome, Phase, Play, Player, Turn, Weapon};
pub use store::{Reducer, Store, Subscriber};
