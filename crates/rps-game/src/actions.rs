use crate::state::Weapon;

/// Actions represent all possible state changes in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No-op, every reducer returns the state untouched.
    /// The store dispatches it once to seed its initial state.
    None,

    /// The player whose turn it is picked a weapon
    ChooseWeapon(Weapon),
}
