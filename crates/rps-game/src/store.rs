use crate::actions::Action;
use crate::middleware::Middleware;
use crate::state::GameState;

/// Signature of the reducer registered with a [`Store`]
pub type Reducer = fn(Option<GameState>, &Action) -> GameState;

/// Receives every new state produced by the store
pub trait Subscriber {
    fn new_state(&mut self, state: &GameState);
}

/// Store - holds the game state and manages the Redux loop
///
/// Actions are processed one at a time and to completion: middleware chain
/// first, then the reducer, then every subscriber is notified.
pub struct Store {
    state: GameState,
    reducer: Reducer,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl Store {
    /// Create a store, seeding its state by reducing a no-op action
    /// over the optional initial state.
    pub fn new(reducer: Reducer, initial_state: Option<GameState>) -> Self {
        Self {
            state: reducer(initial_state, &Action::None),
            reducer,
            middleware: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Register a subscriber, which immediately receives the current state
    pub fn subscribe(&mut self, mut subscriber: Box<dyn Subscriber>) {
        subscriber.new_state(&self.state);
        self.subscribers.push(subscriber);
    }

    /// Get the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state) {
                log::debug!("Action consumed by middleware: {:?}", action);
                return;
            }
        }

        self.state = (self.reducer)(Some(self.state), &action);

        for subscriber in &mut self.subscribers {
            subscriber.new_state(&self.state);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(crate::reducers::game_reducer::reduce, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::game_reducer::reduce;
    use crate::state::{Message, Outcome, Player, Weapon};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every state it is handed
    struct Recorder(Rc<RefCell<Vec<GameState>>>);

    impl Subscriber for Recorder {
        fn new_state(&mut self, state: &GameState) {
            self.0.borrow_mut().push(*state);
        }
    }

    /// Consumes every action it sees
    struct Swallow;

    impl Middleware for Swallow {
        fn handle(&mut self, _action: &Action, _state: &GameState) -> bool {
            false
        }
    }

    /// Counts the actions it lets through
    struct Counter(Rc<RefCell<usize>>);

    impl Middleware for Counter {
        fn handle(&mut self, _action: &Action, _state: &GameState) -> bool {
            *self.0.borrow_mut() += 1;
            true
        }
    }

    #[test]
    fn test_store_starts_with_initial_state() {
        let store = Store::new(reduce, None);
        assert_eq!(*store.state(), GameState::new());
        assert_eq!(store.state().message(), Message::Player1Choose);
    }

    #[test]
    fn test_store_keeps_provided_state() {
        let prior = reduce(None, &Action::ChooseWeapon(Weapon::Paper));
        let store = Store::new(reduce, Some(prior));
        assert_eq!(*store.state(), prior);
    }

    #[test]
    fn test_store_dispatch_player_one_wins() {
        let mut store = Store::default();

        store.dispatch(Action::ChooseWeapon(Weapon::Rock));
        store.dispatch(Action::ChooseWeapon(Weapon::Scissors));

        assert_eq!(store.state().result(), Some(Outcome::Player1Wins));
    }

    #[test]
    fn test_store_dispatch_player_two_wins() {
        let mut store = Store::default();

        store.dispatch(Action::ChooseWeapon(Weapon::Rock));
        store.dispatch(Action::ChooseWeapon(Weapon::Paper));

        assert_eq!(store.state().result(), Some(Outcome::Player2Wins));
    }

    #[test]
    fn test_store_turn_order() {
        let mut store = Store::default();
        assert_eq!(store.state().turn().player, Player::One);

        store.dispatch(Action::ChooseWeapon(Weapon::Scissors));
        assert_eq!(store.state().turn().player, Player::Two);
    }

    #[test]
    fn test_subscriber_receives_current_and_new_states() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::default();
        store.subscribe(Box::new(Recorder(seen.clone())));

        store.dispatch(Action::ChooseWeapon(Weapon::Paper));
        store.dispatch(Action::ChooseWeapon(Weapon::Paper));

        let messages: Vec<Message> = seen.borrow().iter().map(|s| s.message()).collect();
        assert_eq!(
            messages,
            vec![Message::Player1Choose, Message::Player2Choose, Message::Draw]
        );
    }

    #[test]
    fn test_consuming_middleware_blocks_reducer_and_subscribers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::default();
        store.add_middleware(Box::new(Swallow));
        store.subscribe(Box::new(Recorder(seen.clone())));

        store.dispatch(Action::ChooseWeapon(Weapon::Rock));

        assert_eq!(*store.state(), GameState::new());
        // Only the delivery on subscribe
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_middleware_after_consumer_is_skipped() {
        let before = Rc::new(RefCell::new(0));
        let after = Rc::new(RefCell::new(0));
        let mut store = Store::default();
        store.add_middleware(Box::new(Counter(before.clone())));
        store.add_middleware(Box::new(Swallow));
        store.add_middleware(Box::new(Counter(after.clone())));

        store.dispatch(Action::None);

        assert_eq!(*before.borrow(), 1);
        assert_eq!(*after.borrow(), 0);
    }
}
