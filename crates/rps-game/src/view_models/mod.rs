mod game_view_model;

pub use game_view_model::GameViewModel;
