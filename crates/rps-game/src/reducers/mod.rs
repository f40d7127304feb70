pub mod game_reducer;
