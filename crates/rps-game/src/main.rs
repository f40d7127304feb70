use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use rps_config::AppConfig;
use rps_game::middleware::LoggingMiddleware;
use rps_game::reducers::game_reducer::reduce;
use rps_game::view_models::GameViewModel;
use rps_game::{Action, GameState, Store, Subscriber, Weapon};

mod logger;

/// Play one round of Rock-Paper-Scissors
#[derive(Parser, Debug)]
#[command(name = "rps", version, about)]
struct Cli {
    /// Player 1's weapon, then player 2's weapon
    #[arg(
        value_name = "WEAPON",
        required = true,
        num_args = 1..=2,
        ignore_case = true,
        value_parser = PossibleValuesParser::new(["rock", "paper", "scissors"])
            .try_map(|s| s.parse::<Weapon>()),
    )]
    weapons: Vec<Weapon>,
}

/// Prints the game labels every time the state changes
struct StdoutView;

impl Subscriber for StdoutView {
    fn new_state(&mut self, state: &GameState) {
        for line in GameViewModel::new(state).lines() {
            println!("{}", line);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::load();

    match logger::init(&config) {
        Ok(path) => log::info!("Starting rps, logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    let mut store = Store::new(reduce, None);
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.subscribe(Box::new(StdoutView));

    for weapon in cli.weapons {
        store.dispatch(Action::ChooseWeapon(weapon));
    }

    log::info!("Exiting rps, final phase {:?}", store.state().phase());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_weapons() {
        let cli = Cli::try_parse_from(["rps", "rock", "Scissors"]).unwrap();
        assert_eq!(cli.weapons, vec![Weapon::Rock, Weapon::Scissors]);
    }

    #[test]
    fn test_single_weapon_is_accepted() {
        let cli = Cli::try_parse_from(["rps", "PAPER"]).unwrap();
        assert_eq!(cli.weapons, vec![Weapon::Paper]);
    }

    #[test]
    fn test_weapon_is_required() {
        let err = Cli::try_parse_from(["rps"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_more_than_two_weapons_is_rejected() {
        assert!(Cli::try_parse_from(["rps", "rock", "paper", "scissors"]).is_err());
    }

    #[test]
    fn test_unknown_weapon_is_rejected() {
        let err = Cli::try_parse_from(["rps", "paper", "lizard"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_help_is_not_a_weapon() {
        let err = Cli::try_parse_from(["rps", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
