#![allow(dead_code)]

use ttr_rules::board::{Board, ScoringTable};
use ttr_rules::city::City;
use ttr_rules::color::Color;
use ttr_rules::color::Color::*;
use ttr_rules::config::GameConfig;
use ttr_rules::game::Game;
use ttr_rules::route::{Destination, Route, RouteId};

pub const ALICE: &str = "Alice";
pub const BOB: &str = "Bob";

/// Blue route of cost 3 between X and Y.
pub const BLUE_X_Y: RouteId = RouteId(0);
/// Grey route of cost 2 between Y and Z.
pub const GREY_Y_Z: RouteId = RouteId(1);

pub fn city(name: &str) -> City {
    City::from(name)
}

pub fn routes() -> Vec<Route> {
    vec![
        Route::new("X", "Y", 3, Blue),
        Route::new("Y", "Z", 2, Wild),
        Route::new("X", "Z", 4, Red),
    ]
}

/// Deals a game between Alice and Bob, with exactly the given hands and face-up display.
///
/// `deck` is what is left to draw afterwards, its last card being the top one.
/// Alice holds the destination X-Y worth 4 points, Bob the destination X-Z worth 6 points.
pub fn game(alice: &[Color], bob: &[Color], face_up: [Color; 5], deck: &[Color]) -> Game {
    assert_eq!(alice.len(), bob.len(), "hands must be the same size");

    let mut train_cards = deck.to_vec();
    train_cards.extend(face_up.iter().rev());
    train_cards.extend(bob.iter().rev());
    train_cards.extend(alice.iter().rev());

    let board = Board {
        routes: routes(),
        deck: train_cards,
        destinations: vec![Destination::new("X", "Z", 6), Destination::new("X", "Y", 4)],
        scoring: ScoringTable::standard(),
    };
    let config = GameConfig {
        starting_hand_size: alice.len(),
        destinations_per_player: 1,
    };

    Game::new([ALICE, BOB], board, config).unwrap()
}

/// Total number of train cards in every pile and hand.
pub fn count_cards(game: &Game) -> usize {
    let face_up = game.face_up_cards().iter().flatten().count();
    let hands: usize = game
        .player_names()
        .filter_map(|name| game.hand(name))
        .map(|hand| hand.len())
        .sum();

    game.deck_size() + face_up + hands + game.discard_pile_size()
}
