mod common;

use common::count_cards;
use proptest::prelude::*;
use ttr_rules::board::{BoardFactory, StandardBoard};
use ttr_rules::color::Color;
use ttr_rules::color::Color::*;
use ttr_rules::config::GameConfig;
use ttr_rules::error::FailureCause;
use ttr_rules::game::Game;
use ttr_rules::route::RouteId;
use ttr_rules::strategy::{payment, Action};

const COLORS: [Color; 9] = [Red, Orange, Blue, Yellow, Green, Pink, Black, White, Wild];

/// One step of a random game: who acts, and what they try.
#[derive(Clone, Debug)]
struct Step {
    /// Offset from the seat on turn. Mostly zero, so that most actions are attempted in turn.
    seat_offset: usize,
    attempt: Attempt,
}

#[derive(Clone, Debug)]
enum Attempt {
    DrawFaceUp(usize),
    DrawFromDeck,
    /// Claim a route with whatever pays for it from the hand, or with the given cards.
    ClaimRoute { route: usize, cards: Option<Vec<Color>> },
}

fn cards() -> impl Strategy<Value = Vec<Color>> {
    proptest::collection::vec(proptest::sample::select(COLORS.to_vec()), 0..7)
}

fn attempt() -> impl Strategy<Value = Attempt> {
    prop_oneof![
        4 => (0..6usize).prop_map(Attempt::DrawFaceUp),
        3 => Just(Attempt::DrawFromDeck),
        3 => (0..100usize, proptest::option::of(cards()))
            .prop_map(|(route, cards)| Attempt::ClaimRoute { route, cards }),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    (prop_oneof![8 => Just(0usize), 1 => 1..5usize], attempt())
        .prop_map(|(seat_offset, attempt)| Step { seat_offset, attempt })
}

fn new_game(seed: u64, num_players: usize) -> Game {
    let names: Vec<_> = (0..num_players).map(|seat| format!("P{seat}")).collect();
    Game::with_factory(names, &mut StandardBoard::seeded(seed), GameConfig::default()).unwrap()
}

fn seat_of(game: &Game, player: &str) -> usize {
    game.player_names().position(|name| name == player).unwrap()
}

/// Turns a random attempt into the action a player would request.
fn to_action(game: &Game, player: &str, attempt: &Attempt) -> Action {
    match attempt {
        Attempt::DrawFaceUp(index) => Action::DrawFaceUp { index: *index },
        Attempt::DrawFromDeck => Action::DrawFromDeck,
        Attempt::ClaimRoute { route, cards } => {
            let route = &game.routes()[*route % game.routes().len()];
            let cards = cards
                .clone()
                .or_else(|| game.hand(player).and_then(|hand| payment(hand, route)))
                .unwrap_or_default();

            Action::ClaimRoute {
                city_a: route.city1.clone(),
                city_b: route.city2.clone(),
                color: route.color,
                cards,
            }
        }
    }
}

/// How many action points the action takes, if it succeeds.
fn cost(game: &Game, action: &Action) -> u8 {
    match action {
        Action::DrawFaceUp { index } => match game.face_up_cards().get(*index) {
            Some(Some(Wild)) => 2,
            _ => 1,
        },
        Action::DrawFromDeck => 1,
        Action::ClaimRoute { .. } => 2,
    }
}

fn claimants(game: &Game) -> Vec<Option<String>> {
    (0..game.routes().len())
        .map(|index| game.claimant(RouteId(index)).map(String::from))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_games_follow_the_rules(
        seed in any::<u64>(),
        num_players in 2..=5usize,
        steps in proptest::collection::vec(step(), 1..250),
    ) {
        let mut game = new_game(seed, num_players);
        let total_cards = game.num_train_cards();
        prop_assert_eq!(count_cards(&game), total_cards);

        for step in &steps {
            let current = seat_of(&game, game.current_player());
            let player = game
                .player_names()
                .nth((current + step.seat_offset) % num_players)
                .map(String::from)
                .unwrap();
            let action = to_action(&game, &player, &step.attempt);
            let before = game.clone();

            let result = game.apply(&player, &action);

            // Conservation.
            prop_assert_eq!(count_cards(&game), total_cards);

            // Claims are permanent.
            let old_claimants = claimants(&before);
            let new_claimants = claimants(&game);
            for (old, new) in old_claimants.iter().zip(&new_claimants) {
                if old.is_some() {
                    prop_assert_eq!(old, new);
                }
            }

            match result {
                Err(cause) => {
                    prop_assert_eq!(&game, &before);
                    prop_assert_eq!(game.get_state(&player), game.get_state(&player));
                    if step.seat_offset % num_players != 0 {
                        prop_assert_eq!(cause, FailureCause::WrongTurn);
                    }
                }
                Ok(()) => {
                    prop_assert_eq!(step.seat_offset % num_players, 0);

                    let cost = cost(&before, &action);
                    let remaining = before.actions_remaining();
                    prop_assert!(cost <= remaining);

                    if cost == remaining {
                        prop_assert_eq!(
                            seat_of(&game, game.current_player()),
                            (current + 1) % num_players
                        );
                        prop_assert_eq!(game.actions_remaining(), 2);
                        prop_assert_eq!(game.turn(), before.turn() + 1);
                    } else {
                        prop_assert_eq!(game.current_player(), player.as_str());
                        prop_assert_eq!(game.actions_remaining(), remaining - cost);
                    }

                    if let Action::ClaimRoute { .. } = action {
                        let claimed = new_claimants
                            .iter()
                            .zip(&old_claimants)
                            .filter(|(new, old)| new != old)
                            .count();
                        prop_assert_eq!(claimed, 1);
                    }
                }
            }
        }
    }

    #[test]
    fn wild_face_up_card_needs_a_fresh_turn(seed in any::<u64>(), index in 0..5usize) {
        let mut game = new_game(seed, 2);
        prop_assert_eq!(game.draw_from_deck("P0"), Ok(()));
        let before = game.clone();

        let result = game.draw_face_up_card("P0", index);
        if before.face_up_cards()[index] == Some(Wild) {
            prop_assert_eq!(result, Err(FailureCause::AlreadyDrew));
            prop_assert_eq!(&game, &before);
        } else {
            prop_assert_eq!(result, Ok(()));
            prop_assert!(game.is_turn("P1"));
        }
    }

    #[test]
    fn shuffled_boards_deal_valid_games(seed in any::<u64>(), num_players in 2..=5usize) {
        let board = StandardBoard::seeded(seed).create_board();
        let num_destinations = board.destinations.len();
        let names = (0..num_players).map(|seat| format!("P{seat}"));
        let game = Game::new(names, board, GameConfig::default()).unwrap();

        prop_assert_eq!(count_cards(&game), 110);
        prop_assert_eq!(game.deck_size(), 110 - 5 * num_players - 5);
        prop_assert_eq!(game.destination_pile_size(), num_destinations - 3 * num_players);
        for (name, score) in game.all_scores() {
            let charged: i32 = game
                .destinations(name)
                .unwrap()
                .iter()
                .map(|destination| i32::from(destination.value))
                .sum();
            prop_assert_eq!(score, -charged);
        }
    }
}
