use crate::city::City;
use crate::color::Color;
use crate::error::ActionResult;
use crate::game::{Game, GameState};
use crate::hand::Hand;
use crate::route::Route;
use crate::turn::ACTIONS_PER_TURN;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single action a player can request, see [`Game::apply`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Take the card at `index` of the face-up display.
    DrawFaceUp { index: usize },
    /// Take the top card of the deck.
    DrawFromDeck,
    /// Claim the route of the given color between two cities, paying with `cards`.
    ClaimRoute {
        city_a: City,
        city_b: City,
        color: Color,
        cards: Vec<Color>,
    },
}

/// Something that decides actions on behalf of a player.
///
/// Strategies only ever see the game through the state returned by [`Game::get_state`],
/// so they cannot peek at the other players' hands.
pub trait Strategy {
    /// Name of the player this strategy plays for.
    fn name(&self) -> &str;

    /// Picks the next action, whenever it is this strategy's turn.
    fn decide_action(&mut self, state: &GameState<'_>) -> Action;

    /// Called once, after the game is over.
    fn on_game_ended(&mut self, _state: &GameState<'_>) {}
}

/// Asks the strategy of the player on turn for one action, and applies it.
///
/// Returns `None` if no strategy plays for that player. Deciding when the game is
/// over is left to the caller.
///
/// # Example
/// ```
/// use ttr_rules::board::{BoardFactory, StandardBoard};
/// use ttr_rules::config::GameConfig;
/// use ttr_rules::game::Game;
/// use ttr_rules::strategy::{play_turn, RandomStrategy, Strategy};
///
/// let mut board_factory = StandardBoard::seeded(1);
/// let config = GameConfig::default();
/// let mut game = Game::with_factory(["P1", "P2"], &mut board_factory, config).unwrap();
/// let mut strategies: Vec<Box<dyn Strategy>> = vec![
///     Box::new(RandomStrategy::seeded("P1", 1)),
///     Box::new(RandomStrategy::seeded("P2", 2)),
/// ];
///
/// for _ in 0..20 {
///     assert!(play_turn(&mut game, &mut strategies).is_some());
/// }
/// ```
pub fn play_turn(game: &mut Game, strategies: &mut [Box<dyn Strategy>]) -> Option<ActionResult> {
    let player = game.current_player().to_owned();
    let strategy = strategies
        .iter_mut()
        .find(|strategy| strategy.name() == player)?;

    let action = strategy.decide_action(&game.get_state(&player));
    let result = game.apply(&player, &action);
    debug!(%player, ?action, ?result, "played an action");

    Some(result)
}

/// Lets every strategy know the game is over, each with its own view of the final state.
pub fn notify_game_ended(game: &Game, strategies: &mut [Box<dyn Strategy>]) {
    for strategy in strategies {
        let name = strategy.name().to_owned();
        strategy.on_game_ended(&game.get_state(&name));
    }
}

/// Plays uniformly at random amongst the actions it believes to be legal.
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A strategy whose choices are reproducible.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Every action worth trying given the state.
    fn candidate_actions(state: &GameState<'_>) -> Vec<Action> {
        let fresh_turn = state.actions_remaining == ACTIONS_PER_TURN;
        let mut actions = Vec::new();

        for (index, card) in state.card_dealer_state.face_up_cards.iter().enumerate() {
            if matches!(card, Some(color) if fresh_turn || color.is_not_wild()) {
                actions.push(Action::DrawFaceUp { index });
            }
        }

        if state.card_dealer_state.deck_size > 0 {
            actions.push(Action::DrawFromDeck);
        }

        // Claiming takes the whole turn.
        if let Some(hand) = state.viewer_hand().filter(|_| fresh_turn) {
            let claims = state
                .routes
                .iter()
                .filter(|route_claim| route_claim.claimed_by.is_none())
                .filter_map(|route_claim| {
                    payment(hand, route_claim.route).map(|cards| Action::ClaimRoute {
                        city_a: route_claim.route.city1.clone(),
                        city_b: route_claim.route.city2.clone(),
                        color: route_claim.route.color,
                        cards,
                    })
                });
            actions.extend(claims);
        }

        actions
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_action(&mut self, state: &GameState<'_>) -> Action {
        Self::candidate_actions(state)
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or(Action::DrawFromDeck)
    }
}

/// Cards from `hand` that pay for `route`, spending as few wild cards as possible.
///
/// Returns `None` if the hand cannot pay for the route.
///
/// # Example
/// ```
/// use ttr_rules::color::Color::*;
/// use ttr_rules::hand::Hand;
/// use ttr_rules::route::Route;
/// use ttr_rules::strategy::payment;
///
/// let hand = Hand::new(vec![Wild, Blue, Red, Red]);
///
/// assert_eq!(payment(&hand, &Route::new("Denver", "Helena", 4, Wild)), None);
/// assert_eq!(payment(&hand, &Route::new("Denver", "Omaha", 3, Red)), Some(vec![Red, Red, Wild]));
/// assert_eq!(payment(&hand, &Route::new("Omaha", "Duluth", 2, Wild)), Some(vec![Red, Red]));
/// ```
pub fn payment(hand: &Hand, route: &Route) -> Option<Vec<Color>> {
    let cost = usize::from(route.cost);
    let num_wild = hand.count(Color::Wild);

    let pay_with = |color: Color| {
        let num_colored = hand.count(color).min(cost);
        (num_colored + num_wild >= cost).then(|| {
            let mut cards = vec![color; num_colored];
            cards.resize(cost, Color::Wild);
            cards
        })
    };

    if route.color.is_not_wild() {
        return pay_with(route.color);
    }

    // A color missing from the hand still pays with wild cards alone.
    Color::palette()
        .filter_map(pay_with)
        .min_by_key(|cards| cards.iter().filter(|card| card.is_wild()).count())
}
