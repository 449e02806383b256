use crate::board::{Board, BoardFactory, ScoringTable};
use crate::card::{CardDealer, CardDealerState, NUM_FACE_UP_CARDS};
use crate::city::City;
use crate::color::Color;
use crate::config::GameConfig;
use crate::error::{ActionResult, FailureCause, SetupError};
use crate::hand::Hand;
use crate::ledger::RouteLedger;
use crate::player::{Player, PlayerAction, PlayerState};
use crate::route::{Destination, Route, RouteId};
use crate::turn::TurnTracker;

use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashSet;
use tracing::{debug, info, trace};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;

/// A route, along with who claimed it.
#[derive(Debug, PartialEq, Serialize)]
pub struct RouteClaim<'a> {
    pub id: RouteId,
    pub route: &'a Route,
    /// Name of the player who claimed the route, if any.
    pub claimed_by: Option<&'a str>,
}

/// All the information about a game's current state, returned by [`Game::get_state`].
#[derive(Debug, PartialEq, Serialize)]
pub struct GameState<'a> {
    /// The player from whose perspective the state was taken.
    pub viewer: &'a str,
    /// Name of the player whose turn it is.
    pub current_player: &'a str,
    /// Number of turns completed so far.
    pub turn: usize,
    pub actions_remaining: u8,
    pub card_dealer_state: CardDealerState<'a>,
    pub destination_pile_size: usize,
    pub scoring: &'a ScoringTable,
    pub routes: Vec<RouteClaim<'a>>,
    /// Information about all the players in the game, in seat order.
    ///
    /// This only contains public information about them, except for the viewer,
    /// whose private information is populated as well.
    pub players_state: SmallVec<[PlayerState<'a>; MAX_PLAYERS]>,
}

impl<'a> GameState<'a> {
    /// Whether the viewer is the one to play.
    #[inline]
    pub fn is_viewer_turn(&self) -> bool {
        self.viewer == self.current_player
    }

    /// The viewer's own train cards, if the viewer is a player of this game.
    pub fn viewer_hand(&self) -> Option<&'a Hand> {
        self.players_state
            .iter()
            .find_map(|player_state| player_state.private_player_state)
            .map(|private_player_state| &private_player_state.hand)
    }
}

/// The authoritative state of a game, and the only way to act upon it.
///
/// Players are referred to by their name. Every action first verifies that it is legal:
/// if it is not, it returns the [`FailureCause`] and leaves the game untouched.
/// Otherwise it is applied entirely, and the turn passes to the next player once
/// the current one has used their two action points.
///
/// Not thread-safe! Callers sharing a game must serialize access to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    config: GameConfig,
    /// In seat order.
    players: Vec<Player>,
    card_dealer: CardDealer,
    ledger: RouteLedger,
    turn_tracker: TurnTracker,
    scoring: ScoringTable,
    /// Destinations left over after dealing, the top one being the last.
    destination_pile: Vec<Destination>,
    /// How many train cards the game started with.
    num_train_cards: usize,
}

impl Game {
    /// Deals a new game on the given board.
    ///
    /// Players sit in the given order, and the first one starts. Each player is dealt
    /// their train cards, then each player is dealt their destinations, and finally
    /// the face-up display is filled from the deck.
    ///
    /// Returns a [`SetupError`] if the players or the board cannot make up a game.
    ///
    /// # Example
    /// ```
    /// use ttr_rules::board::{BoardFactory, StandardBoard};
    /// use ttr_rules::config::GameConfig;
    /// use ttr_rules::game::Game;
    ///
    /// let board = StandardBoard::seeded(3).create_board();
    /// let game = Game::new(["Alice", "Bob"], board, GameConfig::default()).unwrap();
    ///
    /// assert!(game.is_turn("Alice"));
    /// assert_eq!(game.hand("Bob").map(|hand| hand.len()), Some(5));
    /// assert_eq!(game.face_up_cards().len(), 5);
    /// ```
    pub fn new<I, S>(player_names: I, board: Board, config: GameConfig) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let player_names: Vec<String> = player_names.into_iter().map(Into::into).collect();
        Self::validate(&player_names, &board, &config)?;

        let Board {
            routes,
            deck,
            mut destinations,
            scoring,
        } = board;

        let num_train_cards = deck.len();
        let mut card_dealer = CardDealer::new(deck);

        let hands: Vec<_> = player_names
            .iter()
            .map(|_| card_dealer.deal(config.starting_hand_size))
            .collect();

        let players: Vec<_> = player_names
            .into_iter()
            .zip(hands)
            .map(|(name, hand)| {
                let top = destinations.len() - config.destinations_per_player;
                let dealt = destinations.split_off(top);
                // The top destination is dealt first.
                let dealt = dealt.into_iter().rev().collect();
                Player::new(name, hand, dealt)
            })
            .collect();

        card_dealer.fill_face_up_cards();

        info!(
            num_players = players.len(),
            num_routes = routes.len(),
            deck_size = card_dealer.deck_size(),
            "dealt a new game"
        );

        Ok(Self {
            turn_tracker: TurnTracker::new(players.len()),
            config,
            players,
            card_dealer,
            ledger: RouteLedger::new(routes),
            scoring,
            destination_pile: destinations,
            num_train_cards,
        })
    }

    /// Deals a new game on a board produced by the given factory.
    pub fn with_factory<I, S>(
        player_names: I,
        board_factory: &mut impl BoardFactory,
        config: GameConfig,
    ) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(player_names, board_factory.create_board(), config)
    }

    fn validate(
        player_names: &[String],
        board: &Board,
        config: &GameConfig,
    ) -> Result<(), SetupError> {
        let num_players = player_names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(SetupError::InvalidPlayerCount(num_players));
        }

        let mut seen = HashSet::with_capacity(num_players);
        for name in player_names {
            if !seen.insert(name.as_str()) {
                return Err(SetupError::DuplicatePlayer(name.clone()));
            }
        }

        // Saturates, as no deck can hold `usize::MAX` cards.
        let needed = num_players
            .saturating_mul(config.starting_hand_size)
            .saturating_add(NUM_FACE_UP_CARDS);
        if board.deck.len() < needed {
            return Err(SetupError::NotEnoughCards {
                needed,
                available: board.deck.len(),
            });
        }

        let needed = num_players.saturating_mul(config.destinations_per_player);
        if board.destinations.len() < needed {
            return Err(SetupError::NotEnoughDestinations {
                needed,
                available: board.destinations.len(),
            });
        }

        for route in &board.routes {
            if route.cost == 0 {
                return Err(SetupError::ZeroCostRoute(route.to_string()));
            }
            if route.city1 == route.city2 {
                return Err(SetupError::LoopRoute(route.to_string()));
            }
            if board.scoring.points(route.cost).is_none() {
                return Err(SetupError::MissingScore(route.cost));
            }
        }

        Ok(())
    }

    // Actions.

    /// Have a player draw a card from the face-up display.
    ///
    /// Returns an `Err` if either:
    ///   * It is not the player's turn ([`FailureCause::WrongTurn`]).
    ///   * There is no card at `card_index` ([`FailureCause::InvalidCardIndex`]).
    ///   * The card is wild, and the player already took an action this turn
    ///     ([`FailureCause::AlreadyDrew`]).
    ///
    /// Otherwise, moves the card to the player's hand, and replaces it with the top card
    /// of the deck. A wild card costs both action points of the turn, any other card costs one.
    pub fn draw_face_up_card(&mut self, player: &str, card_index: usize) -> ActionResult {
        self.try_draw_face_up_card(player, card_index)
            .map_err(|cause| Self::rejected(player, "draw_face_up_card", cause))
    }

    fn try_draw_face_up_card(&mut self, player: &str, card_index: usize) -> ActionResult {
        let seat = self.seat_on_turn(player)?;

        let card = self.card_dealer.peek_at_face_up_card(card_index)?;
        if card.is_wild() && !self.turn_tracker.is_fresh_turn() {
            return Err(FailureCause::AlreadyDrew);
        }

        // Validation is over: from here on, the action is applied in full.
        let card = self.card_dealer.take_face_up_card(card_index)?;
        let action = if card.is_wild() {
            PlayerAction::DrewFaceUpWildCard
        } else {
            PlayerAction::DrewFaceUpCard
        };

        let player = &mut self.players[seat];
        player.receive_card(card);
        let description = format!(
            "{} drew a {} card from the face-up display.",
            player.name(),
            card.card_label()
        );
        debug!(player = player.name(), ?card, card_index, "drew a face-up card");

        self.finish_action(seat, action, description);
        Ok(())
    }

    /// Have a player draw a card from the top of the deck.
    ///
    /// Returns an `Err` if either:
    ///   * It is not the player's turn ([`FailureCause::WrongTurn`]).
    ///   * The deck is empty ([`FailureCause::DeckEmpty`]).
    ///
    /// Otherwise, moves the top card to the player's hand, which costs one action point.
    pub fn draw_from_deck(&mut self, player: &str) -> ActionResult {
        self.try_draw_from_deck(player)
            .map_err(|cause| Self::rejected(player, "draw_from_deck", cause))
    }

    fn try_draw_from_deck(&mut self, player: &str) -> ActionResult {
        let seat = self.seat_on_turn(player)?;
        let card = self.card_dealer.draw_from_deck()?;

        let player = &mut self.players[seat];
        player.receive_card(card);
        let description = format!("{} drew a card from the deck.", player.name());
        debug!(player = player.name(), "drew a card from the deck");

        self.finish_action(seat, PlayerAction::DrewDeckCard, description);
        Ok(())
    }

    /// Have a player claim a route between two cities, using the given cards.
    ///
    /// As there can be many routes connecting two cities, the request specifies the `color` of
    /// the route: [`Color::Wild`] designates a route accepting any color.
    ///
    /// Returns an `Err` if either:
    ///   * It is not the player's turn ([`FailureCause::WrongTurn`]).
    ///   * The player already took an action this turn, as claiming takes the whole turn
    ///     ([`FailureCause::AlreadyDrew`]).
    ///   * No unclaimed route of that color connects the cities ([`FailureCause::NoRoute`]).
    ///   * The cards are not all in the player's hand ([`FailureCause::MissingCards`]).
    ///   * The cards do not fit the route, see [`Game::cards_match`]
    ///     ([`FailureCause::IncompatibleCards`]).
    ///
    /// Otherwise, claims the route for the player, discards the cards, adds the route's
    /// points to the player's score, and ends the turn.
    ///
    /// # Example
    /// ```
    /// use ttr_rules::board::{Board, ScoringTable};
    /// use ttr_rules::city::City;
    /// use ttr_rules::color::Color::*;
    /// use ttr_rules::config::GameConfig;
    /// use ttr_rules::error::FailureCause;
    /// use ttr_rules::game::Game;
    /// use ttr_rules::route::{Destination, Route};
    ///
    /// let board = Board {
    ///     routes: vec![Route::new("Raleigh", "Washington", 2, White)],
    ///     // Face-up cards first, then Bob's hand, then Alice's.
    ///     deck: vec![Red, Red, Red, Red, Red, Blue, Blue, White, White],
    ///     destinations: vec![Destination::new("Raleigh", "Washington", 2); 2],
    ///     scoring: ScoringTable::standard(),
    /// };
    /// let config = GameConfig { starting_hand_size: 2, destinations_per_player: 1 };
    /// let mut game = Game::new(["Alice", "Bob"], board, config).unwrap();
    /// let (raleigh, washington) = (City::from("Raleigh"), City::from("Washington"));
    ///
    /// assert_eq!(
    ///     game.claim_route("Bob", &raleigh, &washington, White, &[White, White]),
    ///     Err(FailureCause::WrongTurn)
    /// );
    /// assert_eq!(
    ///     game.claim_route("Alice", &washington, &raleigh, White, &[White, White]),
    ///     Ok(())
    /// );
    /// assert_eq!(game.score("Alice"), Some(0));
    /// assert!(game.is_turn("Bob"));
    /// ```
    pub fn claim_route(
        &mut self,
        player: &str,
        start: &City,
        end: &City,
        color: Color,
        cards: &[Color],
    ) -> ActionResult {
        self.try_claim_route(player, start, end, color, cards)
            .map_err(|cause| Self::rejected(player, "claim_route", cause))
    }

    fn try_claim_route(
        &mut self,
        player: &str,
        start: &City,
        end: &City,
        color: Color,
        cards: &[Color],
    ) -> ActionResult {
        let seat = self.seat_on_turn(player)?;

        if !self.turn_tracker.is_fresh_turn() {
            return Err(FailureCause::AlreadyDrew);
        }

        let route_id = self
            .ledger
            .find_unclaimed(start, end, color)
            .ok_or(FailureCause::NoRoute)?;

        if !self.players[seat].hand().contains_all(cards) {
            return Err(FailureCause::MissingCards);
        }

        let route = self.ledger.route(route_id).ok_or(FailureCause::NoRoute)?;
        if !Self::cards_match(route, cards) {
            return Err(FailureCause::IncompatibleCards);
        }

        // Every route cost has an entry, as verified when the game was dealt.
        let points = self.scoring.points(route.cost).unwrap_or_default();
        let description = format!(
            "{} claimed the route between {} and {} of cost {} ({} points).",
            self.players[seat].name(),
            route.city1,
            route.city2,
            route.cost,
            points
        );
        debug!(player, %route, points, "claimed a route");

        self.ledger.claim(route_id, seat);
        self.card_dealer.discard(cards.iter().copied());

        let player = &mut self.players[seat];
        player.spend_cards(cards);
        player.add_claimed_route(route_id, points);

        self.finish_action(seat, PlayerAction::ClaimedRoute, description);
        Ok(())
    }

    /// Whether the given cards can pay for the route.
    ///
    /// There must be exactly as many cards as the route's cost. Each card must either be wild,
    /// or be of the color to match. The color to match is the route's own color, unless the route
    /// accepts any color: then it is the smallest color amongst the cards, as ordered in [`Color`].
    ///
    /// # Example
    /// ```
    /// use ttr_rules::color::Color::*;
    /// use ttr_rules::game::Game;
    /// use ttr_rules::route::Route;
    ///
    /// let grey_route = Route::new("Atlanta", "Raleigh", 2, Wild);
    /// assert!(Game::cards_match(&grey_route, &[Orange, Orange]));
    /// assert!(Game::cards_match(&grey_route, &[Wild, Pink]));
    /// assert!(!Game::cards_match(&grey_route, &[Orange, Pink]));
    /// assert!(!Game::cards_match(&grey_route, &[Orange]));
    ///
    /// let blue_route = Route::new("Atlanta", "Miami", 2, Blue);
    /// assert!(Game::cards_match(&blue_route, &[Blue, Wild]));
    /// assert!(!Game::cards_match(&blue_route, &[Red, Red]));
    /// ```
    pub fn cards_match(route: &Route, cards: &[Color]) -> bool {
        if cards.len() != usize::from(route.cost) {
            return false;
        }

        let color_to_match = if route.color.is_wild() {
            match cards.iter().min() {
                Some(color) => *color,
                None => return false,
            }
        } else {
            route.color
        };

        cards
            .iter()
            .all(|card| *card == color_to_match || card.is_wild())
    }

    /// Performs the given action on behalf of `player`.
    pub fn apply(&mut self, player: &str, action: &crate::strategy::Action) -> ActionResult {
        use crate::strategy::Action;

        match action {
            Action::DrawFaceUp { index } => self.draw_face_up_card(player, *index),
            Action::DrawFromDeck => self.draw_from_deck(player),
            Action::ClaimRoute {
                city_a,
                city_b,
                color,
                cards,
            } => self.claim_route(player, city_a, city_b, *color, cards),
        }
    }

    fn seat_on_turn(&self, player: &str) -> Result<usize, FailureCause> {
        match self.seat(player) {
            Some(seat) if self.turn_tracker.is_turn(seat) => Ok(seat),
            _ => Err(FailureCause::WrongTurn),
        }
    }

    fn finish_action(&mut self, seat: usize, action: PlayerAction, description: String) {
        self.players[seat].record_action(self.turn_tracker.turn(), action, description);

        if self.turn_tracker.consume(action.cost()) {
            trace!(
                turn = self.turn_tracker.turn(),
                next_player = self.players[self.turn_tracker.current_player()].name(),
                "turn is over"
            );
        }
    }

    fn rejected(player: &str, action: &str, cause: FailureCause) -> FailureCause {
        debug!(player, action, ?cause, "rejected action");
        cause
    }

    // Queries.

    #[inline]
    fn seat(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name() == player)
    }

    #[inline]
    fn player(&self, player: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == player)
    }

    /// Determine if it is this player's turn.
    /// Unknown players never have the turn.
    #[inline]
    pub fn is_turn(&self, player: &str) -> bool {
        self.seat(player)
            .is_some_and(|seat| self.turn_tracker.is_turn(seat))
    }

    /// Name of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> &str {
        self.players[self.turn_tracker.current_player()].name()
    }

    /// Action points left to the current player this turn.
    #[inline]
    pub fn actions_remaining(&self) -> u8 {
        self.turn_tracker.actions_remaining()
    }

    /// Number of turns completed so far.
    #[inline]
    pub fn turn(&self) -> usize {
        self.turn_tracker.turn()
    }

    #[inline]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Names of the players, in seat order.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(Player::name)
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn scoring(&self) -> &ScoringTable {
        &self.scoring
    }

    #[inline]
    pub fn routes(&self) -> &[Route] {
        self.ledger.routes()
    }

    /// Every route along with who claimed it, in board order.
    pub fn route_claims(&self) -> Vec<RouteClaim> {
        self.ledger
            .iter()
            .map(|(id, route, claimant)| RouteClaim {
                id,
                route,
                claimed_by: claimant.map(|seat| self.players[seat].name()),
            })
            .collect()
    }

    /// Name of the player who claimed the route, if any.
    pub fn claimant(&self, route_id: RouteId) -> Option<&str> {
        self.ledger
            .claimant(route_id)
            .map(|seat| self.players[seat].name())
    }

    #[inline]
    pub fn is_claimed(&self, route_id: RouteId) -> bool {
        self.ledger.is_claimed(route_id)
    }

    /// Routes that can still be claimed by someone.
    pub fn unclaimed_routes(&self) -> impl Iterator<Item = (RouteId, &Route)> {
        self.ledger.unclaimed_routes()
    }

    /// Routes claimed by the given player. Empty for unknown players.
    pub fn routes_claimed_by(&self, player: &str) -> Vec<(RouteId, &Route)> {
        match self.seat(player) {
            Some(seat) => self.ledger.routes_claimed_by(seat).collect(),
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn face_up_cards(&self) -> &[Option<Color>] {
        self.card_dealer.face_up_cards()
    }

    #[inline]
    pub fn deck_size(&self) -> usize {
        self.card_dealer.deck_size()
    }

    #[inline]
    pub fn discard_pile_size(&self) -> usize {
        self.card_dealer.discard_pile_size()
    }

    #[inline]
    pub fn destination_pile_size(&self) -> usize {
        self.destination_pile.len()
    }

    /// How many train cards the game started with.
    #[inline]
    pub fn num_train_cards(&self) -> usize {
        self.num_train_cards
    }

    pub fn hand(&self, player: &str) -> Option<&Hand> {
        self.player(player).map(Player::hand)
    }

    /// Determine if the given cards are in the player's hand.
    pub fn in_hand(&self, player: &str, cards: &[Color]) -> bool {
        self.hand(player).is_some_and(|hand| hand.contains_all(cards))
    }

    pub fn destinations(&self, player: &str) -> Option<&[Destination]> {
        self.player(player).map(Player::destinations)
    }

    pub fn score(&self, player: &str) -> Option<i32> {
        self.player(player).map(Player::score)
    }

    /// The score of every player, in seat order.
    pub fn all_scores(&self) -> Vec<(&str, i32)> {
        self.players
            .iter()
            .map(|player| (player.name(), player.score()))
            .collect()
    }

    /// Returns the game's state, from the perspective of a given player.
    ///
    /// A given player should only be able to know about the public information of other
    /// players, but should know private information about themselves (e.g. their hand).
    pub fn get_state<'a>(&'a self, viewer: &'a str) -> GameState<'a> {
        GameState {
            viewer,
            current_player: self.current_player(),
            turn: self.turn_tracker.turn(),
            actions_remaining: self.turn_tracker.actions_remaining(),
            card_dealer_state: self.card_dealer.get_state(),
            destination_pile_size: self.destination_pile.len(),
            scoring: &self.scoring,
            routes: self.route_claims(),
            players_state: self
                .players
                .iter()
                .map(|player| player.get_player_state(player.name() == viewer))
                .collect(),
        }
    }
}
