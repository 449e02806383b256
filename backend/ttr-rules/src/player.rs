use crate::color::Color;
use crate::hand::Hand;
use crate::route::{Destination, RouteId};

use serde::Serialize;
use smallvec::SmallVec;

/// Represents all the actions that a player can take.
/// Used to describe what a player did during their last turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    /// The first and only player action per turn.
    ClaimedRoute,
    /// The first and only player action per turn.
    DrewFaceUpWildCard,
    /// The first or second of two player actions per turn.
    DrewFaceUpCard,
    /// The first or second of two player actions per turn.
    DrewDeckCard,
}

impl PlayerAction {
    /// How many action points the action costs.
    pub fn cost(&self) -> u8 {
        match self {
            PlayerAction::ClaimedRoute | PlayerAction::DrewFaceUpWildCard => 2,
            PlayerAction::DrewFaceUpCard | PlayerAction::DrewDeckCard => 1,
        }
    }
}

/// Keeps track of actions taken at a given turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TurnActions {
    /// The last turn during which the player acted, `None` before their first action.
    pub turn: Option<usize>,
    /// For a given turn, a player can take at most two actions.
    pub actions: SmallVec<[PlayerAction; 2]>,
    /// Human-readable description of the corresponding action that was taken by the player.
    /// This is shared with other players, so no private information is written in it.
    pub description: SmallVec<[String; 2]>,
}

/// Information about a player's state that is visible to all players.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublicPlayerState {
    /// Unique to each player in the game.
    pub name: String,
    /// Points gained by claiming routes, minus the value of the destinations dealt.
    pub score: i32,
    /// How many train cards the player holds.
    /// This is derived from [`PrivatePlayerState::hand`].
    pub num_train_cards: usize,
    pub num_destinations: usize,
    /// Routes claimed by the player, in the order they were claimed.
    pub claimed_routes: Vec<RouteId>,
    /// Actions taken by the player during the last turn they have participated in.
    pub turn_actions: TurnActions,
}

/// Information about a player's state that is only visible to that player.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrivatePlayerState {
    pub hand: Hand,
    pub destinations: Vec<Destination>,
}

/// All the information about a player's current state, returned by [`Player::get_player_state`].
#[derive(Debug, PartialEq, Serialize)]
pub struct PlayerState<'a> {
    /// Encapsulates information that is visible to all players. Always populated!
    pub public_player_state: &'a PublicPlayerState,
    /// Encapsulates information that is *only* visible to the player themselves.
    pub private_player_state: Option<&'a PrivatePlayerState>,
}

/// Encapsulates all the information held about one player.
///
/// A [`Player`] does not validate anything: the [`crate::game::Game`] checks that an action
/// is legal before recording its effects here.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    public: PublicPlayerState,
    private: PrivatePlayerState,
}

impl Player {
    /// Creates a player with their dealt cards and destinations.
    ///
    /// Every destination counts against the player until the end of the game,
    /// so the score starts at minus the sum of their values.
    pub fn new(name: String, hand: Vec<Color>, destinations: Vec<Destination>) -> Self {
        let score = -destinations
            .iter()
            .map(|destination| i32::from(destination.value))
            .sum::<i32>();

        Self {
            public: PublicPlayerState {
                name,
                score,
                num_train_cards: hand.len(),
                num_destinations: destinations.len(),
                claimed_routes: Vec::new(),
                turn_actions: TurnActions::default(),
            },
            private: PrivatePlayerState {
                hand: Hand::new(hand),
                destinations,
            },
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.public.name
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.public.score
    }

    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.private.hand
    }

    #[inline]
    pub fn destinations(&self) -> &[Destination] {
        &self.private.destinations
    }

    #[inline]
    pub fn claimed_routes(&self) -> &[RouteId] {
        &self.public.claimed_routes
    }

    #[inline]
    pub fn turn_actions(&self) -> &TurnActions {
        &self.public.turn_actions
    }

    pub(crate) fn receive_card(&mut self, card: Color) {
        self.private.hand.add(card);
        self.public.num_train_cards = self.private.hand.len();
    }

    pub(crate) fn spend_cards(&mut self, cards: &[Color]) {
        for card in cards {
            self.private.hand.remove(*card);
        }
        self.public.num_train_cards = self.private.hand.len();
    }

    pub(crate) fn add_claimed_route(&mut self, route_id: RouteId, points: i32) {
        self.public.claimed_routes.push(route_id);
        self.public.score += points;
    }

    /// Records the action taken at `turn`.
    /// The first action of a turn clears whatever was recorded for an older turn.
    pub(crate) fn record_action(&mut self, turn: usize, action: PlayerAction, description: String) {
        let turn_actions = &mut self.public.turn_actions;
        if turn_actions.turn != Some(turn) {
            turn_actions.turn = Some(turn);
            turn_actions.actions.clear();
            turn_actions.description.clear();
        }

        turn_actions.actions.push(action);
        turn_actions.description.push(description);
    }

    /// Retrieve the player's state.
    ///
    /// The private state is only populated if `reveal_private` is set, i.e. if the request
    /// comes from the player themselves.
    pub fn get_player_state(&self, reveal_private: bool) -> PlayerState {
        PlayerState {
            public_player_state: &self.public,
            private_player_state: reveal_private.then_some(&self.private),
        }
    }
}
