use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Why a player action was refused.
///
/// A refused action never mutates the game.
///
/// # JSON
/// Causes are serialized as their numeric code. Code 0 stands for success
/// and is never carried by a `FailureCause`.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Error, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum FailureCause {
    #[error("no unclaimed route of that color connects those cities")]
    NoRoute = 1,
    #[error("it is not this player's turn")]
    WrongTurn = 2,
    #[error("the offered cards are not all in the player's hand")]
    MissingCards = 3,
    #[error("the offered cards do not fit the route's cost and color")]
    IncompatibleCards = 4,
    #[error("this action needs both actions of the turn, but one was already taken")]
    AlreadyDrew = 5,
    #[error("the deck is empty")]
    DeckEmpty = 6,
    #[error("there is no face-up card at that index")]
    InvalidCardIndex = 7,
}

impl FailureCause {
    /// The numeric code of the cause, as used on the wire.
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Parses a numeric code back into a cause.
    ///
    /// Returns `None` for 0 (success) and for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(FailureCause::NoRoute),
            2 => Some(FailureCause::WrongTurn),
            3 => Some(FailureCause::MissingCards),
            4 => Some(FailureCause::IncompatibleCards),
            5 => Some(FailureCause::AlreadyDrew),
            6 => Some(FailureCause::DeckEmpty),
            7 => Some(FailureCause::InvalidCardIndex),
            _ => None,
        }
    }
}

/// All player actions have the same `Result`:
/// either it succeeded, or it was refused for the given cause.
pub type ActionResult = Result<(), FailureCause>;

/// Problems with the inputs given to [`crate::game::Game::new`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SetupError {
    #[error("cannot create a game with {0} players: one must have between {min} and {max} players", min = crate::game::MIN_PLAYERS, max = crate::game::MAX_PLAYERS)]
    InvalidPlayerCount(usize),
    #[error("more than one player is named `{0}`")]
    DuplicatePlayer(String),
    #[error("the deck holds {available} cards, but {needed} are needed to deal")]
    NotEnoughCards { needed: usize, available: usize },
    #[error("there are {available} destinations, but {needed} are needed to deal")]
    NotEnoughDestinations { needed: usize, available: usize },
    #[error("route {0} costs no cards")]
    ZeroCostRoute(String),
    #[error("route {0} starts and ends in the same city")]
    LoopRoute(String),
    #[error("no points are defined for routes of cost {0}")]
    MissingScore(u8),
}
