use crate::color::Color;
use crate::color::Color::*;
use crate::route::{Destination, Route};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter::repeat;

const NUM_WILD_CARDS: usize = 14;
const NUM_NON_WILD_CARDS: usize = 12;

/// Points granted for claiming a route, by route cost.
///
/// # JSON
/// Serialized as an object mapping each cost to its points.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoringTable(BTreeMap<u8, i32>);

impl ScoringTable {
    pub fn new(points_per_cost: BTreeMap<u8, i32>) -> Self {
        Self(points_per_cost)
    }

    /// The usual scoring: the longer the route, the more it is worth per card.
    ///
    /// # Example
    /// ```
    /// use ttr_rules::board::ScoringTable;
    ///
    /// let scoring = ScoringTable::standard();
    ///
    /// assert_eq!(scoring.points(3), Some(4));
    /// assert_eq!(scoring.points(6), Some(15));
    /// assert_eq!(scoring.points(7), None);
    /// ```
    pub fn standard() -> Self {
        [(1, 1), (2, 2), (3, 4), (4, 7), (5, 10), (6, 15)]
            .into_iter()
            .collect()
    }

    #[inline]
    pub fn points(&self, cost: u8) -> Option<i32> {
        self.0.get(&cost).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, i32)> + '_ {
        self.0.iter().map(|(cost, points)| (*cost, *points))
    }
}

impl FromIterator<(u8, i32)> for ScoringTable {
    fn from_iter<I: IntoIterator<Item = (u8, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything the rules engine needs to know about the board, handed over once at game start.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Board {
    /// The id of a route is its position in this list.
    pub routes: Vec<Route>,
    /// Train cards, the top card being the last one.
    pub deck: Vec<Color>,
    /// Destination tickets, the top ticket being the last one.
    pub destinations: Vec<Destination>,
    pub scoring: ScoringTable,
}

/// Produces the board of a new game.
///
/// The engine only consumes boards; how they are laid out and shuffled is up to the factory.
pub trait BoardFactory {
    fn create_board(&mut self) -> Board;
}

/// Factory for the standard North-American board: 100 routes over 36 cities,
/// 30 destination tickets, and 110 train cards.
pub struct StandardBoard {
    rng: StdRng,
}

impl StandardBoard {
    /// A factory shuffling with fresh entropy every time.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A factory whose shuffles are reproducible.
    ///
    /// # Example
    /// ```
    /// use ttr_rules::board::{BoardFactory, StandardBoard};
    ///
    /// let board = StandardBoard::seeded(7).create_board();
    /// assert_eq!(board, StandardBoard::seeded(7).create_board());
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn routes() -> Vec<Route> {
        ROUTES
            .iter()
            .map(|(start, end, cost, color)| Route::new(*start, *end, *cost, *color))
            .collect()
    }

    fn train_cards() -> Vec<Color> {
        let mut train_cards = Vec::with_capacity(8 * NUM_NON_WILD_CARDS + NUM_WILD_CARDS);
        for color in Color::palette() {
            train_cards.extend(repeat(color).take(NUM_NON_WILD_CARDS));
        }
        train_cards.extend(repeat(Wild).take(NUM_WILD_CARDS));

        train_cards
    }

    fn destinations() -> Vec<Destination> {
        DESTINATIONS
            .iter()
            .map(|(start, end, value)| Destination::new(*start, *end, *value))
            .collect()
    }
}

impl Default for StandardBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardFactory for StandardBoard {
    fn create_board(&mut self) -> Board {
        let mut deck = Self::train_cards();
        deck.shuffle(&mut self.rng);

        let mut destinations = Self::destinations();
        destinations.shuffle(&mut self.rng);

        Board {
            routes: Self::routes(),
            deck,
            destinations,
            scoring: ScoringTable::standard(),
        }
    }
}

/// Routes of the standard board. Parallel routes are listed one after the other.
#[rustfmt::skip]
const ROUTES: [(&str, &str, u8, Color); 100] = [
    ("Atlanta", "Charleston", 2, Wild),
    ("Atlanta", "Miami", 5, Blue),
    ("Atlanta", "Nashville", 1, Wild),
    ("Atlanta", "New Orleans", 5, Orange),
    ("Atlanta", "New Orleans", 5, Yellow),
    ("Atlanta", "Raleigh", 2, Wild),
    ("Atlanta", "Raleigh", 2, Wild),
    ("Boston", "Montréal", 2, Wild),
    ("Boston", "Montréal", 2, Wild),
    ("Boston", "New York", 2, Yellow),
    ("Boston", "New York", 2, Red),
    ("Calgary", "Helena", 4, Wild),
    ("Calgary", "Seattle", 4, Wild),
    ("Calgary", "Vancouver", 3, Wild),
    ("Calgary", "Winnipeg", 6, White),
    ("Charleston", "Miami", 4, Pink),
    ("Charleston", "Raleigh", 2, Wild),
    ("Chicago", "Duluth", 3, Red),
    ("Chicago", "Omaha", 4, Blue),
    ("Chicago", "Pittsburgh", 3, Black),
    ("Chicago", "Pittsburgh", 3, Orange),
    ("Chicago", "Saint Louis", 2, Green),
    ("Chicago", "Saint Louis", 2, White),
    ("Chicago", "Toronto", 4, White),
    ("Dallas", "El Paso", 4, Red),
    ("Dallas", "Houston", 1, Wild),
    ("Dallas", "Houston", 1, Wild),
    ("Dallas", "Little Rock", 2, Wild),
    ("Dallas", "Oklahoma City", 2, Wild),
    ("Dallas", "Oklahoma City", 2, Wild),
    ("Denver", "Helena", 4, Green),
    ("Denver", "Kansas City", 4, Black),
    ("Denver", "Kansas City", 4, Orange),
    ("Denver", "Oklahoma City", 4, Red),
    ("Denver", "Omaha", 4, Pink),
    ("Denver", "Phoenix", 5, White),
    ("Denver", "Salt Lake City", 3, Red),
    ("Denver", "Salt Lake City", 3, Yellow),
    ("Denver", "Santa Fe", 2, Wild),
    ("Duluth", "Helena", 6, Orange),
    ("Duluth", "Omaha", 2, Wild),
    ("Duluth", "Omaha", 2, Wild),
    ("Duluth", "Sault St. Marie", 3, Wild),
    ("Duluth", "Toronto", 6, Pink),
    ("Duluth", "Winnipeg", 4, Black),
    ("El Paso", "Houston", 6, Green),
    ("El Paso", "Los Angeles", 6, Black),
    ("El Paso", "Oklahoma City", 5, Yellow),
    ("El Paso", "Phoenix", 3, Wild),
    ("El Paso", "Santa Fe", 2, Wild),
    ("Helena", "Omaha", 5, Red),
    ("Helena", "Salt Lake City", 3, Pink),
    ("Helena", "Seattle", 6, Yellow),
    ("Helena", "Winnipeg", 4, Blue),
    ("Houston", "New Orleans", 2, Wild),
    ("Kansas City", "Saint Louis", 2, Blue),
    ("Kansas City", "Saint Louis", 2, Pink),
    ("Kansas City", "Oklahoma City", 2, Wild),
    ("Kansas City", "Oklahoma City", 2, Wild),
    ("Kansas City", "Omaha", 1, Wild),
    ("Kansas City", "Omaha", 1, Wild),
    ("Las Vegas", "Los Angeles", 2, Wild),
    ("Las Vegas", "Salt Lake City", 3, Orange),
    ("Little Rock", "Nashville", 3, White),
    ("Little Rock", "New Orleans", 3, Wild),
    ("Little Rock", "Oklahoma City", 2, Wild),
    ("Little Rock", "Saint Louis", 2, Wild),
    ("Los Angeles", "Phoenix", 3, Wild),
    ("Los Angeles", "San Francisco", 3, Pink),
    ("Los Angeles", "San Francisco", 3, Yellow),
    ("Miami", "New Orleans", 6, Red),
    ("Montréal", "New York", 3, Blue),
    ("Montréal", "Sault St. Marie", 5, Black),
    ("Montréal", "Toronto", 3, Wild),
    ("Nashville", "Pittsburgh", 4, Yellow),
    ("Nashville", "Raleigh", 3, Black),
    ("Nashville", "Saint Louis", 2, Wild),
    ("New York", "Pittsburgh", 2, Green),
    ("New York", "Pittsburgh", 2, White),
    ("New York", "Washington", 2, Black),
    ("New York", "Washington", 2, Orange),
    ("Oklahoma City", "Santa Fe", 3, Blue),
    ("Phoenix", "Santa Fe", 3, Wild),
    ("Pittsburgh", "Raleigh", 2, Wild),
    ("Pittsburgh", "Saint Louis", 5, Green),
    ("Pittsburgh", "Toronto", 2, Wild),
    ("Pittsburgh", "Washington", 2, Wild),
    ("Portland", "Salt Lake City", 6, Blue),
    ("Portland", "San Francisco", 5, Green),
    ("Portland", "San Francisco", 5, Pink),
    ("Raleigh", "Washington", 2, Wild),
    ("Raleigh", "Washington", 2, Wild),
    ("Salt Lake City", "San Francisco", 5, Orange),
    ("Salt Lake City", "San Francisco", 5, White),
    ("Sault St. Marie", "Toronto", 2, Wild),
    ("Sault St. Marie", "Winnipeg", 6, Wild),
    ("Seattle", "Portland", 1, Wild),
    ("Seattle", "Portland", 1, Wild),
    ("Seattle", "Vancouver", 1, Wild),
    ("Seattle", "Vancouver", 1, Wild),];

/// Destination tickets of the standard board.
const DESTINATIONS: [(&str, &str, u8); 30] = [
    ("Boston", "Miami", 12),
    ("Calgary", "Phoenix", 13),
    ("Calgary", "Salt Lake City", 7),
    ("Chicago", "New Orleans", 7),
    ("Chicago", "Santa Fe", 9),
    ("Dallas", "New York", 11),
    ("Denver", "El Paso", 4),
    ("Denver", "Pittsburgh", 11),
    ("Duluth", "El Paso", 10),
    ("Duluth", "Houston", 8),
    ("Helena", "Los Angeles", 8),
    ("Kansas City", "Houston", 5),
    ("Los Angeles", "Chicago", 16),
    ("Los Angeles", "Miami", 20),
    ("Los Angeles", "New York", 21),
    ("Montréal", "Atlanta", 9),
    ("Montréal", "New Orleans", 13),
    ("New York", "Atlanta", 6),
    ("Portland", "Nashville", 17),
    ("Portland", "Phoenix", 11),
    ("San Francisco", "Atlanta", 17),
    ("Sault St. Marie", "Nashville", 8),
    ("Sault St. Marie", "Oklahoma City", 9),
    ("Seattle", "Los Angeles", 9),
    ("Seattle", "New York", 22),
    ("Toronto", "Miami", 10),
    ("Vancouver", "Montréal", 20),
    ("Vancouver", "Santa Fe", 13),
    ("Winnipeg", "Houston", 12),
    ("Winnipeg", "Little Rock", 11),];
