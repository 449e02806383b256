use crate::city::City;
use crate::color::Color;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a route on the board: its position in the board's route list.
///
/// Two parallel routes between the same cities can be indistinguishable by value
/// (e.g. two grey routes of the same length), so routes are always referred to by id.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RouteId(pub usize);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An undirected connection between two cities.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Route {
    pub city1: City,
    pub city2: City,
    /// How many train cards are needed to claim the route.
    pub cost: u8,
    /// The color of the cards needed to claim the route.
    /// The `Wild` color means that any single color matches.
    pub color: Color,
}

impl Route {
    pub fn new(city1: impl Into<City>, city2: impl Into<City>, cost: u8, color: Color) -> Self {
        Self {
            city1: city1.into(),
            city2: city2.into(),
            cost,
            color,
        }
    }

    /// Whether `city` is one of the two endpoints.
    #[inline]
    pub fn contains_city(&self, city: &City) -> bool {
        self.city1 == *city || self.city2 == *city
    }

    /// The endpoint opposite to `city`, or `None` if `city` is not an endpoint.
    ///
    /// # Example
    /// ```
    /// use ttr_rules::city::City;
    /// use ttr_rules::color::Color;
    /// use ttr_rules::route::Route;
    ///
    /// let route = Route::new("Denver", "Omaha", 4, Color::Pink);
    ///
    /// assert_eq!(route.other_city(&City::from("Omaha")), Some(&City::from("Denver")));
    /// assert_eq!(route.other_city(&City::from("Miami")), None);
    /// ```
    pub fn other_city(&self, city: &City) -> Option<&City> {
        if *city == self.city1 {
            Some(&self.city2)
        } else if *city == self.city2 {
            Some(&self.city1)
        } else {
            None
        }
    }

    /// Whether the route links `start` and `end`, in any direction.
    #[inline]
    pub fn connects(&self, start: &City, end: &City) -> bool {
        self.other_city(start) == Some(end)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.city1,
            self.city2,
            self.cost,
            self.color.label()
        )
    }
}

/// A private goal: connect both cities to be worth `value` points.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Destination {
    pub city1: City,
    pub city2: City,
    pub value: u8,
}

impl Destination {
    pub fn new(city1: impl Into<City>, city2: impl Into<City>, value: u8) -> Self {
        Self {
            city1: city1.into(),
            city2: city2.into(),
            value,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.city1, self.city2, self.value)
    }
}
