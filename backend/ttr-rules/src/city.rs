use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a city on the board.
///
/// Boards are supplied at game start, so cities are not a closed set: a city
/// is simply known by its name.
///
/// # JSON
/// Cities are serialized as their name.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for City {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for City {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
